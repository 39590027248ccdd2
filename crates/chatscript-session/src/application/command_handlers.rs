//! Command handlers for session traversal.
//!
//! Each handler orchestrates domain logic: load state, run the engine,
//! persist the result, publish events for terminal transitions.

use chatscript_core::clock::Clock;
use chatscript_core::error::DomainError;
use chatscript_core::event::{ChatCompleted, EventSink};
use chatscript_core::session::{SessionState, TranscriptEntry};
use chatscript_core::store::SessionStore;
use chatscript_script::graph::DialogueGraph;
use uuid::Uuid;

use crate::domain::engine::{SessionEngine, Transition};

/// A learner's response submission: the step they moved to and their
/// accumulated transcript.
#[derive(Debug, Clone)]
pub struct SubmitResponse {
    /// The learner submitting.
    pub learner_id: Uuid,
    /// The step the chosen response points at. Absent when the response
    /// ends the chat without a next step.
    pub current_step: Option<String>,
    /// The transcript as the client has accumulated it.
    pub messages: Vec<TranscriptEntry>,
}

/// Handles the `SubmitResponse` command: loads the learner's state,
/// applies the transition, persists the result, and publishes a
/// completion event plus a progress tick when a terminal step is
/// reached.
///
/// State is saved before events are published, so a failing event sink
/// never loses the learner's progress.
///
/// # Errors
///
/// Returns `DomainError` if loading, saving, or event publication fails.
pub async fn handle_submit_response(
    command: SubmitResponse,
    graph: &DialogueGraph,
    store: &dyn SessionStore,
    events: &dyn EventSink,
    clock: &dyn Clock,
) -> Result<SessionState, DomainError> {
    let mut session = store.load(command.learner_id).await?.unwrap_or_default();

    let transition = SessionEngine.apply_response(
        graph,
        &mut session,
        command.current_step,
        command.messages,
    );

    store.save(command.learner_id, &session).await?;

    if let Transition::Completed { final_step } = transition {
        tracing::info!(
            learner_id = %command.learner_id,
            final_step = final_step.as_deref().unwrap_or("<none>"),
            "chat completed"
        );
        events
            .publish_completion(ChatCompleted {
                learner_id: command.learner_id,
                final_step,
                occurred_at: clock.now(),
            })
            .await?;
        events.publish_progress(command.learner_id).await?;
    }

    Ok(session)
}

/// Handles a start request: positions a fresh session at the entry step
/// and persists it. A session that already has a position is returned
/// unchanged, so starting is idempotent.
///
/// # Errors
///
/// Returns `DomainError` if loading or saving fails.
pub async fn handle_start(
    learner_id: Uuid,
    graph: &DialogueGraph,
    store: &dyn SessionStore,
) -> Result<SessionState, DomainError> {
    let mut session = store.load(learner_id).await?.unwrap_or_default();

    SessionEngine.start(graph, &mut session);

    store.save(learner_id, &session).await?;
    Ok(session)
}

/// Handles a restart request: clears the learner's transcript and
/// position and persists the fresh state. Publishes nothing.
///
/// # Errors
///
/// Returns `DomainError` if loading or saving fails.
pub async fn handle_restart(
    learner_id: Uuid,
    store: &dyn SessionStore,
) -> Result<SessionState, DomainError> {
    let mut session = store.load(learner_id).await?.unwrap_or_default();

    SessionEngine.restart(&mut session);

    store.save(learner_id, &session).await?;
    Ok(session)
}
