//! Query handlers returning read-only views of a learner's chat.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use chatscript_core::error::DomainError;
use chatscript_core::presentation::PresentationConfig;
use chatscript_core::rng::DeterministicRng;
use chatscript_core::session::{SessionState, TranscriptEntry};
use chatscript_core::speaker;
use chatscript_core::store::SessionStore;
use chatscript_core::user::{self, UserDirectory};
use chatscript_script::graph::{self, DialogueGraph};
use chatscript_script::step::Step;

/// Everything a client needs to render one learner's chat: the
/// personalized dialogue graph, the learner's saved state, and
/// presentation timing.
#[derive(Debug, Clone, Serialize)]
pub struct ChatView {
    /// The learner the view was built for.
    pub user_id: Uuid,
    /// Speaker ID used for default bot entries.
    pub bot_speaker_id: String,
    /// Speaker ID used for learner entries.
    pub user_speaker_id: String,
    /// All steps of the personalized graph, keyed by step ID.
    pub steps: BTreeMap<String, Step>,
    /// The graph's entry step, absent for an empty script.
    pub first_step: Option<Step>,
    /// The learner's transcript and position.
    pub user_state: SessionState,
    /// Timing constants for the rendering layer.
    pub presentation: PresentationConfig,
}

/// Retrieves a learner's saved state. A learner without a session gets a
/// fresh default rather than an error.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if loading fails.
pub async fn get_session_state(
    learner_id: Uuid,
    store: &dyn SessionStore,
) -> Result<SessionState, DomainError> {
    Ok(store.load(learner_id).await?.unwrap_or_default())
}

/// Builds the full chat view for a learner.
///
/// The dialogue graph is rebuilt per learner because the name
/// placeholder is substituted with the learner's first name before
/// parsing.
///
/// # Errors
///
/// Returns `DomainError::Parse` when the script is malformed and
/// `DomainError::Infrastructure` when loading state fails.
pub async fn get_chat_view(
    learner_id: Uuid,
    script: &str,
    users: &dyn UserDirectory,
    store: &dyn SessionStore,
    presentation: &PresentationConfig,
) -> Result<ChatView, DomainError> {
    let display_name = users.display_name(learner_id).await;
    let first_name = display_name
        .as_deref()
        .map(user::first_name)
        .filter(|name| !name.is_empty());

    let graph = graph::build_graph(script, first_name)?;
    let user_state = get_session_state(learner_id, store).await?;

    Ok(ChatView {
        user_id: learner_id,
        bot_speaker_id: speaker::DEFAULT_BOT_ID.to_owned(),
        user_speaker_id: speaker::USER_ID.to_owned(),
        steps: graph.steps().cloned().map(|step| (step.id.clone(), step)).collect(),
        first_step: graph.entry_step().cloned(),
        user_state,
        presentation: presentation.clone(),
    })
}

/// Resolves the bot messages a step displays for one visit, re-sampling
/// alternative phrasings.
///
/// # Errors
///
/// Returns `DomainError::StepNotFound` when the graph has no step with
/// the given ID.
pub fn render_step_messages(
    step_id: &str,
    graph: &DialogueGraph,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<TranscriptEntry>, DomainError> {
    let step = graph
        .get(step_id)
        .ok_or_else(|| DomainError::StepNotFound(step_id.to_owned()))?;
    Ok(crate::domain::render::render_step(step, rng))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use chatscript_core::user::StaticDirectory;
    use chatscript_script::graph::build_graph;
    use chatscript_test_support::{EmptySessionStore, MockRng, RecordingSessionStore};

    const SCRIPT: &str = concat!(
        "- 1:\n",
        "    messages: Hello [NAME]!\n",
        "    responses:\n",
        "    - Hi: 2\n",
        "- 2:\n",
        "    messages: Bye.\n",
    );

    #[tokio::test]
    async fn test_get_session_state_defaults_for_unknown_learner() {
        // Arrange
        let store = EmptySessionStore;

        // Act
        let state = get_session_state(Uuid::new_v4(), &store).await.unwrap();

        // Assert
        assert!(state.is_fresh());
    }

    #[tokio::test]
    async fn test_get_chat_view_personalizes_with_first_name() {
        // Arrange
        let users = StaticDirectory(Some("John Doe".to_owned()));
        let store = EmptySessionStore;

        // Act
        let view = get_chat_view(
            Uuid::new_v4(),
            SCRIPT,
            &users,
            &store,
            &PresentationConfig::default(),
        )
        .await
        .unwrap();

        // Assert
        let first = view.first_step.unwrap();
        assert_eq!(first.messages[0].0[0].message, "Hello John!");
        assert_eq!(view.steps.len(), 2);
        assert_eq!(view.bot_speaker_id, "bot");
        assert_eq!(view.user_speaker_id, "user");
        assert!(view.user_state.is_fresh());
    }

    #[tokio::test]
    async fn test_get_chat_view_leaves_placeholder_without_a_name() {
        let users = StaticDirectory(None);
        let store = EmptySessionStore;

        let view = get_chat_view(
            Uuid::new_v4(),
            SCRIPT,
            &users,
            &store,
            &PresentationConfig::default(),
        )
        .await
        .unwrap();

        let first = view.first_step.unwrap();
        assert_eq!(first.messages[0].0[0].message, "Hello [NAME]!");
    }

    #[tokio::test]
    async fn test_get_chat_view_carries_saved_state() {
        // Arrange
        let stored = SessionState {
            messages: vec![TranscriptEntry {
                from: "bot".to_owned(),
                message: "Hello John!".to_owned(),
                step: "1".to_owned(),
            }],
            current_step: Some("1".to_owned()),
        };
        let users = StaticDirectory(Some("John Doe".to_owned()));
        let store = RecordingSessionStore::new(Some(stored.clone()));

        // Act
        let view = get_chat_view(
            Uuid::new_v4(),
            SCRIPT,
            &users,
            &store,
            &PresentationConfig::default(),
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(view.user_state, stored);
    }

    #[tokio::test]
    async fn test_get_chat_view_propagates_parse_failure() {
        let users = StaticDirectory(None);
        let store = EmptySessionStore;

        let result = get_chat_view(
            Uuid::new_v4(),
            "not a sequence",
            &users,
            &store,
            &PresentationConfig::default(),
        )
        .await;

        assert!(matches!(result, Err(DomainError::Parse(_))));
    }

    #[test]
    fn test_render_step_messages_resolves_known_step() {
        let graph = build_graph(SCRIPT, Some("John")).unwrap();

        let entries = render_step_messages("1", &graph, &mut MockRng).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "Hello John!");
        assert_eq!(entries[0].from, "bot");
        assert_eq!(entries[0].step, "1");
    }

    #[test]
    fn test_render_step_messages_rejects_unknown_step() {
        let graph = build_graph(SCRIPT, None).unwrap();

        let result = render_step_messages("99", &graph, &mut MockRng);

        match result {
            Err(DomainError::StepNotFound(id)) => assert_eq!(id, "99"),
            other => panic!("expected StepNotFound, got {other:?}"),
        }
    }
}
