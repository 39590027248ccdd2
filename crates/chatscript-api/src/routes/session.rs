//! Routes for learner sessions: views, traversal, and restart.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use chatscript_core::error::DomainError;
use chatscript_core::session::{SessionState, TranscriptEntry};
use chatscript_core::user;
use chatscript_script::graph::{self, DialogueGraph};
use chatscript_session::application::command_handlers::{
    self, SubmitResponse,
};
use chatscript_session::application::query_handlers::{self, ChatView};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /{learner_id}/submit-response.
#[derive(Debug, Deserialize)]
pub struct SubmitResponseRequest {
    /// The step the chosen response points at, absent when the response
    /// ends the chat.
    pub current_step: Option<String>,
    /// The transcript as the client has accumulated it.
    #[serde(default)]
    pub messages: Vec<TranscriptEntry>,
}

/// Builds the dialogue graph one learner sees, with the name placeholder
/// substituted when the directory knows the learner.
async fn personalized_graph(
    state: &AppState,
    learner_id: Uuid,
) -> Result<DialogueGraph, ApiError> {
    let display_name = state.users.display_name(learner_id).await;
    let first_name = display_name
        .as_deref()
        .map(user::first_name)
        .filter(|name| !name.is_empty());
    Ok(graph::build_graph(&state.script, first_name)?)
}

/// GET /{learner_id}/view
#[instrument(skip(state))]
async fn chat_view(
    State(state): State<AppState>,
    Path(learner_id): Path<Uuid>,
) -> Result<Json<ChatView>, ApiError> {
    let view = query_handlers::get_chat_view(
        learner_id,
        &state.script,
        &*state.users,
        &*state.store,
        &state.presentation,
    )
    .await?;

    Ok(Json(view))
}

/// GET /{learner_id}/state
#[instrument(skip(state))]
async fn session_state(
    State(state): State<AppState>,
    Path(learner_id): Path<Uuid>,
) -> Result<Json<SessionState>, ApiError> {
    let session = query_handlers::get_session_state(learner_id, &*state.store).await?;
    Ok(Json(session))
}

/// GET /{learner_id}/steps/{step_id}/messages
#[instrument(skip(state))]
async fn step_messages(
    State(state): State<AppState>,
    Path((learner_id, step_id)): Path<(Uuid, String)>,
) -> Result<Json<Vec<TranscriptEntry>>, ApiError> {
    let graph = personalized_graph(&state, learner_id).await?;

    let mut rng_guard = state
        .rng
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
    let entries = query_handlers::render_step_messages(&step_id, &graph, &mut *rng_guard)?;

    Ok(Json(entries))
}

/// POST /{learner_id}/start
#[instrument(skip(state))]
async fn start(
    State(state): State<AppState>,
    Path(learner_id): Path<Uuid>,
) -> Result<Json<SessionState>, ApiError> {
    let graph = personalized_graph(&state, learner_id).await?;

    info!("starting session");

    let session = command_handlers::handle_start(learner_id, &graph, &*state.store).await?;
    Ok(Json(session))
}

/// POST /{learner_id}/submit-response
#[instrument(skip(state, request))]
async fn submit_response(
    State(state): State<AppState>,
    Path(learner_id): Path<Uuid>,
    Json(request): Json<SubmitResponseRequest>,
) -> Result<Json<SessionState>, ApiError> {
    let graph = personalized_graph(&state, learner_id).await?;

    let command = SubmitResponse {
        learner_id,
        current_step: request.current_step,
        messages: request.messages,
    };

    info!(
        current_step = command.current_step.as_deref().unwrap_or("<none>"),
        "handling submit_response command"
    );

    let session = command_handlers::handle_submit_response(
        command,
        &graph,
        &*state.store,
        &*state.events,
        &*state.clock,
    )
    .await?;

    Ok(Json(session))
}

/// POST /{learner_id}/reset
#[instrument(skip(state))]
async fn reset(
    State(state): State<AppState>,
    Path(learner_id): Path<Uuid>,
) -> Result<Json<SessionState>, ApiError> {
    info!("resetting session");

    let session = command_handlers::handle_restart(learner_id, &*state.store).await?;
    Ok(Json(session))
}

/// Returns the router for learner sessions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{learner_id}/view", get(chat_view))
        .route("/{learner_id}/state", get(session_state))
        .route("/{learner_id}/steps/{step_id}/messages", get(step_messages))
        .route("/{learner_id}/start", post(start))
        .route("/{learner_id}/submit-response", post(submit_response))
        .route("/{learner_id}/reset", post(reset))
}
