//! Author-time script validation endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use chatscript_script::validate::{ValidationError, validate_script};

use crate::state::AppState;

/// Request body for POST /validate.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    /// The script text to validate. Absent means "validate the script the
    /// server was started with".
    pub script: Option<String>,
}

/// Response body listing every validation finding. Empty means the
/// script is acceptable.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// Author-facing findings, in document order.
    pub errors: Vec<ValidationError>,
}

/// POST /validate
#[instrument(skip(state, request))]
async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let text = request.script.as_deref().unwrap_or(&state.script);
    let errors = validate_script(text);

    info!(findings = errors.len(), "validated script");

    Json(ValidateResponse { errors })
}

/// Returns the router for script authoring.
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(validate))
}
