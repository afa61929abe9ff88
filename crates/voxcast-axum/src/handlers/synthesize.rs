//! UI action handler: submit a synthesis job.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use voxcast_core::SynthesisRequest;

use crate::dto::SynthesizeResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Request body for `POST /api/synthesize`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeBody {
    pub text: String,
    /// Falls back to the catalog default when omitted.
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Run one synthesis job and return the new delivery URL.
///
/// Waits for the job to finish (queue policy) or fails fast with 409
/// (reject policy) when another job holds the engine.
pub async fn synthesize(
    State(state): State<AppState>,
    payload: Result<Json<SynthesizeBody>, JsonRejection>,
) -> Result<Json<SynthesizeResponse>, HttpError> {
    let Json(body) = payload.map_err(|e| HttpError::BadRequest(e.body_text()))?;
    let voice_id = body
        .voice_id
        .unwrap_or_else(|| state.catalog.default_voice().to_string());

    let outcome = state
        .runner
        .submit(SynthesisRequest::new(body.text, voice_id))
        .await?;

    Ok(Json(outcome.into()))
}
