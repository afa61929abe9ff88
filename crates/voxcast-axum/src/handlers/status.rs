//! Runner diagnostics.

use axum::Json;
use axum::extract::State;
use voxcast_core::JobRunnerStatus;

use crate::state::AppState;

pub async fn get(State(state): State<AppState>) -> Json<JobRunnerStatus> {
    Json(state.runner.status())
}
