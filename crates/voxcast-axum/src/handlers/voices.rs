//! Voice catalog handlers.

use axum::Json;
use axum::extract::State;
use voxcast_core::SelectorOption;

use crate::dto::VoicesResponse;
use crate::state::AppState;

/// Grouped catalog.
pub async fn list(State(state): State<AppState>) -> Json<VoicesResponse> {
    Json(VoicesResponse::from(state.catalog.as_ref()))
}

/// Flattened selector rows with disabled group headers.
pub async fn options(State(state): State<AppState>) -> Json<Vec<SelectorOption>> {
    Json(state.catalog.selector_options())
}
