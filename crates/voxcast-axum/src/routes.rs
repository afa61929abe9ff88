//! Route definitions and router construction.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// API routes without the `/api` prefix (nested by the caller).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/synthesize", post(handlers::synthesize::synthesize))
        .route("/voices", get(handlers::voices::list))
        .route("/voices/options", get(handlers::voices::options))
        .route("/status", get(handlers::status::get))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Create the main router.
///
/// The delivery endpoint is mounted at the configured delivery path (default
/// `/download`) outside `/api`, so delivery URLs stay short.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let delivery_path = ctx.settings.delivery_path.clone();
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .route(&delivery_path, get(handlers::delivery::download))
        .nest("/api", api_routes().layer(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
