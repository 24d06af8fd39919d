//! Axum router construction for the match server.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS restricted to the configured browser origins.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- server banner
/// - `GET /health` -- liveness and match snapshot
/// - `GET /api/theme` -- display labels for the seated players
/// - `GET /ws` -- `WebSocket` match connection
///
/// An empty `cors_origins` list allows any origin.
pub fn build_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/theme", get(handlers::get_theme))
        .route("/ws", get(ws::ws_match))
        .fallback(handlers::not_found)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the configured origins, GET and POST only.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, "Ignoring invalid CORS origin: {e}");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}
