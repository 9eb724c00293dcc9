//! Route modules for Callsight Server

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::ui;

pub mod analyze;
pub mod health;

/// Assemble the full application router.
///
/// The body limit sits above the client's 20 MB ceiling (plus multipart
/// framing overhead) so the analyze handler itself never rejects on size.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .route("/api/v1/analyze", post(analyze::analyze))
        .layer(DefaultBodyLimit::max(ui::state::MAX_UPLOAD_BYTES as usize + 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
