use axum::{routing::get, Router};

use crate::server::AppState;

use super::health::health;
use super::overlay::render_overlay;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Every other path is a candidate overlay path; the handler owns
        // the allow-list check.
        .fallback(render_overlay)
}
