//! Overlay content handler.
//!
//! Sequences one request: overlay-path and header validation, backend
//! fetch, template composition, render, HTML response. Every failure is
//! converted to the standard error response at this boundary.

use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::Html,
};

use crate::error::{AppError, Result};
use crate::render::{compose, render_record};
use crate::server::AppState;

/// Header carrying the content identifier used as the backend filter key.
pub const CONTENT_SOURCE_HEADER: &str = "x-content-source-location";

const REQUIRED_HEADERS: [&str; 2] = [CONTENT_SOURCE_HEADER, "authorization"];

#[tracing::instrument(
    name = "overlay.render",
    skip(state, headers, uri),
    fields(path = %uri.path())
)]
pub async fn render_overlay(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Html<String>> {
    let path = uri.path();
    if !is_overlay_path(path, &state.settings.overlay.paths) {
        return Err(AppError::NotFound(format!("{path} is not an overlay path")));
    }

    for name in REQUIRED_HEADERS {
        if !headers.contains_key(name) {
            return Err(AppError::Validation(format!("missing header '{name}'")));
        }
    }

    let content_id = headers
        .get(CONTENT_SOURCE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if content_id.is_empty() {
        return Err(AppError::NotFound("missing content identifier".to_string()));
    }

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let payload = state
        .content_client
        .fetch_content(content_id, authorization)
        .await?;

    // Composition state lives in this value only; nothing is shared
    // across concurrent requests.
    let set = compose(&state.template_loader, &state.settings.templates.names)?;
    let html = render_record(&set, &payload)?;

    tracing::info!(content_id, "rendered overlay content");
    Ok(Html(html))
}

fn is_overlay_path(path: &str, allowed: &[String]) -> bool {
    allowed
        .iter()
        .any(|prefix| path == prefix || path.starts_with(&format!("{prefix}/")))
}
