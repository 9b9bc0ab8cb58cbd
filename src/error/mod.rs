use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::render::RenderError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error ({status}): {body}")]
    Backend { status: u16, body: String },

    #[error("Backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    body: String,
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        match err {
            // Hardened mapping: an empty result set is "no matching
            // content", not a generic server failure.
            RenderError::EmptyResultSet => AppError::NotFound("no matching content".to_string()),
            other => AppError::Template(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            // Backend failures propagate the backend's own status and body
            AppError::Backend { status, body } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                body.clone(),
            ),
            AppError::Upstream(_) => (
                StatusCode::BAD_GATEWAY,
                "content backend unreachable".to_string(),
            ),
            // Template internals never leak to the client
            AppError::Template(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string()),
        };

        // Always log the detailed error server-side
        tracing::error!(
            status = %status.as_u16(),
            error = %self,
            "request failed"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                status_code: status.as_u16(),
                body: client_message,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_set_maps_to_not_found() {
        let err = AppError::from(RenderError::EmptyResultSet);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn template_not_found_maps_to_template_error() {
        let err = AppError::from(RenderError::TemplateNotFound("head".to_string()));
        assert!(matches!(err, AppError::Template(_)));
    }
}
