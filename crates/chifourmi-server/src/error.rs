//! Error types for the HTTP surface.
//!
//! [`ChifourmiError`] converts into an Axum response carrying a JSON
//! body `{error, status}` via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Match rejections never come through here; they travel as `error`
//! events over the `WebSocket`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ChifourmiError {
    /// No route matches the request path.
    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ChifourmiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
