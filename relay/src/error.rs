use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Anything that stops the relay from reaching the backend. Backend
/// error statuses are not errors here - they relay verbatim.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    BackendUnavailable(#[from] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        error!("Error proxying to backend: {self}");

        let body = Json(json!({
            "error": "backend_unavailable",
            "message": self.to_string(),
        }));

        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}
