use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use jcmp_sdk::CompareError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// The HTTP status a failed comparison maps to.
    ///
    /// Validation failures are the caller's fault (400), malformed pasted
    /// documents are unprocessable (422), and upstream fetch or content
    /// type problems are reported as a bad gateway (502).
    fn status(&self) -> StatusCode {
        match self {
            Self::Compare(CompareError::InvalidUrl { .. }) => StatusCode::BAD_REQUEST,
            Self::Compare(CompareError::Parse { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Compare(CompareError::Fetch { .. } | CompareError::ContentType { .. }) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
