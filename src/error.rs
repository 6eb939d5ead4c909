use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum XkcdError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error("upstream failed: {0}")]
    UpstreamFailed(String),

    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("failed to encode comic: {0}")]
    Encode(#[source] serde_json::Error),
}

impl IntoResponse for XkcdError {
    fn into_response(self) -> Response {
        let status = match &self {
            XkcdError::NotFound(_) => StatusCode::NOT_FOUND,
            XkcdError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            XkcdError::UpstreamFailed(_) | XkcdError::HttpError(_) => StatusCode::BAD_GATEWAY,
            XkcdError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            XkcdError::NotFound(msg)
            | XkcdError::InvalidParam(msg)
            | XkcdError::UpstreamFailed(msg) => msg.clone(),
            other => other.to_string(),
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, XkcdError>;
