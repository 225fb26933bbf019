use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure here is terminal for its request; retries are the caller's
/// concern. Internal detail is logged server-side and never leaked to the
/// response body.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request itself is malformed (e.g. the URL fails syntactic
    /// validation). The pipeline is never invoked.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error or non-success HTTP status from the target page.
    #[error("Fetch failure: {0}")]
    FetchFailure(String),

    /// The page was fetched but yielded too little extractable text.
    #[error("Insufficient content extracted from page")]
    InsufficientContent,

    /// Anything else — parser panic caught upstream, internal bug.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::FetchFailure(detail) => {
                tracing::warn!("Fetch failure: {detail}");
                (
                    StatusCode::BAD_REQUEST,
                    "Unable to access the provided URL. Please check the URL and try again."
                        .to_string(),
                )
            }
            AppError::InsufficientContent => (
                StatusCode::BAD_REQUEST,
                "Could not find a job description on this page. Please try a different URL."
                    .to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while processing the job posting. Please try again."
                        .to_string(),
                )
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}
