pub mod handlers;
pub mod responses;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// RFC 7231 section references used as problem `type` URIs.
pub mod problem_type {
    pub const BAD_REQUEST: &str = "https://datatracker.ietf.org/doc/html/rfc7231#section-6.5.1";
    pub const NOT_FOUND: &str = "https://datatracker.ietf.org/doc/html/rfc7231#section-6.5.4";
    pub const METHOD_NOT_ALLOWED: &str =
        "https://datatracker.ietf.org/doc/html/rfc7231#section-6.5.5";
    pub const INTERNAL_SERVER_ERROR: &str =
        "https://datatracker.ietf.org/doc/html/rfc7231#section-6.6.1";
}

/// Structured problem body returned for all error responses.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": 404,
///   "title": "Resource not found",
///   "detail": "Property with ID 42 was not found.",
///   "type": "https://datatracker.ietf.org/doc/html/rfc7231#section-6.5.4"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ProblemResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Short human-readable summary of the problem class
    pub title: String,
    /// Human-readable explanation specific to this occurrence
    pub detail: String,
    /// Reference URI identifying the problem class
    #[serde(rename = "type")]
    pub problem_type: String,
}

/// Application error type that converts into HTTP problem responses.
///
/// Domain errors are mapped into this enum at the crate boundary; the
/// `IntoResponse` impl is the single place problem bodies are produced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                problem_response(
                    StatusCode::BAD_REQUEST,
                    "Bad request",
                    &msg,
                    problem_type::BAD_REQUEST,
                )
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                problem_response(
                    StatusCode::NOT_FOUND,
                    "Resource not found",
                    &msg,
                    problem_type::NOT_FOUND,
                )
            }
            AppError::InternalServerError(msg) => {
                // The internal message is logged with full context and
                // never leaks to the client.
                tracing::error!("Internal server error: {}", msg);
                problem_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error",
                    "An unexpected error occurred",
                    problem_type::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}

/// Build a problem-detail response.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{problem_response, problem_type};
/// use axum::http::StatusCode;
///
/// let response = problem_response(
///     StatusCode::BAD_REQUEST,
///     "Bad request",
///     "pageSize must be at least 1",
///     problem_type::BAD_REQUEST,
/// );
/// ```
pub fn problem_response(
    status: StatusCode,
    title: &str,
    detail: &str,
    problem_type: &'static str,
) -> Response {
    let body = Json(ProblemResponse {
        status: status.as_u16(),
        title: title.to_string(),
        detail: detail.to_string(),
        problem_type: problem_type.to_string(),
    });

    (status, body).into_response()
}
