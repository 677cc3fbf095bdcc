use axum::{http::StatusCode, response::Response};

use super::{problem_response, problem_type};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    problem_response(
        StatusCode::NOT_FOUND,
        "Resource not found",
        "The requested resource was not found",
        problem_type::NOT_FOUND,
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    problem_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed",
        "The HTTP method is not allowed for this resource",
        problem_type::METHOD_NOT_ALLOWED,
    )
}
