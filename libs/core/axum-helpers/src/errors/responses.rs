//! Reusable OpenAPI response types for consistent API documentation.

use super::ProblemResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "title": "Resource not found",
        "detail": "Property with ID 42 was not found.",
        "type": "https://datatracker.ietf.org/doc/html/rfc7231#section-6.5.4"
    })
)]
pub struct NotFoundResponse(pub ProblemResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "title": "Bad request",
        "detail": "Query validation failed: pageSize must be at least 1",
        "type": "https://datatracker.ietf.org/doc/html/rfc7231#section-6.5.1"
    })
)]
pub struct BadRequestResponse(pub ProblemResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "title": "Server error",
        "detail": "An unexpected error occurred",
        "type": "https://datatracker.ietf.org/doc/html/rfc7231#section-6.6.1"
    })
)]
pub struct InternalServerErrorResponse(pub ProblemResponse);
