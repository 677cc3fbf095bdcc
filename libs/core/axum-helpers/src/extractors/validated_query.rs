//! Query-string extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// Deserializes query parameters and validates them using the `validator`
/// crate's `Validate` trait. Returns a 400 problem response if
/// deserialization or validation fails.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct ListParams {
///     #[validate(range(min = 1))]
///     page_size: i64,
/// }
///
/// async fn list(ValidatedQuery(params): ValidatedQuery<ListParams>) -> String {
///     format!("page size: {}", params.page_size)
/// }
///
/// let app = Router::new().route("/items", get(list));
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        value.validate().map_err(|e| {
            AppError::BadRequest(format!("Query validation failed: {}", e)).into_response()
        })?;

        Ok(ValidatedQuery(value))
    }
}
