use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Property with ID {0} was not found.")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type PropertyResult<T> = Result<T, PropertyError>;

/// Convert PropertyError to AppError for standardized problem responses
impl From<PropertyError> for AppError {
    fn from(err: PropertyError) -> Self {
        match err {
            PropertyError::NotFound(id) => {
                AppError::NotFound(format!("Property with ID {} was not found.", id))
            }
            PropertyError::Validation(msg) => AppError::BadRequest(msg),
            PropertyError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PropertyError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for PropertyError {
    fn from(err: mongodb::error::Error) -> Self {
        PropertyError::Database(err.to_string())
    }
}
