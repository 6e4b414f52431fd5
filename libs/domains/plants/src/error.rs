use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlantError {
    #[error("plant not found: {0}")]
    NotFound(i64),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type PlantResult<T> = Result<T, PlantError>;

/// Convert PlantError to AppError for standardized error responses.
///
/// Storage detail stays out of the message handed to the caller;
/// `AppError::InternalServerError` logs it and answers generically.
impl From<PlantError> for AppError {
    fn from(err: PlantError) -> Self {
        match err {
            PlantError::NotFound(_) => AppError::NotFound("plant not found".to_string()),
            PlantError::Validation(msg) => AppError::BadRequest(msg),
            PlantError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PlantError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for PlantError {
    fn from(err: sea_orm::DbErr) -> Self {
        PlantError::Storage(err.to_string())
    }
}
