//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{messages, AppError, ErrorResponse};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body with the `validator` crate's `Validate`
/// trait. On failure the response echoes the submitted input back under
/// `details.input`, with per-field error annotations under
/// `details.errors`, and no handler code runs.
///
/// # Example
/// ```ignore
/// #[derive(Serialize, Deserialize, Validate)]
/// struct AdoptPlant {
///     #[validate(length(min = 1, max = 100))]
///     name: String,
/// }
///
/// async fn adopt(ValidatedJson(payload): ValidatedJson<AdoptPlant>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Serialize + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Deserialization failures go through AppError so the caller
        // sees the same ErrorResponse shape as every other error.
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        data.validate().map_err(|e| {
            // Convert validator errors to structured JSON, one entry per field
            let errors = e
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_messages: Vec<serde_json::Value> = errors
                        .iter()
                        .map(|err| {
                            serde_json::json!({
                                "code": err.code,
                                "message": err.message,
                                "params": err.params,
                            })
                        })
                        .collect();
                    (field.to_string(), serde_json::json!(error_messages))
                })
                .collect::<serde_json::Map<_, _>>();

            let details = serde_json::json!({
                "input": &data,
                "errors": errors,
            });

            let error_response = ErrorResponse {
                error: "ValidationFailed".to_string(),
                message: messages::VALIDATION_FAILED.to_string(),
                details: Some(details),
            };

            (StatusCode::BAD_REQUEST, axum::Json(error_response)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
