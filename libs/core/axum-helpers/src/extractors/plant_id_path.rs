//! Plant id path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for plant id path parameters.
///
/// Parses the path segment as a positive integer id. Non-positive and
/// unparsable segments are a caller mistake and are rejected with a
/// 400 `"invalid plant id"` response before any handler code runs.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::PlantIdPath;
///
/// async fn get_plant(PlantIdPath(id): PlantIdPath) -> String {
///     format!("Plant id: {}", id)
/// }
///
/// let app = Router::new().route("/plants/{id}", get(get_plant));
/// ```
pub struct PlantIdPath(pub i64);

impl<S> FromRequestParts<S> for PlantIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match id.parse::<i64>() {
            Ok(id) if id > 0 => Ok(PlantIdPath(id)),
            _ => Err(AppError::BadRequest("invalid plant id".to_string()).into_response()),
        }
    }
}
