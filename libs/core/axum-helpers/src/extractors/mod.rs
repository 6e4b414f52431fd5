//! Custom extractors for axum handlers.

pub mod plant_id_path;
pub mod validated_json;

pub use plant_id_path::PlantIdPath;
pub use validated_json::ValidatedJson;
