//! Shared axum building blocks: error responses, extractors, health
//! endpoint, and server bootstrap with graceful shutdown.

pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;
pub mod shutdown;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{PlantIdPath, ValidatedJson};
