//! Plants Domain
//!
//! Catalog of rare plants available for adoption, and the record of
//! when a plant is adopted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules, validation, adoption stamping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, views, mapping
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_plants::{handlers, repository::InMemoryPlantRepository, service::PlantService};
//!
//! let repository = InMemoryPlantRepository::new();
//! let service = PlantService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

mod entity;

// Re-export commonly used types
pub use error::{PlantError, PlantResult};
pub use models::{AdoptPlant, Plant, PlantView};
pub use postgres::PgPlantRepository;
pub use repository::{InMemoryPlantRepository, PlantRepository};
pub use service::PlantService;
