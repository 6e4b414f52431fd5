use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Plant entity - a rare-plant catalog entry with care requirements and
/// adoption status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Plant {
    /// Unique identifier, assigned by the store on insert; never reused
    /// or mutated afterwards
    pub id: i64,
    /// Common name (non-empty, at most 100 characters)
    pub name: String,
    /// Botanical category, e.g. "Carnivorous" (non-empty, at most 50
    /// characters)
    #[serde(rename = "type")]
    pub kind: String,
    /// Water requirement in millilitres, between 1 and 1000
    pub water_requirement: i32,
    /// Absent while the plant is available; set exactly once by the
    /// adopt operation, never cleared
    pub adoption_date: Option<DateTime<Utc>>,
}

impl Plant {
    pub fn is_adopted(&self) -> bool {
        self.adoption_date.is_some()
    }
}

/// External projection of a [`Plant`].
///
/// Deliberately omits `water_requirement`: care-requirement detail is
/// internal and never exposed through the adoption-facing view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantView {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub adoption_date: Option<DateTime<Utc>>,
}

/// Request body for adopting a plant.
///
/// Shaped like [`PlantView`] plus the entity fields the view cannot
/// supply; in particular `water_requirement` is required here because
/// the view never carries it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdoptPlant {
    /// Catalog id as seen by the client. The adopt flow is insert-only:
    /// this value is not reconciled against existing records and the
    /// store assigns a fresh id.
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(
        min = 1,
        max = 100,
        message = "name is required and must be at most 100 characters"
    ))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "type is required and must be at most 50 characters"
    ))]
    pub kind: String,
    /// Millilitres, between 1 and 1000
    #[validate(range(
        min = 1,
        max = 1000,
        message = "water requirement must be between 1 and 1000 ml"
    ))]
    pub water_requirement: i32,
}
