//! Transform between the internal [`Plant`] entity and the external
//! [`PlantView`] projection.
//!
//! Both directions are explicit field-by-field copies so that the
//! omission of `water_requirement` stays a visible, auditable decision
//! rather than an accident of a generic mapper.

use crate::models::{Plant, PlantView};

/// Project a plant into its external view, dropping `water_requirement`.
pub fn to_view(plant: &Plant) -> PlantView {
    PlantView {
        id: plant.id,
        name: plant.name.clone(),
        kind: plant.kind.clone(),
        adoption_date: plant.adoption_date,
    }
}

/// Rebuild an entity from a view.
///
/// The view carries no water requirement, so the entity comes back with
/// a `water_requirement` of 0. Callers that persist the result must
/// supply the real value first; the adopt flow takes it from the
/// request body.
pub fn to_entity(view: PlantView) -> Plant {
    Plant {
        id: view.id,
        name: view.name,
        kind: view.kind,
        water_requirement: 0,
        adoption_date: view.adoption_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_plant() -> Plant {
        Plant {
            id: 42,
            name: "Ghost Orchid".to_string(),
            kind: "Epiphyte".to_string(),
            water_requirement: 120,
            adoption_date: Some(Utc::now()),
        }
    }

    #[test]
    fn test_to_view_copies_shared_fields() {
        let plant = sample_plant();
        let view = to_view(&plant);

        assert_eq!(view.id, plant.id);
        assert_eq!(view.name, plant.name);
        assert_eq!(view.kind, plant.kind);
        assert_eq!(view.adoption_date, plant.adoption_date);
    }

    #[test]
    fn test_view_json_has_no_water_requirement() {
        let view = to_view(&sample_plant());
        let json = serde_json::to_value(&view).unwrap();

        assert!(json.get("water_requirement").is_none());
        assert_eq!(json["type"], "Epiphyte");
    }

    #[test]
    fn test_to_entity_defaults_water_requirement_to_zero() {
        let entity = to_entity(to_view(&sample_plant()));

        assert_eq!(entity.id, 42);
        assert_eq!(entity.water_requirement, 0);
        assert!(entity.adoption_date.is_some());
    }
}
