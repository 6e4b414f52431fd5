//! Adoption service - business rules for listing, lookup, and adoption.

use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{PlantError, PlantResult};
use crate::mapping;
use crate::models::{AdoptPlant, PlantView};
use crate::repository::PlantRepository;

/// Service layer owning the adoption business rules.
///
/// The repository is supplied at construction so a fake store can be
/// substituted in tests.
pub struct PlantService<R: PlantRepository> {
    repository: Arc<R>,
}

impl<R: PlantRepository> PlantService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every cataloged plant as its external view.
    ///
    /// One bulk read; mapping each record is the only per-plant work.
    #[instrument(skip(self))]
    pub async fn list_plants(&self) -> PlantResult<Vec<PlantView>> {
        let plants = self.repository.get_all().await?;
        Ok(plants.iter().map(mapping::to_view).collect())
    }

    /// Look up a single plant. A miss surfaces as `PlantError::NotFound`,
    /// an ordinary outcome value rather than a fault.
    #[instrument(skip(self))]
    pub async fn get_plant(&self, id: i64) -> PlantResult<PlantView> {
        self.repository
            .get_by_id(id)
            .await?
            .map(|plant| mapping::to_view(&plant))
            .ok_or(PlantError::NotFound(id))
    }

    /// Adopt a plant: validate the input, stamp the adoption time,
    /// persist.
    ///
    /// Insert-only: an `id` on the request matching an existing catalog
    /// entry is not reconciled, so two adopts for the same conceptual
    /// plant yield two records.
    #[instrument(skip(self, input), fields(plant_name = %input.name))]
    pub async fn adopt_plant(&self, input: AdoptPlant) -> PlantResult<PlantView> {
        input
            .validate()
            .map_err(|e| PlantError::Validation(e.to_string()))?;

        let mut plant = mapping::to_entity(PlantView {
            id: input.id.unwrap_or(0),
            name: input.name,
            kind: input.kind,
            adoption_date: None,
        });
        // The view cannot carry the water requirement; take it from the
        // adopt request before persisting.
        plant.water_requirement = input.water_requirement;
        plant.adoption_date = Some(Utc::now());

        let stored = self.repository.add(plant).await?;
        Ok(mapping::to_view(&stored))
    }
}

impl<R: PlantRepository> Clone for PlantService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Plant;
    use crate::repository::{InMemoryPlantRepository, MockPlantRepository};

    fn adopt_input() -> AdoptPlant {
        AdoptPlant {
            id: None,
            name: "Venus Flytrap".to_string(),
            kind: "Carnivorous".to_string(),
            water_requirement: 50,
        }
    }

    #[tokio::test]
    async fn test_adopt_stamps_adoption_date() {
        let mut mock_repo = MockPlantRepository::new();
        mock_repo.expect_add().returning(|mut plant: Plant| {
            plant.id = 1;
            Ok(plant)
        });

        let before = Utc::now();
        let service = PlantService::new(mock_repo);
        let view = service.adopt_plant(adopt_input()).await.unwrap();

        let adopted_at = view.adoption_date.expect("adoption date must be stamped");
        assert!(adopted_at >= before);
    }

    #[tokio::test]
    async fn test_adopt_rejects_empty_name_without_persisting() {
        let mut mock_repo = MockPlantRepository::new();
        mock_repo.expect_add().times(0);

        let service = PlantService::new(mock_repo);
        let input = AdoptPlant {
            name: String::new(),
            ..adopt_input()
        };

        let result = service.adopt_plant(input).await;
        assert!(matches!(result, Err(PlantError::Validation(_))));
    }

    #[tokio::test]
    async fn test_adopt_rejects_out_of_range_water_requirement() {
        let mut mock_repo = MockPlantRepository::new();
        mock_repo.expect_add().times(0);

        let service = PlantService::new(mock_repo);
        let input = AdoptPlant {
            water_requirement: 2000,
            ..adopt_input()
        };

        let result = service.adopt_plant(input).await;
        assert!(matches!(result, Err(PlantError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_plant_miss_is_not_found() {
        let mut mock_repo = MockPlantRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = PlantService::new(mock_repo);
        let result = service.get_plant(7).await;

        assert!(matches!(result, Err(PlantError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_storage_error_propagates_from_list() {
        let mut mock_repo = MockPlantRepository::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(PlantError::Storage("connection reset".to_string())));

        let service = PlantService::new(mock_repo);
        let result = service.list_plants().await;

        assert!(matches!(result, Err(PlantError::Storage(_))));
    }

    // Documents the literal insert-only behavior: adopting "the same"
    // catalog entry twice is not reconciled into one update. If mutual
    // exclusion is ever added, this test must change deliberately.
    #[tokio::test]
    async fn test_adopting_same_catalog_id_twice_inserts_two_records() {
        let repo = InMemoryPlantRepository::new();
        let service = PlantService::new(repo.clone());

        let input = AdoptPlant {
            id: Some(7),
            ..adopt_input()
        };
        service.adopt_plant(input.clone()).await.unwrap();
        service.adopt_plant(input).await.unwrap();

        let stored = repo.get_all().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_ne!(stored[0].id, stored[1].id);
    }

    #[tokio::test]
    async fn test_list_maps_every_stored_plant() {
        let repo = InMemoryPlantRepository::new();
        let service = PlantService::new(repo.clone());

        for name in ["Venus Flytrap", "Ghost Orchid"] {
            let input = AdoptPlant {
                name: name.to_string(),
                ..adopt_input()
            };
            service.adopt_plant(input).await.unwrap();
        }

        let views = service.list_plants().await.unwrap();
        let stored = repo.get_all().await.unwrap();

        assert_eq!(views.len(), stored.len());
        for (view, plant) in views.iter().zip(&stored) {
            assert_eq!(view.id, plant.id);
            assert_eq!(view.name, plant.name);
            assert_eq!(view.kind, plant.kind);
            assert_eq!(view.adoption_date, plant.adoption_date);
        }
    }
}
