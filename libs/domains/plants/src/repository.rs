use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::PlantResult;
use crate::models::Plant;

/// Repository trait for Plant persistence.
///
/// Exposes exactly the operations the adoption service needs, isolating
/// it from the store's technology. Implementations can keep records in
/// memory or behind a database connection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantRepository: Send + Sync {
    /// Fetch every stored plant in one bulk read, in creation order.
    async fn get_all(&self) -> PlantResult<Vec<Plant>>;

    /// Single-key lookup. A missing record is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: i64) -> PlantResult<Option<Plant>>;

    /// Insert a new record. The store assigns the id; the persisted
    /// entity is returned once the write has completed. On failure no
    /// partial state is observable.
    async fn add(&self, plant: Plant) -> PlantResult<Plant>;
}

/// In-memory implementation of PlantRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPlantRepository {
    // BTreeMap keeps iteration in id order, which is creation order
    // because ids are assigned sequentially.
    plants: Arc<RwLock<BTreeMap<i64, Plant>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryPlantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlantRepository for InMemoryPlantRepository {
    async fn get_all(&self) -> PlantResult<Vec<Plant>> {
        let plants = self.plants.read().await;
        Ok(plants.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> PlantResult<Option<Plant>> {
        let plants = self.plants.read().await;
        Ok(plants.get(&id).cloned())
    }

    async fn add(&self, mut plant: Plant) -> PlantResult<Plant> {
        let mut plants = self.plants.write().await;

        plant.id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        plants.insert(plant.id, plant.clone());

        tracing::info!(plant_id = plant.id, "Stored plant");
        Ok(plant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(name: &str) -> Plant {
        Plant {
            id: 0,
            name: name.to_string(),
            kind: "Fern".to_string(),
            water_requirement: 40,
            adoption_date: None,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let repo = InMemoryPlantRepository::new();

        let first = repo.add(plant("Maidenhair")).await.unwrap();
        let second = repo.add(plant("Staghorn")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_add_then_get_by_id() {
        let repo = InMemoryPlantRepository::new();

        let stored = repo.add(plant("Maidenhair")).await.unwrap();

        let fetched = repo.get_by_id(stored.id).await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let repo = InMemoryPlantRepository::new();
        assert_eq!(repo.get_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_all_returns_creation_order() {
        let repo = InMemoryPlantRepository::new();

        repo.add(plant("Maidenhair")).await.unwrap();
        repo.add(plant("Staghorn")).await.unwrap();
        repo.add(plant("Birds Nest")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Maidenhair", "Staghorn", "Birds Nest"]);
    }
}
