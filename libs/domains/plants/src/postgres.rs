use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::entity;
use crate::error::PlantResult;
use crate::models::Plant;
use crate::repository::PlantRepository;

/// Postgres-backed PlantRepository over a Sea-ORM connection pool.
///
/// Connections are checked out per operation and returned to the pool
/// when the call ends, success or failure. Consistency beyond
/// single-row atomicity is the database's concern, not this adapter's.
pub struct PgPlantRepository {
    db: DatabaseConnection,
}

impl PgPlantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlantRepository for PgPlantRepository {
    async fn get_all(&self) -> PlantResult<Vec<Plant>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Plant::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> PlantResult<Option<Plant>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Plant::from))
    }

    async fn add(&self, plant: Plant) -> PlantResult<Plant> {
        let active_model: entity::ActiveModel = plant.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(plant_id = model.id, "Stored plant");
        Ok(Plant::from(model))
    }
}
