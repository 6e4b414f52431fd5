use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

/// Sea-ORM entity for the plants table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub water_requirement: i32,
    pub adoption_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Plant {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            kind: model.kind,
            water_requirement: model.water_requirement,
            adoption_date: model.adoption_date.map(Into::into),
        }
    }
}

// Inserts never carry an id; the database sequence assigns it.
impl From<crate::models::Plant> for ActiveModel {
    fn from(plant: crate::models::Plant) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(plant.name),
            kind: Set(plant.kind),
            water_requirement: Set(plant.water_requirement),
            adoption_date: Set(plant.adoption_date.map(Into::into)),
        }
    }
}
