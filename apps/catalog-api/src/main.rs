use axum::Router;
use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_plants::{handlers, InMemoryPlantRepository, PgPlantRepository, PlantService};
use tracing::info;

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // The plant store is an external collaborator; which one backs the
    // repository is decided here and nowhere else.
    let plant_routes = match &config.database {
        Some(database) => {
            info!("Connecting to the Postgres plant store");
            let db = sea_orm::Database::connect(database.url.as_str()).await?;
            handlers::router(PlantService::new(PgPlantRepository::new(db)))
        }
        None => {
            info!("DATABASE_URL not set, using the in-memory plant store");
            handlers::router(PlantService::new(InMemoryPlantRepository::new()))
        }
    };

    let api_routes = Router::new().nest("/plants", plant_routes);
    let app = create_router::<openapi::ApiDoc>(api_routes);

    create_app(app, &config.server).await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
