use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};
use axum_helpers::{ErrorResponse, PlantIdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PlantResult;
use crate::models::{AdoptPlant, PlantView};
use crate::repository::PlantRepository;
use crate::service::PlantService;

pub const TAG: &str = "plants";

/// Where the listing lives once the router is mounted by the app;
/// adoption redirects here.
pub const LIST_PATH: &str = "/api/plants";

/// OpenAPI documentation for the plants API
#[derive(OpenApi)]
#[openapi(
    paths(list_plants, get_plant, adopt_plant),
    components(schemas(PlantView, AdoptPlant, ErrorResponse)),
    tags(
        (name = TAG, description = "Rare-plant adoption endpoints")
    )
)]
pub struct ApiDoc;

/// Create the plants router with all HTTP endpoints
pub fn router<R: PlantRepository + 'static>(service: PlantService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_plants).post(adopt_plant))
        .route("/{id}", get(get_plant))
        .with_state(shared_service)
}

/// List all cataloged plants
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of plants", body = Vec<PlantView>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_plants<R: PlantRepository>(
    State(service): State<Arc<PlantService<R>>>,
) -> PlantResult<Json<Vec<PlantView>>> {
    let plants = service.list_plants().await?;
    Ok(Json(plants))
}

/// Get a plant by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Plant id, must be positive")
    ),
    responses(
        (status = 200, description = "Plant found", body = PlantView),
        (status = 400, description = "Invalid plant id", body = ErrorResponse),
        (status = 404, description = "Plant not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn get_plant<R: PlantRepository>(
    State(service): State<Arc<PlantService<R>>>,
    PlantIdPath(id): PlantIdPath,
) -> PlantResult<Json<PlantView>> {
    let plant = service.get_plant(id).await?;
    Ok(Json(plant))
}

/// Adopt a plant
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = AdoptPlant,
    responses(
        (status = 303, description = "Plant adopted, redirects to the listing"),
        (status = 400, description = "Validation failure, echoes the input with field errors", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn adopt_plant<R: PlantRepository>(
    State(service): State<Arc<PlantService<R>>>,
    ValidatedJson(input): ValidatedJson<AdoptPlant>,
) -> PlantResult<impl IntoResponse> {
    let adopted = service.adopt_plant(input).await?;

    tracing::info!(plant_id = adopted.id, "Plant adopted");
    Ok(Redirect::to(LIST_PATH))
}
