use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Plant Adoption Catalog API",
        description = "Catalog of rare plants available for adoption"
    ),
    nest(
        (path = "/api/plants", api = domain_plants::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
