use axum::Router;
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::root,
        crate::features::veterinarians::routes::create,
        crate::features::veterinarians::routes::update,
        crate::features::veterinarians::routes::list,
        crate::features::veterinarians::routes::get,
    ),
    components(
        schemas(
            registry_types::Veterinarian,
            registry_types::ErrorDetail,
            registry_types::RootMessage,
        )
    ),
    tags(
        (name = "Veterinarians", description = "Veterinarian record APIs."),
        (name = "Meta", description = "Service information."),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by the document served at `/docs/openapi.json`.
pub fn router(openapi: OpenApiDoc) -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi))
}
