use crate::AppState;
use axum::{routing::get, Extension, Json, Router};
use registry_types::RootMessage;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod veterinarians;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/veterinario", veterinarians::router())
        .merge(crate::docs::router(crate::docs::ApiDoc::openapi()))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = RootMessage),
    ),
    tag = "Meta"
)]
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage::default())
}
