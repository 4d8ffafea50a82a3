use super::repo::StoreError;
use super::service::ServiceError;
use crate::AppState;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use registry_types::{ErrorDetail, Veterinarian, VeterinarianPathParams};
use tracing::error;

type ApiError = (StatusCode, Json<ErrorDetail>);

fn api_error(err: ServiceError, action: &'static str) -> ApiError {
    match err {
        ServiceError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorDetail::new(err.to_string())),
        ),
        ServiceError::Store(StoreError::Duplicate { ref id }) => {
            error!(%id, action, "duplicate veterinarian id");
            internal_error()
        }
        ServiceError::Store(StoreError::Unavailable(ref source)) => {
            error!(error = ?source, action, "veterinarian store failure");
            internal_error()
        }
    }
}

fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDetail::new("Internal Server Error")),
    )
}

#[utoipa::path(
    post,
    path = "/veterinario/create",
    request_body = Veterinarian,
    responses(
        (status = 200, description = "Veterinarian created", body = Veterinarian),
        (status = 422, description = "Malformed veterinarian body"),
        (status = 500, description = "Duplicate id or store failure", body = ErrorDetail),
    ),
    tag = "Veterinarians"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    Json(vet): Json<Veterinarian>,
) -> Result<Json<Veterinarian>, ApiError> {
    st.veterinarians
        .create_veterinarian(vet)
        .await
        .map(Json)
        .map_err(|err| api_error(err, "create"))
}

#[utoipa::path(
    post,
    path = "/veterinario/update",
    request_body = Veterinarian,
    responses(
        (status = 200, description = "Veterinarian updated", body = Veterinarian),
        (status = 404, description = "Veterinarian not found", body = ErrorDetail),
        (status = 422, description = "Malformed veterinarian body"),
        (status = 500, description = "Store failure", body = ErrorDetail),
    ),
    tag = "Veterinarians"
)]
pub async fn update(
    Extension(st): Extension<AppState>,
    Json(vet): Json<Veterinarian>,
) -> Result<Json<Veterinarian>, ApiError> {
    st.veterinarians
        .update_veterinarian(vet)
        .await
        .map(Json)
        .map_err(|err| api_error(err, "update"))
}

#[utoipa::path(
    get,
    path = "/veterinario/all",
    responses(
        (status = 200, description = "All veterinarians", body = [Veterinarian]),
        (status = 500, description = "Store failure", body = ErrorDetail),
    ),
    tag = "Veterinarians"
)]
pub async fn list(
    Extension(st): Extension<AppState>,
) -> Result<Json<Vec<Veterinarian>>, ApiError> {
    st.veterinarians
        .get_all_veterinarians()
        .await
        .map(Json)
        .map_err(|err| api_error(err, "list"))
}

#[utoipa::path(
    get,
    path = "/veterinario/{id}",
    params(VeterinarianPathParams),
    responses(
        (status = 200, description = "Veterinarian found", body = Veterinarian),
        (status = 404, description = "Veterinarian not found", body = ErrorDetail),
        (status = 500, description = "Store failure", body = ErrorDetail),
    ),
    tag = "Veterinarians"
)]
pub async fn get(
    Extension(st): Extension<AppState>,
    Path(VeterinarianPathParams { id }): Path<VeterinarianPathParams>,
) -> Result<Json<Veterinarian>, ApiError> {
    lookup(&st, &id).await
}

// `/create` and `/update` shadow `/:id`, so GET on them still looks the id up.
pub async fn get_create(
    Extension(st): Extension<AppState>,
) -> Result<Json<Veterinarian>, ApiError> {
    lookup(&st, "create").await
}

pub async fn get_update(
    Extension(st): Extension<AppState>,
) -> Result<Json<Veterinarian>, ApiError> {
    lookup(&st, "update").await
}

async fn lookup(st: &AppState, id: &str) -> Result<Json<Veterinarian>, ApiError> {
    st.veterinarians
        .get_veterinarian(id)
        .await
        .map(Json)
        .map_err(|err| api_error(err, "get"))
}
