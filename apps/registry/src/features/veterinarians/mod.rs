use axum::{
    routing::{get, post},
    Router,
};

pub mod repo;
pub mod routes;
pub mod service;

pub fn router() -> Router {
    Router::new()
        .route("/create", post(routes::create).get(routes::get_create))
        .route("/update", post(routes::update).get(routes::get_update))
        .route("/all", get(routes::list))
        .route("/:id", get(routes::get))
}
