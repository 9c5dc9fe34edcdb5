use axum::Router;
use axum::routing::{get, post, put};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/slides", get(handler::list_slides))
}

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/slides", get(handler::list_all_slides).post(handler::create_slide))
        .route("/slides/{id}", put(handler::update_slide).delete(handler::delete_slide))
        .route("/slides/{id}/image", post(handler::upload_slide_image))
}
