use axum::Router;
use axum::routing::{get, put};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handler::list_categories))
        .route("/categories/{id}", get(handler::get_category))
}

/// Mounted under `/api/admin` behind the admin guard.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handler::list_categories).post(handler::create_category))
        .route("/categories/{id}", put(handler::update_category).delete(handler::delete_category))
}
