use axum::Router;
use axum::routing::{get, post, put};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(handler::list_shows))
        .route("/shows/{id}", get(handler::get_show))
        .route("/shows/{id}/episodes", get(handler::list_show_episodes))
        .route("/episodes/{id}", get(handler::get_episode))
        .route("/search", get(handler::search))
}

/// Mounted under `/api/admin` behind the admin guard.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(handler::list_shows).post(handler::create_show))
        .route("/shows/{id}", put(handler::update_show).delete(handler::delete_show))
        .route("/shows/{id}/images", post(handler::upload_show_images))
        .route("/episodes", post(handler::create_episode))
        .route("/episodes/{id}", put(handler::update_episode).delete(handler::delete_episode))
        .route("/episodes/{id}/thumbnail", post(handler::upload_episode_thumbnail))
}
