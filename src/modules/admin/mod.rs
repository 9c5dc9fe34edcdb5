use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod repository;

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handler::stats))
        .route("/upload", post(handler::upload_files))
}
