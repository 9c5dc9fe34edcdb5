use super::dto::{ProgressResponse, UpdateProgressRequest};
use super::model::HistoryEntry;
use super::service::HistoryService;
use crate::common::extract::{AppJson, AppPath};
use crate::common::response::{ApiSuccess, MessageResponse};
use crate::modules::auth::token::TokenClaims;
use crate::state::AppState;
use axum::{
    extract::{Extension, State},
    response::IntoResponse,
};

/// Watch history of the current user, most recent first
#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "Watch history", body = Vec<HistoryEntry>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "History"
)]
pub async fn list_history(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> impl IntoResponse {
    match HistoryService::list(state, claims.sub).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Progress for one episode; zero when never watched
#[utoipa::path(
    get,
    path = "/api/history/{episode_id}",
    params(
        ("episode_id" = i64, Path, description = "Episode ID")
    ),
    responses(
        (status = 200, description = "Stored or placeholder progress", body = ProgressResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "History"
)]
pub async fn get_progress(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    AppPath(episode_id): AppPath<i64>,
) -> impl IntoResponse {
    match HistoryService::get_progress(state, claims.sub, episode_id).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Record playback position
#[utoipa::path(
    post,
    path = "/api/history/update",
    request_body = UpdateProgressRequest,
    responses(
        (status = 200, description = "Progress saved", body = ProgressResponse),
        (status = 400, description = "Missing episode_id or progress"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Episode not found")
    ),
    security(("bearer_auth" = [])),
    tag = "History"
)]
pub async fn update_progress(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    AppJson(payload): AppJson<UpdateProgressRequest>,
) -> impl IntoResponse {
    match HistoryService::update_progress(state, claims.sub, payload).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/history/{episode_id}",
    params(
        ("episode_id" = i64, Path, description = "Episode ID")
    ),
    responses(
        (status = 200, description = "Entry removed", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No history for this episode")
    ),
    tag = "History",
    security(("bearer_auth" = []))
)]
pub async fn delete_history_entry(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    AppPath(episode_id): AppPath<i64>,
) -> impl IntoResponse {
    match HistoryService::remove(state, claims.sub, episode_id).await {
        Ok(()) => ApiSuccess::ok(MessageResponse::new("History entry removed")).into_response(),
        Err(e) => e.into_response(),
    }
}
