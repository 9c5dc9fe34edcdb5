use super::dto::*;
use super::model::{Episode, EpisodeDetail, Show};
use super::service::ContentService;
use crate::common::extract::{AppJson, AppMultipart, AppPath, AppQuery};
use crate::common::response::{ApiSuccess, MessageResponse};
use crate::common::upload;
use crate::state::AppState;
use axum::{
    extract::State,
    response::IntoResponse,
};

// --- PUBLIC ---

#[utoipa::path(
    get,
    path = "/api/shows",
    params(ShowFilter),
    responses(
        (status = 200, description = "List Shows", body = Vec<Show>),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Catalog"
)]
pub async fn list_shows(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ShowFilter>,
) -> impl IntoResponse {
    match ContentService::list_shows(state, filter.category_id).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/shows/{id}",
    params(
        ("id" = i64, Path, description = "Show ID")
    ),
    responses(
        (status = 200, description = "Get Show", body = Show),
        (status = 404, description = "Show Not Found")
    ),
    tag = "Catalog"
)]
pub async fn get_show(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match ContentService::get_show(state, id).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/shows/{id}/episodes",
    params(
        ("id" = i64, Path, description = "Show ID")
    ),
    responses(
        (status = 200, description = "Episodes of a show", body = Vec<Episode>),
        (status = 404, description = "Show Not Found")
    ),
    tag = "Catalog"
)]
pub async fn list_show_episodes(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match ContentService::list_episodes(state, id).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/episodes/{id}",
    params(
        ("id" = i64, Path, description = "Episode ID")
    ),
    responses(
        (status = 200, description = "Get Episode", body = EpisodeDetail),
        (status = 404, description = "Episode Not Found")
    ),
    tag = "Catalog"
)]
pub async fn get_episode(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match ContentService::get_episode(state, id).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Missing query")
    ),
    tag = "Catalog"
)]
pub async fn search(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> impl IntoResponse {
    match ContentService::search(state, query.q).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

// --- ADMIN: SHOWS ---

#[utoipa::path(
    post,
    path = "/api/admin/shows",
    request_body = CreateShowRequest,
    responses(
        (status = 201, description = "Show Created", body = Show),
        (status = 400, description = "Bad Request"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn create_show(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateShowRequest>,
) -> impl IntoResponse {
    match ContentService::create_show(state, req).await {
        Ok(res) => ApiSuccess::created(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/shows/{id}",
    params(
        ("id" = i64, Path, description = "Show ID")
    ),
    request_body = UpdateShowRequest,
    responses(
        (status = 200, description = "Show updated; explicit nulls clear nullable fields", body = Show),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Show Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn update_show(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateShowRequest>,
) -> impl IntoResponse {
    match ContentService::update_show(state, id, req).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/shows/{id}",
    params(
        ("id" = i64, Path, description = "Show ID")
    ),
    responses(
        (status = 200, description = "Show and its episodes deleted", body = MessageResponse),
        (status = 404, description = "Show Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn delete_show(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match ContentService::delete_show(state, id).await {
        Ok(()) => ApiSuccess::ok(MessageResponse::new("Show deleted successfully")).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Upload poster and/or banner for a show (multipart fields `poster`, `banner`)
#[utoipa::path(
    post,
    path = "/api/admin/shows/{id}/images",
    params(
        ("id" = i64, Path, description = "Show ID")
    ),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Show with new image paths", body = Show),
        (status = 400, description = "No poster or banner file"),
        (status = 404, description = "Show Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn upload_show_images(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppMultipart(mut multipart): AppMultipart,
) -> impl IntoResponse {
    // Refuse before touching the disk.
    if let Err(e) = ContentService::get_show(state.clone(), id).await {
        return e.into_response();
    }

    let files = match upload::save_all(&state.config.upload_dir, &mut multipart).await {
        Ok(files) => files,
        Err(e) => return e.into_response(),
    };

    match ContentService::attach_show_images(state, id, files).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

// --- ADMIN: EPISODES ---

#[utoipa::path(
    post,
    path = "/api/admin/episodes",
    request_body = CreateEpisodeRequest,
    responses(
        (status = 201, description = "Episode Created", body = Episode),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Show Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn create_episode(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateEpisodeRequest>,
) -> impl IntoResponse {
    match ContentService::create_episode(state, req).await {
        Ok(res) => ApiSuccess::created(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/episodes/{id}",
    params(
        ("id" = i64, Path, description = "Episode ID")
    ),
    request_body = UpdateEpisodeRequest,
    responses(
        (status = 200, description = "Episode updated", body = Episode),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Episode Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn update_episode(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateEpisodeRequest>,
) -> impl IntoResponse {
    match ContentService::update_episode(state, id, req).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/episodes/{id}",
    params(
        ("id" = i64, Path, description = "Episode ID")
    ),
    responses(
        (status = 200, description = "Episode deleted", body = MessageResponse),
        (status = 404, description = "Episode Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn delete_episode(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match ContentService::delete_episode(state, id).await {
        Ok(()) => ApiSuccess::ok(MessageResponse::new("Episode deleted successfully")).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/episodes/{id}/thumbnail",
    params(
        ("id" = i64, Path, description = "Episode ID")
    ),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Episode with new thumbnail", body = Episode),
        (status = 400, description = "No thumbnail file"),
        (status = 404, description = "Episode Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn upload_episode_thumbnail(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppMultipart(mut multipart): AppMultipart,
) -> impl IntoResponse {
    if let Err(e) = ContentService::get_episode(state.clone(), id).await {
        return e.into_response();
    }

    let files = match upload::save_all(&state.config.upload_dir, &mut multipart).await {
        Ok(files) => files,
        Err(e) => return e.into_response(),
    };

    match ContentService::attach_episode_thumbnail(state, id, files).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}
