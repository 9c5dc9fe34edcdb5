use super::dto::{CreateSlideRequest, UpdateSlideRequest};
use super::model::HeroSlide;
use super::service::SlideService;
use crate::common::extract::{AppJson, AppMultipart, AppPath};
use crate::common::response::{ApiSuccess, MessageResponse};
use crate::common::upload;
use crate::state::AppState;
use axum::{
    extract::State,
    response::IntoResponse,
};

/// Active hero slides for the landing page
#[utoipa::path(
    get,
    path = "/api/slides",
    responses(
        (status = 200, description = "Active slides in display order", body = Vec<HeroSlide>)
    ),
    tag = "Catalog"
)]
pub async fn list_slides(State(state): State<AppState>) -> impl IntoResponse {
    match SlideService::list_active(state).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/slides",
    responses(
        (status = 200, description = "All slides including inactive ones", body = Vec<HeroSlide>),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn list_all_slides(State(state): State<AppState>) -> impl IntoResponse {
    match SlideService::list_all(state).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/slides",
    request_body = CreateSlideRequest,
    responses(
        (status = 201, description = "Slide created", body = HeroSlide),
        (status = 400, description = "Bad Request"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn create_slide(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateSlideRequest>,
) -> impl IntoResponse {
    match SlideService::create(state, req).await {
        Ok(res) => ApiSuccess::created(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/slides/{id}",
    params(
        ("id" = i64, Path, description = "Slide ID")
    ),
    request_body = UpdateSlideRequest,
    responses(
        (status = 200, description = "Slide updated", body = HeroSlide),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Slide Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn update_slide(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateSlideRequest>,
) -> impl IntoResponse {
    match SlideService::update(state, id, req).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/admin/slides/{id}",
    params(
        ("id" = i64, Path, description = "Slide ID")
    ),
    responses(
        (status = 200, description = "Slide deleted", body = MessageResponse),
        (status = 404, description = "Slide Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn delete_slide(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match SlideService::delete(state, id).await {
        Ok(()) => ApiSuccess::ok(MessageResponse::new("Slide deleted successfully")).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/slides/{id}/image",
    params(
        ("id" = i64, Path, description = "Slide ID")
    ),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Slide with new image", body = HeroSlide),
        (status = 400, description = "No hero_image file"),
        (status = 404, description = "Slide Not Found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn upload_slide_image(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppMultipart(mut multipart): AppMultipart,
) -> impl IntoResponse {
    if let Err(e) = SlideService::find_by_id(state.clone(), id).await {
        return e.into_response();
    }

    let files = match upload::save_all(&state.config.upload_dir, &mut multipart).await {
        Ok(files) => files,
        Err(e) => return e.into_response(),
    };

    match SlideService::attach_image(state, id, files).await {
        Ok(res) => ApiSuccess::ok(res).into_response(),
        Err(e) => e.into_response(),
    }
}
