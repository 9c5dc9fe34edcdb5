use super::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use super::service::CategoryService;
use crate::common::extract::{AppJson, AppPath};
use crate::common::response::{ApiSuccess, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::State,
    response::IntoResponse,
};

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponse>)
    ),
    tag = "Catalog"
)]
pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    match CategoryService::find_all(state).await {
        Ok(categories) => ApiSuccess::ok(categories).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "Catalog"
)]
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match CategoryService::find_by_id(state, id).await {
        Ok(category) => ApiSuccess::ok(category).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> impl IntoResponse {
    match CategoryService::create(state, payload).await {
        Ok(category) => ApiSuccess::created(category).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update category
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Category not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateCategoryRequest>,
) -> impl IntoResponse {
    match CategoryService::update(state, id, payload).await {
        Ok(category) => ApiSuccess::ok(category).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete category. Shows in it are kept and become uncategorized.
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match CategoryService::delete(state, id).await {
        Ok(()) => ApiSuccess::ok(MessageResponse::new("Category deleted successfully")).into_response(),
        Err(e) => e.into_response(),
    }
}
