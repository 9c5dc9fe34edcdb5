use super::dto::{DashboardStats, UploadResponse};
use super::repository::AdminRepository;
use crate::common::error::AppError;
use crate::common::extract::AppMultipart;
use crate::common::response::ApiSuccess;
use crate::common::upload;
use crate::state::AppState;
use axum::{
    extract::State,
    response::IntoResponse,
};

/// Counts for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Dashboard counts", body = DashboardStats),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    match AdminRepository::stats(&state.db).await {
        Ok(stats) => ApiSuccess::ok(stats).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Store arbitrary files; the returned paths go into catalog records afterwards
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Files stored", body = UploadResponse),
        (status = 400, description = "No file fields in request"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
pub async fn upload_files(
    State(state): State<AppState>,
    AppMultipart(mut multipart): AppMultipart,
) -> impl IntoResponse {
    let saved = match upload::save_all(&state.config.upload_dir, &mut multipart).await {
        Ok(saved) => saved,
        Err(e) => return e.into_response(),
    };

    if saved.is_empty() {
        return AppError::Validation("No files in request".to_string()).into_response();
    }

    let total_bytes = saved.iter().map(|f| f.bytes).sum();
    let files = saved
        .into_iter()
        .map(|f| (f.field, f.public_path))
        .collect();

    ApiSuccess::created(UploadResponse { files, total_bytes }).into_response()
}
