use serde::Serialize;
use sqlx::FromRow;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct DashboardStats {
    pub users: i64,
    pub categories: i64,
    pub shows: i64,
    pub episodes: i64,
    pub slides: i64,
}

/// Field name to public path of every stored file.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub files: BTreeMap<String, String>,
    pub total_bytes: u64,
}
