use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct HeroSlide {
    pub id: i64,
    pub show_id: Option<i64>,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}
