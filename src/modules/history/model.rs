use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct WatchHistory {
    pub id: i64,
    pub user_id: i64,
    pub episode_id: i64,
    pub progress: f64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub last_watched_at: OffsetDateTime,
}

/// A history row joined with the episode and show it belongs to.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct HistoryEntry {
    pub episode_id: i64,
    pub progress: f64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub last_watched_at: OffsetDateTime,
    pub title: String,
    pub ep_number: i64,
    pub thumbnail: Option<String>,
    pub video_url: Option<String>,
    pub duration: Option<i64>,
    pub show_id: i64,
    pub show_title: String,
    pub show_poster: Option<String>,
}
