use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct Show {
    pub id: i64,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    /// Comma separated, e.g. "Drama, Crime".
    pub genres: Option<String>,
    pub release_year: Option<i64>,
    pub poster: Option<String>,
    pub banner: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct Episode {
    pub id: i64,
    pub show_id: i64,
    pub ep_number: i64,
    pub title: String,
    pub description: Option<String>,
    /// External player link, e.g. a shared drive URL.
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    /// Seconds.
    pub duration: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct EpisodeDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub episode: Episode,
    pub show_title: String,
}
