use super::model::WatchHistory;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProgressRequest {
    #[validate(required(message = "episode_id is required"))]
    pub episode_id: Option<i64>,
    #[validate(
        required(message = "progress is required"),
        range(min = 0.0, message = "progress must not be negative")
    )]
    pub progress: Option<f64>,
}

/// Stored progress, or zero with no timestamp for an episode never watched.
#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ProgressResponse {
    pub episode_id: i64,
    pub progress: f64,
    #[serde(with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub last_watched_at: Option<OffsetDateTime>,
}

impl ProgressResponse {
    pub fn untouched(episode_id: i64) -> Self {
        Self {
            episode_id,
            progress: 0.0,
            last_watched_at: None,
        }
    }
}

impl From<WatchHistory> for ProgressResponse {
    fn from(h: WatchHistory) -> Self {
        Self {
            episode_id: h.episode_id,
            progress: h.progress,
            last_watched_at: Some(h.last_watched_at),
        }
    }
}
