use super::model::{EpisodeDetail, Show};
use crate::common::patch::{nullable, Nullable};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// --- SHOW DTOs ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateShowRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub genres: Option<String>,
    #[validate(range(min = 1870, max = 2200, message = "Release year is out of range"))]
    pub release_year: Option<i64>,
    pub category_id: Option<i64>,
    pub poster: Option<String>,
    pub banner: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateShowRequest {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Nullable<i64>,
    #[validate(length(min = 1, max = 200, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Nullable<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub genres: Nullable<String>,
    #[validate(range(min = 1870, max = 2200, message = "Release year is out of range"))]
    pub release_year: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub poster: Nullable<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub banner: Nullable<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ShowFilter {
    pub category_id: Option<i64>,
}

// --- EPISODE DTOs ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEpisodeRequest {
    #[validate(required(message = "show_id is required"))]
    pub show_id: Option<i64>,
    #[validate(required(message = "ep_number is required"), range(min = 0, message = "ep_number must not be negative"))]
    pub ep_number: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url(message = "video_url must be a valid URL"))]
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEpisodeRequest {
    #[validate(range(min = 0, message = "ep_number must not be negative"))]
    pub ep_number: Option<i64>,
    #[validate(length(min = 1, max = 200, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Nullable<String>,
    #[validate(url(message = "video_url must be a valid URL"))]
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub thumbnail: Nullable<String>,
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: Option<i64>,
}

// --- SEARCH ---

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub query: String,
    pub shows: Vec<Show>,
    pub episodes: Vec<EpisodeDetail>,
}
