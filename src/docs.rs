use utoipa::OpenApi;
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

use crate::common::response::{ErrorResponse, MessageResponse};
use crate::modules::admin::dto::{DashboardStats, UploadResponse};
use crate::modules::auth::dto::*;
use crate::modules::category::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::modules::content::dto::{
    CreateEpisodeRequest, CreateShowRequest, SearchResponse, UpdateEpisodeRequest, UpdateShowRequest,
};
use crate::modules::content::model::{Episode, EpisodeDetail, Show};
use crate::modules::history::dto::{ProgressResponse, UpdateProgressRequest};
use crate::modules::history::model::HistoryEntry;
use crate::modules::slide::dto::{CreateSlideRequest, UpdateSlideRequest};
use crate::modules::slide::model::HeroSlide;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::handler::register,
        crate::modules::auth::handler::login,
        crate::modules::auth::handler::admin_login,
        crate::modules::auth::handler::get_me,
        crate::modules::category::handler::list_categories,
        crate::modules::category::handler::get_category,
        crate::modules::category::handler::create_category,
        crate::modules::category::handler::update_category,
        crate::modules::category::handler::delete_category,
        crate::modules::content::handler::list_shows,
        crate::modules::content::handler::get_show,
        crate::modules::content::handler::list_show_episodes,
        crate::modules::content::handler::get_episode,
        crate::modules::content::handler::search,
        crate::modules::content::handler::create_show,
        crate::modules::content::handler::update_show,
        crate::modules::content::handler::delete_show,
        crate::modules::content::handler::upload_show_images,
        crate::modules::content::handler::create_episode,
        crate::modules::content::handler::update_episode,
        crate::modules::content::handler::delete_episode,
        crate::modules::content::handler::upload_episode_thumbnail,
        crate::modules::slide::handler::list_slides,
        crate::modules::slide::handler::list_all_slides,
        crate::modules::slide::handler::create_slide,
        crate::modules::slide::handler::update_slide,
        crate::modules::slide::handler::delete_slide,
        crate::modules::slide::handler::upload_slide_image,
        crate::modules::history::handler::list_history,
        crate::modules::history::handler::get_progress,
        crate::modules::history::handler::update_progress,
        crate::modules::history::handler::delete_history_entry,
        crate::modules::admin::handler::stats,
        crate::modules::admin::handler::upload_files,
    ),
    components(
        schemas(
            RegisterRequest, LoginRequest, AuthResponse, UserResponse,
            CreateCategoryRequest, UpdateCategoryRequest, CategoryResponse,
            Show, Episode, EpisodeDetail, SearchResponse,
            CreateShowRequest, UpdateShowRequest, CreateEpisodeRequest, UpdateEpisodeRequest,
            HeroSlide, CreateSlideRequest, UpdateSlideRequest,
            MessageResponse, ErrorResponse,
            UpdateProgressRequest, ProgressResponse, HistoryEntry,
            DashboardStats, UploadResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and admin login"),
        (name = "Catalog", description = "Categories, shows, episodes, slides and search"),
        (name = "History", description = "Per-user watch progress"),
        (name = "Admin", description = "Dashboard and uploads")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
