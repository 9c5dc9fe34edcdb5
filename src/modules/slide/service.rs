use super::dto::{CreateSlideRequest, UpdateSlideRequest};
use super::model::HeroSlide;
use super::repository::SlideRepository;
use crate::common::error::{is_foreign_key_violation, AppError};
use crate::common::upload::SavedFile;
use crate::state::AppState;
use validator::Validate;

pub struct SlideService;

impl SlideService {
    pub async fn list_active(state: AppState) -> Result<Vec<HeroSlide>, AppError> {
        Ok(SlideRepository::list(&state.db, true).await?)
    }

    pub async fn list_all(state: AppState) -> Result<Vec<HeroSlide>, AppError> {
        Ok(SlideRepository::list(&state.db, false).await?)
    }

    pub async fn find_by_id(state: AppState, id: i64) -> Result<HeroSlide, AppError> {
        SlideRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Slide"))
    }

    pub async fn create(state: AppState, req: CreateSlideRequest) -> Result<HeroSlide, AppError> {
        req.validate()?;

        SlideRepository::create(
            &state.db,
            req.show_id,
            req.title.trim(),
            req.subtitle,
            req.image,
            req.link,
            req.sort_order.unwrap_or(0),
            req.is_active.unwrap_or(true),
        )
        .await
        .map_err(unknown_show)
    }

    pub async fn update(state: AppState, id: i64, req: UpdateSlideRequest) -> Result<HeroSlide, AppError> {
        req.validate()?;

        SlideRepository::update(
            &state.db,
            id,
            req.show_id,
            req.title,
            req.subtitle,
            req.image,
            req.link,
            req.sort_order,
            req.is_active,
        )
        .await
        .map_err(unknown_show)?
        .ok_or_else(|| AppError::not_found("Slide"))
    }

    pub async fn delete(state: AppState, id: i64) -> Result<(), AppError> {
        if !SlideRepository::delete(&state.db, id).await? {
            return Err(AppError::not_found("Slide"));
        }
        Ok(())
    }

    /// Uses the first `hero_image`/`image` file as the slide picture.
    pub async fn attach_image(state: AppState, id: i64, files: Vec<SavedFile>) -> Result<HeroSlide, AppError> {
        let image = files
            .into_iter()
            .find(|f| f.field == "hero_image" || f.field == "image")
            .map(|f| f.public_path)
            .ok_or_else(|| AppError::Validation("Expected a hero_image file".to_string()))?;

        SlideRepository::update(&state.db, id, None, None, None, Some(Some(image)), None, None, None)
            .await?
            .ok_or_else(|| AppError::not_found("Slide"))
    }
}

fn unknown_show(e: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&e) {
        AppError::Validation("Show does not exist".to_string())
    } else {
        AppError::Storage(e)
    }
}
