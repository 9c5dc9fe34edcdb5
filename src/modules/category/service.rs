use super::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use super::repository::CategoryRepository;
use crate::common::error::{is_unique_violation, AppError};
use crate::common::slug::slugify;
use crate::state::AppState;
use validator::Validate;

pub struct CategoryService;

impl CategoryService {
    pub async fn create(state: AppState, req: CreateCategoryRequest) -> Result<CategoryResponse, AppError> {
        req.validate()?;
        let slug = match req.slug.as_deref().map(slugify) {
            Some(s) if !s.is_empty() => s,
            _ => slugify(&req.name),
        };

        let category = CategoryRepository::create(&state.db, req.name.trim(), &slug)
            .await
            .map_err(duplicate_as_validation)?;

        Ok(category.into())
    }

    pub async fn find_all(state: AppState) -> Result<Vec<CategoryResponse>, AppError> {
        let categories = CategoryRepository::find_all(&state.db).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> Result<CategoryResponse, AppError> {
        let category = CategoryRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Category"))?;
        Ok(category.into())
    }

    pub async fn update(state: AppState, id: i64, req: UpdateCategoryRequest) -> Result<CategoryResponse, AppError> {
        req.validate()?;
        let slug = req.slug.as_deref().map(slugify).filter(|s| !s.is_empty());

        let category = CategoryRepository::update(&state.db, id, req.name, slug)
            .await
            .map_err(duplicate_as_validation)?
            .ok_or_else(|| AppError::not_found("Category"))?;

        Ok(category.into())
    }

    pub async fn delete(state: AppState, id: i64) -> Result<(), AppError> {
        if !CategoryRepository::delete(&state.db, id).await? {
            return Err(AppError::not_found("Category"));
        }
        Ok(())
    }
}

fn duplicate_as_validation(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        AppError::Validation("Category name or slug already exists".to_string())
    } else {
        AppError::Storage(e)
    }
}
