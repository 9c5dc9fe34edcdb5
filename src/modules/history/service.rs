use super::dto::{ProgressResponse, UpdateProgressRequest};
use super::model::HistoryEntry;
use super::repository::HistoryRepository;
use crate::common::error::{is_foreign_key_violation, AppError};
use crate::state::AppState;
use time::OffsetDateTime;
use tracing::debug;
use validator::Validate;

pub struct HistoryService;

impl HistoryService {
    pub async fn update_progress(
        state: AppState,
        user_id: i64,
        req: UpdateProgressRequest,
    ) -> Result<ProgressResponse, AppError> {
        req.validate()?;
        let (Some(episode_id), Some(progress)) = (req.episode_id, req.progress) else {
            return Err(AppError::Validation("episode_id and progress are required".to_string()));
        };

        let row = HistoryRepository::upsert_progress(
            &state.db,
            user_id,
            episode_id,
            progress,
            OffsetDateTime::now_utc(),
        )
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::not_found("Episode")
            } else {
                AppError::Storage(e)
            }
        })?;

        debug!("Progress user={} episode={} at {}", user_id, episode_id, progress);
        Ok(row.into())
    }

    pub async fn get_progress(state: AppState, user_id: i64, episode_id: i64) -> Result<ProgressResponse, AppError> {
        let row = HistoryRepository::find_progress(&state.db, user_id, episode_id).await?;
        Ok(row
            .map(ProgressResponse::from)
            .unwrap_or_else(|| ProgressResponse::untouched(episode_id)))
    }

    pub async fn list(state: AppState, user_id: i64) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(HistoryRepository::list_for_user(&state.db, user_id).await?)
    }

    pub async fn remove(state: AppState, user_id: i64, episode_id: i64) -> Result<(), AppError> {
        if !HistoryRepository::delete(&state.db, user_id, episode_id).await? {
            return Err(AppError::not_found("History entry"));
        }
        Ok(())
    }
}
