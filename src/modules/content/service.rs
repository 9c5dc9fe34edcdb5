use super::dto::{
    CreateEpisodeRequest, CreateShowRequest, SearchResponse, UpdateEpisodeRequest, UpdateShowRequest,
};
use super::model::{Episode, EpisodeDetail, Show};
use super::repository::ContentRepository;
use crate::common::error::{is_foreign_key_violation, AppError};
use crate::common::slug::unique_slug;
use crate::common::upload::SavedFile;
use crate::state::AppState;
use tracing::info;
use validator::Validate;

const SEARCH_LIMIT: i64 = 50;

pub struct ContentService;

impl ContentService {
    // --- SHOW ---

    pub async fn create_show(state: AppState, req: CreateShowRequest) -> Result<Show, AppError> {
        req.validate()?;
        let slug = unique_slug(&req.title);

        let id = ContentRepository::create_show(
            &state.db,
            req.category_id,
            req.title.trim(),
            &slug,
            req.description,
            req.genres,
            req.release_year,
            req.poster,
            req.banner,
        )
        .await
        .map_err(unknown_category)?;

        info!("Created show id={} slug={}", id, slug);
        Self::get_show(state, id).await
    }

    pub async fn list_shows(state: AppState, category_id: Option<i64>) -> Result<Vec<Show>, AppError> {
        Ok(ContentRepository::list_shows(&state.db, category_id).await?)
    }

    pub async fn get_show(state: AppState, id: i64) -> Result<Show, AppError> {
        ContentRepository::get_show_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Show"))
    }

    pub async fn update_show(state: AppState, id: i64, req: UpdateShowRequest) -> Result<Show, AppError> {
        req.validate()?;

        let updated = ContentRepository::update_show(
            &state.db,
            id,
            req.category_id,
            req.title,
            req.description,
            req.genres,
            req.release_year,
            req.poster,
            req.banner,
        )
        .await
        .map_err(unknown_category)?;

        if !updated {
            return Err(AppError::not_found("Show"));
        }
        Self::get_show(state, id).await
    }

    pub async fn delete_show(state: AppState, id: i64) -> Result<(), AppError> {
        if !ContentRepository::delete_show(&state.db, id).await? {
            return Err(AppError::not_found("Show"));
        }
        info!("Deleted show id={} with its episodes", id);
        Ok(())
    }

    /// Points `poster`/`banner` at freshly uploaded files. Other fields are ignored.
    pub async fn attach_show_images(state: AppState, id: i64, files: Vec<SavedFile>) -> Result<Show, AppError> {
        let mut poster = None;
        let mut banner = None;
        for file in files {
            match file.field.as_str() {
                "poster" => poster = Some(file.public_path),
                "banner" => banner = Some(file.public_path),
                _ => {}
            }
        }

        if poster.is_none() && banner.is_none() {
            return Err(AppError::Validation("Expected a poster or banner file".to_string()));
        }

        let updated = ContentRepository::update_show(
            &state.db,
            id,
            None,
            None,
            None,
            None,
            None,
            poster.map(Some),
            banner.map(Some),
        )
        .await?;
        if !updated {
            return Err(AppError::not_found("Show"));
        }
        Self::get_show(state, id).await
    }

    // --- EPISODES ---

    pub async fn create_episode(state: AppState, req: CreateEpisodeRequest) -> Result<Episode, AppError> {
        req.validate()?;
        let (Some(show_id), Some(ep_number)) = (req.show_id, req.ep_number) else {
            return Err(AppError::Validation("show_id and ep_number are required".to_string()));
        };

        let episode = ContentRepository::create_episode(
            &state.db,
            show_id,
            ep_number,
            req.title.trim(),
            req.description,
            req.video_url,
            req.thumbnail,
            req.duration,
        )
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::not_found("Show")
            } else {
                AppError::Storage(e)
            }
        })?;

        info!("Created episode id={} show_id={}", episode.id, show_id);
        Ok(episode)
    }

    pub async fn list_episodes(state: AppState, show_id: i64) -> Result<Vec<Episode>, AppError> {
        // Distinguish "no such show" from "show without episodes".
        Self::get_show(state.clone(), show_id).await?;
        Ok(ContentRepository::get_show_episodes(&state.db, show_id).await?)
    }

    pub async fn get_episode(state: AppState, id: i64) -> Result<EpisodeDetail, AppError> {
        ContentRepository::get_episode_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Episode"))
    }

    pub async fn update_episode(state: AppState, id: i64, req: UpdateEpisodeRequest) -> Result<Episode, AppError> {
        req.validate()?;

        ContentRepository::update_episode(
            &state.db,
            id,
            req.ep_number,
            req.title,
            req.description,
            req.video_url,
            req.thumbnail,
            req.duration,
        )
        .await?
        .ok_or_else(|| AppError::not_found("Episode"))
    }

    pub async fn delete_episode(state: AppState, id: i64) -> Result<(), AppError> {
        if !ContentRepository::delete_episode(&state.db, id).await? {
            return Err(AppError::not_found("Episode"));
        }
        Ok(())
    }

    pub async fn attach_episode_thumbnail(
        state: AppState,
        id: i64,
        files: Vec<SavedFile>,
    ) -> Result<Episode, AppError> {
        let thumbnail = files
            .into_iter()
            .find(|f| f.field == "thumbnail")
            .map(|f| f.public_path)
            .ok_or_else(|| AppError::Validation("Expected a thumbnail file".to_string()))?;

        ContentRepository::update_episode(&state.db, id, None, None, None, None, Some(Some(thumbnail)), None)
            .await?
            .ok_or_else(|| AppError::not_found("Episode"))
    }

    // --- SEARCH ---

    pub async fn search(state: AppState, q: Option<String>) -> Result<SearchResponse, AppError> {
        let query = q.unwrap_or_default().trim().to_string();
        if query.is_empty() {
            return Err(AppError::Validation("Search query 'q' is required".to_string()));
        }

        let shows = ContentRepository::search_shows(&state.db, &query, SEARCH_LIMIT).await?;
        let episodes = ContentRepository::search_episodes(&state.db, &query, SEARCH_LIMIT).await?;

        Ok(SearchResponse { query, shows, episodes })
    }
}

fn unknown_category(e: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&e) {
        AppError::Validation("Category does not exist".to_string())
    } else {
        AppError::Storage(e)
    }
}
