use super::model::{Episode, EpisodeDetail, Show};
use crate::common::patch::Nullable;
use crate::infrastructure::db::timestamp::DbTime;
use sqlx::SqlitePool;

pub struct ContentRepository;

const SHOW_SELECT: &str = r#"
    SELECT s.id, s.category_id, c.name AS category_name, s.title, s.slug, s.description,
           s.genres, s.release_year, s.poster, s.banner, s.created_at, s.updated_at
    FROM shows s
    LEFT JOIN categories c ON c.id = s.category_id
"#;

const EPISODE_COLUMNS: &str =
    "id, show_id, ep_number, title, description, video_url, thumbnail, duration, created_at, updated_at";

const EPISODE_DETAIL_SELECT: &str = r#"
    SELECT e.id, e.show_id, e.ep_number, e.title, e.description, e.video_url, e.thumbnail,
           e.duration, e.created_at, e.updated_at, s.title AS show_title
    FROM episodes e
    JOIN shows s ON s.id = e.show_id
"#;

/// Wraps a user search term for `LIKE ... ESCAPE '\'`.
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

impl ContentRepository {
    // --- SHOW ---

    #[allow(clippy::too_many_arguments)]
    pub async fn create_show(
        pool: &SqlitePool,
        category_id: Option<i64>,
        title: &str,
        slug: &str,
        description: Option<String>,
        genres: Option<String>,
        release_year: Option<i64>,
        poster: Option<String>,
        banner: Option<String>,
    ) -> Result<i64, sqlx::Error> {
        let now = DbTime::now();
        sqlx::query_scalar(
            r#"
            INSERT INTO shows (category_id, title, slug, description, genres, release_year, poster, banner, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
            RETURNING id
            "#,
        )
        .bind(category_id)
        .bind(title)
        .bind(slug)
        .bind(description)
        .bind(genres)
        .bind(release_year)
        .bind(poster)
        .bind(banner)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    pub async fn get_show_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Show>, sqlx::Error> {
        sqlx::query_as::<_, Show>(&format!("{} WHERE s.id = ?1", SHOW_SELECT))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_shows(pool: &SqlitePool, category_id: Option<i64>) -> Result<Vec<Show>, sqlx::Error> {
        sqlx::query_as::<_, Show>(&format!(
            "{} WHERE (?1 IS NULL OR s.category_id = ?1) ORDER BY s.created_at DESC, s.id DESC",
            SHOW_SELECT
        ))
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    pub async fn search_shows(pool: &SqlitePool, term: &str, limit: i64) -> Result<Vec<Show>, sqlx::Error> {
        sqlx::query_as::<_, Show>(&format!(
            r#"{}
            WHERE s.title LIKE ?1 ESCAPE '\'
               OR s.description LIKE ?1 ESCAPE '\'
               OR s.genres LIKE ?1 ESCAPE '\'
            ORDER BY s.title ASC
            LIMIT ?2"#,
            SHOW_SELECT
        ))
        .bind(like_pattern(term))
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// `Nullable` columns are only touched when the outer option is set, so an
    /// explicit `Some(None)` clears them.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_show(
        pool: &SqlitePool,
        id: i64,
        category_id: Nullable<i64>,
        title: Option<String>,
        description: Nullable<String>,
        genres: Nullable<String>,
        release_year: Option<i64>,
        poster: Nullable<String>,
        banner: Nullable<String>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE shows
            SET
                category_id = CASE WHEN ?1 THEN ?2 ELSE category_id END,
                title = COALESCE(?3, title),
                description = CASE WHEN ?4 THEN ?5 ELSE description END,
                genres = CASE WHEN ?6 THEN ?7 ELSE genres END,
                release_year = COALESCE(?8, release_year),
                poster = CASE WHEN ?9 THEN ?10 ELSE poster END,
                banner = CASE WHEN ?11 THEN ?12 ELSE banner END,
                updated_at = ?13
            WHERE id = ?14
            "#,
        )
        .bind(category_id.is_some())
        .bind(category_id.flatten())
        .bind(title)
        .bind(description.is_some())
        .bind(description.flatten())
        .bind(genres.is_some())
        .bind(genres.flatten())
        .bind(release_year)
        .bind(poster.is_some())
        .bind(poster.flatten())
        .bind(banner.is_some())
        .bind(banner.flatten())
        .bind(DbTime::now())
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Episodes go with it through `ON DELETE CASCADE`.
    pub async fn delete_show(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shows WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- EPISODES ---

    #[allow(clippy::too_many_arguments)]
    pub async fn create_episode(
        pool: &SqlitePool,
        show_id: i64,
        ep_number: i64,
        title: &str,
        description: Option<String>,
        video_url: Option<String>,
        thumbnail: Option<String>,
        duration: Option<i64>,
    ) -> Result<Episode, sqlx::Error> {
        sqlx::query_as::<_, Episode>(&format!(
            r#"
            INSERT INTO episodes (show_id, ep_number, title, description, video_url, thumbnail, duration, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            RETURNING {}
            "#,
            EPISODE_COLUMNS
        ))
        .bind(show_id)
        .bind(ep_number)
        .bind(title)
        .bind(description)
        .bind(video_url)
        .bind(thumbnail)
        .bind(duration)
        .bind(DbTime::now())
        .fetch_one(pool)
        .await
    }

    pub async fn get_episode_by_id(pool: &SqlitePool, id: i64) -> Result<Option<EpisodeDetail>, sqlx::Error> {
        sqlx::query_as::<_, EpisodeDetail>(&format!("{} WHERE e.id = ?1", EPISODE_DETAIL_SELECT))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn get_show_episodes(pool: &SqlitePool, show_id: i64) -> Result<Vec<Episode>, sqlx::Error> {
        sqlx::query_as::<_, Episode>(&format!(
            "SELECT {} FROM episodes WHERE show_id = ?1 ORDER BY ep_number ASC, id ASC",
            EPISODE_COLUMNS
        ))
        .bind(show_id)
        .fetch_all(pool)
        .await
    }

    pub async fn search_episodes(pool: &SqlitePool, term: &str, limit: i64) -> Result<Vec<EpisodeDetail>, sqlx::Error> {
        sqlx::query_as::<_, EpisodeDetail>(&format!(
            r#"{}
            WHERE e.title LIKE ?1 ESCAPE '\'
            ORDER BY s.title ASC, e.ep_number ASC
            LIMIT ?2"#,
            EPISODE_DETAIL_SELECT
        ))
        .bind(like_pattern(term))
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_episode(
        pool: &SqlitePool,
        id: i64,
        ep_number: Option<i64>,
        title: Option<String>,
        description: Nullable<String>,
        video_url: Option<String>,
        thumbnail: Nullable<String>,
        duration: Option<i64>,
    ) -> Result<Option<Episode>, sqlx::Error> {
        sqlx::query_as::<_, Episode>(&format!(
            r#"
            UPDATE episodes
            SET
                ep_number = COALESCE(?1, ep_number),
                title = COALESCE(?2, title),
                description = CASE WHEN ?3 THEN ?4 ELSE description END,
                video_url = COALESCE(?5, video_url),
                thumbnail = CASE WHEN ?6 THEN ?7 ELSE thumbnail END,
                duration = COALESCE(?8, duration),
                updated_at = ?9
            WHERE id = ?10
            RETURNING {}
            "#,
            EPISODE_COLUMNS
        ))
        .bind(ep_number)
        .bind(title)
        .bind(description.is_some())
        .bind(description.flatten())
        .bind(video_url)
        .bind(thumbnail.is_some())
        .bind(thumbnail.flatten())
        .bind(duration)
        .bind(DbTime::now())
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_episode(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
