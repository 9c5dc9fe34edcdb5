use super::model::{HistoryEntry, WatchHistory};
use crate::infrastructure::db::timestamp::DbTime;
use sqlx::SqlitePool;
use time::OffsetDateTime;

pub struct HistoryRepository;

impl HistoryRepository {
    /// Single-statement insert-or-update on (user_id, episode_id). Two devices
    /// racing on the same pair both land; the later write wins.
    pub async fn upsert_progress(
        pool: &SqlitePool,
        user_id: i64,
        episode_id: i64,
        progress: f64,
        watched_at: OffsetDateTime,
    ) -> Result<WatchHistory, sqlx::Error> {
        sqlx::query_as::<_, WatchHistory>(
            r#"
            INSERT INTO watch_history (user_id, episode_id, progress, last_watched_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id, episode_id) DO UPDATE SET
                progress = excluded.progress,
                last_watched_at = excluded.last_watched_at
            RETURNING id, user_id, episode_id, progress, last_watched_at
            "#,
        )
        .bind(user_id)
        .bind(episode_id)
        .bind(progress)
        .bind(DbTime(watched_at))
        .fetch_one(pool)
        .await
    }

    pub async fn find_progress(
        pool: &SqlitePool,
        user_id: i64,
        episode_id: i64,
    ) -> Result<Option<WatchHistory>, sqlx::Error> {
        sqlx::query_as::<_, WatchHistory>(
            r#"
            SELECT id, user_id, episode_id, progress, last_watched_at
            FROM watch_history
            WHERE user_id = ?1 AND episode_id = ?2
            "#,
        )
        .bind(user_id)
        .bind(episode_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT h.episode_id, h.progress, h.last_watched_at,
                   e.title, e.ep_number, e.thumbnail, e.video_url, e.duration,
                   s.id AS show_id, s.title AS show_title, s.poster AS show_poster
            FROM watch_history h
            JOIN episodes e ON e.id = h.episode_id
            JOIN shows s ON s.id = e.show_id
            WHERE h.user_id = ?1
            ORDER BY h.last_watched_at DESC, h.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, user_id: i64, episode_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM watch_history WHERE user_id = ?1 AND episode_id = ?2")
            .bind(user_id)
            .bind(episode_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[cfg(test)]
    pub async fn count_rows(pool: &SqlitePool, user_id: i64, episode_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM watch_history WHERE user_id = ?1 AND episode_id = ?2")
            .bind(user_id)
            .bind(episode_id)
            .fetch_one(pool)
            .await
    }
}
