use super::model::HeroSlide;
use crate::common::patch::Nullable;
use crate::infrastructure::db::timestamp::DbTime;
use sqlx::SqlitePool;

const SLIDE_COLUMNS: &str = "id, show_id, title, subtitle, image, link, sort_order, is_active, created_at";

pub struct SlideRepository;

impl SlideRepository {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &SqlitePool,
        show_id: Option<i64>,
        title: &str,
        subtitle: Option<String>,
        image: Option<String>,
        link: Option<String>,
        sort_order: i64,
        is_active: bool,
    ) -> Result<HeroSlide, sqlx::Error> {
        sqlx::query_as::<_, HeroSlide>(&format!(
            r#"
            INSERT INTO hero_slides (show_id, title, subtitle, image, link, sort_order, is_active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING {}
            "#,
            SLIDE_COLUMNS
        ))
        .bind(show_id)
        .bind(title)
        .bind(subtitle)
        .bind(image)
        .bind(link)
        .bind(sort_order)
        .bind(is_active)
        .bind(DbTime::now())
        .fetch_one(pool)
        .await
    }

    pub async fn list(pool: &SqlitePool, active_only: bool) -> Result<Vec<HeroSlide>, sqlx::Error> {
        sqlx::query_as::<_, HeroSlide>(&format!(
            "SELECT {} FROM hero_slides WHERE (?1 = 0 OR is_active = 1) ORDER BY sort_order ASC, id ASC",
            SLIDE_COLUMNS
        ))
        .bind(active_only)
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<HeroSlide>, sqlx::Error> {
        sqlx::query_as::<_, HeroSlide>(&format!("SELECT {} FROM hero_slides WHERE id = ?1", SLIDE_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        show_id: Nullable<i64>,
        title: Option<String>,
        subtitle: Nullable<String>,
        image: Nullable<String>,
        link: Nullable<String>,
        sort_order: Option<i64>,
        is_active: Option<bool>,
    ) -> Result<Option<HeroSlide>, sqlx::Error> {
        sqlx::query_as::<_, HeroSlide>(&format!(
            r#"
            UPDATE hero_slides
            SET
                show_id = CASE WHEN ?1 THEN ?2 ELSE show_id END,
                title = COALESCE(?3, title),
                subtitle = CASE WHEN ?4 THEN ?5 ELSE subtitle END,
                image = CASE WHEN ?6 THEN ?7 ELSE image END,
                link = CASE WHEN ?8 THEN ?9 ELSE link END,
                sort_order = COALESCE(?10, sort_order),
                is_active = COALESCE(?11, is_active)
            WHERE id = ?12
            RETURNING {}
            "#,
            SLIDE_COLUMNS
        ))
        .bind(show_id.is_some())
        .bind(show_id.flatten())
        .bind(title)
        .bind(subtitle.is_some())
        .bind(subtitle.flatten())
        .bind(image.is_some())
        .bind(image.flatten())
        .bind(link.is_some())
        .bind(link.flatten())
        .bind(sort_order)
        .bind(is_active)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_slides WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
