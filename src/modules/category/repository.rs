use super::model::Category;
use crate::infrastructure::db::timestamp::DbTime;
use sqlx::SqlitePool;

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn create(pool: &SqlitePool, name: &str, slug: &str) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(name)
        .bind(slug)
        .bind(DbTime::now())
        .fetch_one(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, created_at
            FROM categories
            ORDER BY name ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, created_at
            FROM categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Returns `None` when no category has this id.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        name: Option<String>,
        slug: Option<String>,
    ) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET
                name = COALESCE(?1, name),
                slug = COALESCE(?2, slug)
            WHERE id = ?3
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(name)
        .bind(slug)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
