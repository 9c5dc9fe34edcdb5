use super::model::{User, UserRole};
use crate::infrastructure::db::timestamp::DbTime;
use sqlx::SqlitePool;

pub struct AuthRepository;

impl AuthRepository {
    /// Plain insert; a duplicate username surfaces as the UNIQUE constraint error.
    pub async fn create_user(
        pool: &SqlitePool,
        username: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, username, password_hash, role, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .bind(DbTime::now())
        .fetch_one(pool)
        .await
    }

    pub async fn find_user_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    #[cfg(test)]
    pub async fn count_by_username(pool: &SqlitePool, username: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?1")
            .bind(username)
            .fetch_one(pool)
            .await
    }

    /// Ensures `username` exists with the admin role, resetting its hash.
    pub async fn upsert_admin(
        pool: &SqlitePool,
        username: &str,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, role, created_at)
            VALUES (?1, ?2, 'ADMIN', ?3)
            ON CONFLICT(username) DO UPDATE SET
                password_hash = excluded.password_hash,
                role = 'ADMIN'
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(DbTime::now())
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn admin_exists(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'ADMIN'")
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}
