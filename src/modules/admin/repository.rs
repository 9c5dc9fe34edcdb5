use super::dto::DashboardStats;
use sqlx::SqlitePool;

pub struct AdminRepository;

impl AdminRepository {
    pub async fn stats(pool: &SqlitePool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users WHERE role = 'USER') AS users,
                (SELECT COUNT(*) FROM categories) AS categories,
                (SELECT COUNT(*) FROM shows) AS shows,
                (SELECT COUNT(*) FROM episodes) AS episodes,
                (SELECT COUNT(*) FROM hero_slides) AS slides
            "#,
        )
        .fetch_one(pool)
        .await
    }
}
