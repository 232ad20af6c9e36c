use crate::domain::{
    models::review::{Review, ReviewStats, ReviewWithUser},
    ports::ReviewRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteReviewRepo {
    pool: SqlitePool,
}

impl SqliteReviewRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, user_id, spot_id, review, stars, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&review.id).bind(&review.user_id).bind(&review.spot_id)
            .bind(&review.review).bind(review.stars)
            .bind(review.created_at).bind(review.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_spot_and_user(&self, spot_id: &str, user_id: &str) -> Result<Option<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE spot_id = ? AND user_id = ?")
            .bind(spot_id).bind(user_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_spot(&self, spot_id: &str) -> Result<Vec<ReviewWithUser>, AppError> {
        sqlx::query_as::<_, ReviewWithUser>(
            "SELECT r.*, u.first_name, u.last_name
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.spot_id = ?
             ORDER BY r.created_at ASC"
        )
            .bind(spot_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn stats_for_spot(&self, spot_id: &str) -> Result<ReviewStats, AppError> {
        sqlx::query_as::<_, ReviewStats>(
            "SELECT COUNT(*) AS num_reviews, AVG(stars) AS avg_rating FROM reviews WHERE spot_id = ?"
        )
            .bind(spot_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
