use crate::domain::{
    models::review::{Review, ReviewStats, ReviewWithUser},
    ports::ReviewRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresReviewRepo {
    pool: PgPool,
}

impl PostgresReviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, user_id, spot_id, review, stars, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&review.id).bind(&review.user_id).bind(&review.spot_id)
            .bind(&review.review).bind(review.stars)
            .bind(review.created_at).bind(review.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_spot_and_user(&self, spot_id: &str, user_id: &str) -> Result<Option<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE spot_id = $1 AND user_id = $2")
            .bind(spot_id).bind(user_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_spot(&self, spot_id: &str) -> Result<Vec<ReviewWithUser>, AppError> {
        sqlx::query_as::<_, ReviewWithUser>(
            "SELECT r.*, u.first_name, u.last_name
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.spot_id = $1
             ORDER BY r.created_at ASC"
        )
            .bind(spot_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn stats_for_spot(&self, spot_id: &str) -> Result<ReviewStats, AppError> {
        sqlx::query_as::<_, ReviewStats>(
            "SELECT COUNT(*) AS num_reviews, AVG(stars)::float8 AS avg_rating FROM reviews WHERE spot_id = $1"
        )
            .bind(spot_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
