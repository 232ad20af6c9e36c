use crate::domain::{
    models::spot::{Spot, SpotFilters, SpotImage, SpotListing},
    ports::SpotRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSpotRepo {
    pool: PgPool,
}

impl PostgresSpotRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const LISTING_SELECT: &str = "SELECT s.*, \
    (SELECT AVG(r.stars)::float8 FROM reviews r WHERE r.spot_id = s.id) AS avg_rating, \
    (SELECT si.url FROM spot_images si WHERE si.spot_id = s.id AND si.preview = TRUE LIMIT 1) AS preview_image \
    FROM spots s";

#[async_trait]
impl SpotRepository for PostgresSpotRepo {
    async fn create(&self, spot: &Spot) -> Result<Spot, AppError> {
        sqlx::query_as::<_, Spot>(
            "INSERT INTO spots (id, owner_id, address, city, state, country, lat, lng, name, description, price, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING *"
        )
            .bind(&spot.id).bind(&spot.owner_id).bind(&spot.address).bind(&spot.city)
            .bind(&spot.state).bind(&spot.country).bind(spot.lat).bind(spot.lng)
            .bind(&spot.name).bind(&spot.description).bind(spot.price)
            .bind(spot.created_at).bind(spot.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Spot>, AppError> {
        sqlx::query_as::<_, Spot>("SELECT * FROM spots WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filters: &SpotFilters, limit: i64, offset: i64) -> Result<Vec<SpotListing>, AppError> {
        // A NULL bound falls back to the column itself, turning the
        // comparison into a no-op.
        let sql = format!(
            "{LISTING_SELECT}
             WHERE s.lat >= COALESCE($1, s.lat) AND s.lat <= COALESCE($2, s.lat)
               AND s.lng >= COALESCE($3, s.lng) AND s.lng <= COALESCE($4, s.lng)
               AND s.price >= COALESCE($5, s.price) AND s.price <= COALESCE($6, s.price)
             ORDER BY s.created_at ASC
             LIMIT $7 OFFSET $8"
        );
        sqlx::query_as::<_, SpotListing>(&sql)
            .bind(filters.min_lat).bind(filters.max_lat)
            .bind(filters.min_lng).bind(filters.max_lng)
            .bind(filters.min_price).bind(filters.max_price)
            .bind(limit).bind(offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<SpotListing>, AppError> {
        let sql = format!("{LISTING_SELECT} WHERE s.owner_id = $1 ORDER BY s.created_at ASC");
        sqlx::query_as::<_, SpotListing>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, spot: &Spot) -> Result<Spot, AppError> {
        sqlx::query_as::<_, Spot>(
            "UPDATE spots SET address=$1, city=$2, state=$3, country=$4, lat=$5, lng=$6, name=$7, description=$8, price=$9, updated_at=$10
             WHERE id=$11
             RETURNING *"
        )
            .bind(&spot.address).bind(&spot.city).bind(&spot.state).bind(&spot.country)
            .bind(spot.lat).bind(spot.lng).bind(&spot.name).bind(&spot.description)
            .bind(spot.price).bind(spot.updated_at)
            .bind(&spot.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM spots WHERE id = $1")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Spot couldn't be found".into()));
        }
        Ok(())
    }

    async fn add_image(&self, image: &SpotImage) -> Result<SpotImage, AppError> {
        sqlx::query_as::<_, SpotImage>(
            "INSERT INTO spot_images (id, spot_id, url, preview, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *"
        )
            .bind(&image.id).bind(&image.spot_id).bind(&image.url)
            .bind(image.preview).bind(image.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_images(&self, spot_id: &str) -> Result<Vec<SpotImage>, AppError> {
        sqlx::query_as::<_, SpotImage>(
            "SELECT * FROM spot_images WHERE spot_id = $1 ORDER BY created_at ASC"
        )
            .bind(spot_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
