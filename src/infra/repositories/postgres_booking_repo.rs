use crate::domain::{
    models::booking::{Booking, BookingWithSpot, BookingWithUser},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, spot_id, user_id, start_date, end_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.spot_id).bind(&booking.user_id)
            .bind(booking.start_date).bind(booking.end_date)
            .bind(booking.created_at).bind(booking.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_for_spot(&self, spot_id: &str, exclude_id: Option<&str>) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE spot_id = $1 AND ($2::text IS NULL OR id <> $2) ORDER BY start_date ASC"
        )
            .bind(spot_id).bind(exclude_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_for_spot_by_user(&self, spot_id: &str, user_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE spot_id = $1 AND user_id = $2 ORDER BY start_date ASC"
        )
            .bind(spot_id).bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_for_spot_with_user(&self, spot_id: &str) -> Result<Vec<BookingWithUser>, AppError> {
        sqlx::query_as::<_, BookingWithUser>(
            "SELECT b.*, u.first_name, u.last_name
             FROM bookings b
             JOIN users u ON u.id = b.user_id
             WHERE b.spot_id = $1
             ORDER BY b.start_date ASC"
        )
            .bind(spot_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<BookingWithSpot>, AppError> {
        sqlx::query_as::<_, BookingWithSpot>(
            "SELECT b.id, b.spot_id, b.user_id, b.start_date, b.end_date, b.created_at, b.updated_at,
                    s.owner_id, s.address, s.city, s.state, s.country, s.lat, s.lng, s.name, s.price,
                    (SELECT si.url FROM spot_images si WHERE si.spot_id = s.id AND si.preview = TRUE LIMIT 1) AS preview_image
             FROM bookings b
             JOIN spots s ON s.id = b.spot_id
             WHERE b.user_id = $1
             ORDER BY b.start_date ASC"
        )
            .bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET start_date=$1, end_date=$2, updated_at=$3
             WHERE id=$4
             RETURNING *"
        )
            .bind(booking.start_date).bind(booking.end_date).bind(booking.updated_at)
            .bind(&booking.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking couldn't be found".into()));
        }
        Ok(())
    }
}
