use crate::domain::models::{
    booking::{Booking, BookingWithSpot, BookingWithUser},
    review::{Review, ReviewStats, ReviewWithUser},
    spot::{Spot, SpotFilters, SpotImage, SpotListing},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    /// Looks up a user by username or email.
    async fn find_by_login(&self, credential: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait SpotRepository: Send + Sync {
    async fn create(&self, spot: &Spot) -> Result<Spot, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Spot>, AppError>;
    async fn list(&self, filters: &SpotFilters, limit: i64, offset: i64) -> Result<Vec<SpotListing>, AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<SpotListing>, AppError>;
    async fn update(&self, spot: &Spot) -> Result<Spot, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn add_image(&self, image: &SpotImage) -> Result<SpotImage, AppError>;
    async fn list_images(&self, spot_id: &str) -> Result<Vec<SpotImage>, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn find_by_spot_and_user(&self, spot_id: &str, user_id: &str) -> Result<Option<Review>, AppError>;
    async fn list_by_spot(&self, spot_id: &str) -> Result<Vec<ReviewWithUser>, AppError>;
    async fn stats_for_spot(&self, spot_id: &str) -> Result<ReviewStats, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    /// All bookings for a spot, minus `exclude_id` when set (edit case).
    async fn list_for_spot(&self, spot_id: &str, exclude_id: Option<&str>) -> Result<Vec<Booking>, AppError>;
    async fn list_for_spot_by_user(&self, spot_id: &str, user_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_for_spot_with_user(&self, spot_id: &str) -> Result<Vec<BookingWithUser>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<BookingWithSpot>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// Calendar-date clock. Injected so date decisions stay deterministic in
/// tests; the system clock only appears in the production implementation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
