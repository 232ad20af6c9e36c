use crate::domain::models::{
    booking::{BookingWithSpot, BookingWithUser},
    review::ReviewWithUser,
    spot::{Spot, SpotImage},
    user::User,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub csrf_token: String,
    pub user: UserProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotImageSummary {
    pub id: String,
    pub url: String,
    pub preview: bool,
}

impl From<&SpotImage> for SpotImageSummary {
    fn from(image: &SpotImage) -> Self {
        Self {
            id: image.id.clone(),
            url: image.url.clone(),
            preview: image.preview,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotDetailResponse {
    pub id: String,
    pub owner_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub num_reviews: i64,
    pub avg_rating: Option<f64>,
    #[serde(rename = "SpotImages")]
    pub spot_images: Vec<SpotImageSummary>,
    #[serde(rename = "Owner")]
    pub owner: UserSummary,
}

impl SpotDetailResponse {
    pub fn compose(
        spot: Spot,
        num_reviews: i64,
        avg_rating: Option<f64>,
        images: &[SpotImage],
        owner: &User,
    ) -> Self {
        Self {
            id: spot.id,
            owner_id: spot.owner_id,
            address: spot.address,
            city: spot.city,
            state: spot.state,
            country: spot.country,
            lat: spot.lat,
            lng: spot.lng,
            name: spot.name,
            description: spot.description,
            price: spot.price,
            created_at: spot.created_at,
            updated_at: spot.updated_at,
            num_reviews,
            avg_rating,
            spot_images: images.iter().map(SpotImageSummary::from).collect(),
            owner: UserSummary {
                id: owner.id.clone(),
                first_name: owner.first_name.clone(),
                last_name: owner.last_name.clone(),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub user_id: String,
    pub spot_id: String,
    pub review: String,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "User")]
    pub user: UserSummary,
}

impl From<&ReviewWithUser> for ReviewResponse {
    fn from(row: &ReviewWithUser) -> Self {
        Self {
            id: row.id.clone(),
            user_id: row.user_id.clone(),
            spot_id: row.spot_id.clone(),
            review: row.review.clone(),
            stars: row.stars,
            created_at: row.created_at,
            updated_at: row.updated_at,
            user: UserSummary {
                id: row.user_id.clone(),
                first_name: row.first_name.clone(),
                last_name: row.last_name.clone(),
            },
        }
    }
}

/// Spot summary attached to a renter's booking listing; deliberately omits
/// the description and record timestamps.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSpotSummary {
    pub id: String,
    pub owner_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub price: f64,
    pub preview_image: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithSpotResponse {
    pub id: String,
    pub spot_id: String,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "Spot")]
    pub spot: BookedSpotSummary,
}

impl From<&BookingWithSpot> for BookingWithSpotResponse {
    fn from(row: &BookingWithSpot) -> Self {
        Self {
            id: row.id.clone(),
            spot_id: row.spot_id.clone(),
            user_id: row.user_id.clone(),
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            spot: BookedSpotSummary {
                id: row.spot_id.clone(),
                owner_id: row.owner_id.clone(),
                address: row.address.clone(),
                city: row.city.clone(),
                state: row.state.clone(),
                country: row.country.clone(),
                lat: row.lat,
                lng: row.lng,
                name: row.name.clone(),
                price: row.price,
                preview_image: row.preview_image.clone(),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithUserResponse {
    pub id: String,
    pub spot_id: String,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "User")]
    pub user: UserSummary,
}

impl From<&BookingWithUser> for BookingWithUserResponse {
    fn from(row: &BookingWithUser) -> Self {
        Self {
            id: row.id.clone(),
            spot_id: row.spot_id.clone(),
            user_id: row.user_id.clone(),
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            user: UserSummary {
                id: row.user_id.clone(),
                first_name: row.first_name.clone(),
                last_name: row.last_name.clone(),
            },
        }
    }
}

/// Trimmed view a non-owner gets of their own bookings on a spot.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlimBookingResponse {
    pub spot_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
