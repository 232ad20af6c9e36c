use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
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
}

pub struct NewSpotParams {
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
}

impl Spot {
    pub fn new(params: NewSpotParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: params.owner_id,
            address: params.address,
            city: params.city,
            state: params.state,
            country: params.country,
            lat: params.lat,
            lng: params.lng,
            name: params.name,
            description: params.description,
            price: params.price,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Spot row with the aggregates the listing endpoints expose.
#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpotListing {
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
    pub avg_rating: Option<f64>,
    pub preview_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpotImage {
    pub id: String,
    pub spot_id: String,
    pub url: String,
    pub preview: bool,
    pub created_at: DateTime<Utc>,
}

impl SpotImage {
    pub fn new(spot_id: String, url: String, preview: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            spot_id,
            url,
            preview,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct SpotFilters {
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lng: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
