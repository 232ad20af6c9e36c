use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub spot_id: String,
    pub review: String,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(user_id: String, spot_id: String, review: String, stars: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            spot_id,
            review,
            stars,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Review row joined with the reviewer's display fields.
#[derive(Debug, FromRow, Clone)]
pub struct ReviewWithUser {
    pub id: String,
    pub user_id: String,
    pub spot_id: String,
    pub review: String,
    pub stars: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, FromRow, Clone, Copy)]
pub struct ReviewStats {
    pub num_reviews: i64,
    pub avg_rating: Option<f64>,
}
