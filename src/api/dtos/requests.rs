use crate::domain::services::booking_rules;
use crate::domain::models::spot::SpotFilters;
use crate::error::{AppError, FieldErrors};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SignupRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.first_name.as_deref().unwrap_or("").is_empty() {
            errors.insert("firstName".into(), "First Name is required".into());
        }
        if self.last_name.as_deref().unwrap_or("").is_empty() {
            errors.insert("lastName".into(), "Last Name is required".into());
        }
        if !self.email.as_deref().unwrap_or("").contains('@') {
            errors.insert("email".into(), "Invalid email".into());
        }
        if self.username.as_deref().unwrap_or("").len() < 4 {
            errors.insert("username".into(), "Username is required".into());
        }
        if self.password.as_deref().unwrap_or("").len() < 6 {
            errors.insert("password".into(), "Password must be 6 characters or more".into());
        }
        errors
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub credential: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotRequest {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Fully-checked spot attributes, produced by `SpotRequest::validated`.
pub struct SpotAttributes {
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

impl SpotRequest {
    /// Aggregates every field failure into one error map; a field keeps a
    /// single message.
    pub fn validated(self) -> Result<SpotAttributes, FieldErrors> {
        let mut errors = FieldErrors::new();

        let address = self.address.unwrap_or_default();
        if address.len() < 4 {
            errors.insert("address".into(), "Street address is required".into());
        }
        let city = self.city.unwrap_or_default();
        if city.len() < 2 {
            errors.insert("city".into(), "City is required".into());
        }
        let state = self.state.unwrap_or_default();
        if state.len() < 2 {
            errors.insert("state".into(), "State is required".into());
        }
        let country = self.country.unwrap_or_default();
        if country.len() < 3 {
            errors.insert("country".into(), "Country is required".into());
        }
        match self.lat {
            None => {
                errors.insert("lat".into(), "Latitude is required".into());
            }
            Some(lat) if !(-90.0..=90.0).contains(&lat) => {
                errors.insert("lat".into(), "Latitude must be within -90 and 90".into());
            }
            Some(_) => {}
        }
        match self.lng {
            None => {
                errors.insert("lng".into(), "Longitude is required".into());
            }
            Some(lng) if !(-180.0..=180.0).contains(&lng) => {
                errors.insert("lng".into(), "Longitude must be within -180 and 180".into());
            }
            Some(_) => {}
        }
        let name = self.name.unwrap_or_default();
        if name.is_empty() {
            errors.insert("name".into(), "Name is required".into());
        } else if name.len() > 49 {
            errors.insert("name".into(), "Name must be less than 50 characters".into());
        }
        let description = self.description.unwrap_or_default();
        if description.len() < 3 {
            errors.insert("description".into(), "Description is required".into());
        }
        match self.price {
            Some(price) if price > 0.0 => {}
            _ => {
                errors.insert("price".into(), "Price per day must be a positive number".into());
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SpotAttributes {
            address,
            city,
            state,
            country,
            lat: self.lat.unwrap_or_default(),
            lng: self.lng.unwrap_or_default(),
            name,
            description,
            price: self.price.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lng: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SpotListQuery {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.page.is_some_and(|p| p < 1) {
            errors.insert("page".into(), "Page must be greater than or equal to 1".into());
        }
        if self.size.is_some_and(|s| s < 1) {
            errors.insert("size".into(), "Size must be greater than or equal to 1".into());
        }
        if self.min_lat.is_some_and(|v| v < -90.0) {
            errors.insert("minLat".into(), "Minimum latitude is invalid".into());
        }
        if self.max_lat.is_some_and(|v| v > 90.0) {
            errors.insert("maxLat".into(), "Maximum latitude is invalid".into());
        }
        if self.min_lng.is_some_and(|v| v < -180.0) {
            errors.insert("minLng".into(), "Minimum longitude is invalid".into());
        }
        if self.max_lng.is_some_and(|v| v > 180.0) {
            errors.insert("maxLng".into(), "Maximum longitude is invalid".into());
        }
        if self.min_price.is_some_and(|v| v < 0.0) {
            errors.insert("minPrice".into(), "Minimum price must be greater than or equal to 0".into());
        }
        if self.max_price.is_some_and(|v| v < 0.0) {
            errors.insert("maxPrice".into(), "Maximum price must be greater than or equal to 0".into());
        }
        errors
    }

    pub fn filters(&self) -> SpotFilters {
        SpotFilters {
            min_lat: self.min_lat,
            max_lat: self.max_lat,
            min_lng: self.min_lng,
            max_lng: self.max_lng,
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpotImageRequest {
    pub url: String,
    pub preview: bool,
}

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub review: Option<String>,
    pub stars: Option<f64>,
}

impl CreateReviewRequest {
    /// Returns (text, stars) or the aggregated field errors.
    pub fn validated(self) -> Result<(String, i32), FieldErrors> {
        let mut errors = FieldErrors::new();

        let text = self.review.unwrap_or_default();
        if text.is_empty() {
            errors.insert("review".into(), "Review text is required".into());
        }
        match self.stars {
            Some(stars) if stars.fract() == 0.0 && (1.0..=5.0).contains(&stars) => {}
            _ => {
                errors.insert("stars".into(), "Stars must be an integer from 1 to 5".into());
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok((text, self.stars.unwrap_or_default() as i32))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDatesRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl BookingDatesRequest {
    /// Parses the ISO date pair. A missing or unreadable field reports the
    /// same error pair as a fully malformed range, before any date logic.
    pub fn parse_range(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        let (Some(start_raw), Some(end_raw)) = (&self.start_date, &self.end_date) else {
            return Err(AppError::Validation(booking_rules::malformed_range_errors()));
        };

        let start = NaiveDate::parse_from_str(start_raw, "%Y-%m-%d");
        let end = NaiveDate::parse_from_str(end_raw, "%Y-%m-%d");
        match (start, end) {
            (Ok(start), Ok(end)) => Ok((start, end)),
            _ => Err(AppError::Validation(booking_rules::malformed_range_errors())),
        }
    }
}
