use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::BookingDatesRequest;
use crate::api::dtos::responses::{BookingWithSpotResponse, BookingWithUserResponse, SlimBookingResponse};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::booking::Booking;
use crate::domain::services::booking_rules::{find_conflict, validate_date_range};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(spot_id): Path<String>,
    Json(payload): Json<BookingDatesRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Malformed ranges are rejected before the spot or its bookings are read.
    let (start, end) = payload.parse_range()?;

    let errors = validate_date_range(start, end, state.clock.today());
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let spot = state.spot_repo.find_by_id(&spot_id).await?
        .ok_or(AppError::NotFound("Spot couldn't be found".into()))?;

    if spot.owner_id == user_id {
        return Err(AppError::Forbidden);
    }

    let existing = state.booking_repo.list_for_spot(&spot_id, None).await?;

    if let Some(conflict) = find_conflict(start, end, &existing) {
        warn!(
            "Booking rejected: spot {} already booked ({} .. {})",
            spot_id, conflict.booking.start_date, conflict.booking.end_date
        );
        return Err(AppError::BookingConflict(conflict.errors));
    }

    let booking = Booking::new(spot_id, user_id, start, end);
    let created = state.booking_repo.create(&booking).await?;

    info!("Booking created: {} for spot {}", created.id, created.spot_id);
    Ok(Json(created))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(booking_id): Path<String>,
    Json(payload): Json<BookingDatesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking couldn't be found".into()))?;

    if booking.user_id != user_id {
        return Err(AppError::Forbidden);
    }

    let (start, end) = payload.parse_range()?;

    let today = state.clock.today();
    let errors = validate_date_range(start, end, today);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    if booking.end_date < today {
        return Err(AppError::BookingLocked("Past bookings can't be modified"));
    }

    // The booking being edited must not conflict with itself.
    let existing = state.booking_repo
        .list_for_spot(&booking.spot_id, Some(&booking.id))
        .await?;

    if let Some(conflict) = find_conflict(start, end, &existing) {
        warn!(
            "Booking edit rejected: {} collides with {} on spot {}",
            booking.id, conflict.booking.id, booking.spot_id
        );
        return Err(AppError::BookingConflict(conflict.errors));
    }

    booking.start_date = start;
    booking.end_date = end;
    booking.updated_at = Utc::now();

    let updated = state.booking_repo.update(&booking).await?;
    info!("Booking updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking couldn't be found".into()))?;

    // The renter may cancel, and so may the spot's owner.
    let spot = state.spot_repo.find_by_id(&booking.spot_id).await?;
    let is_spot_owner = spot.is_some_and(|s| s.owner_id == user_id);

    if booking.user_id != user_id && !is_spot_owner {
        return Err(AppError::Forbidden);
    }

    let today = state.clock.today();
    if today >= booking.start_date && today <= booking.end_date {
        return Err(AppError::BookingLocked("Bookings that have been started can't be deleted"));
    }

    state.booking_repo.delete(&booking.id).await?;

    info!("Booking cancelled: {}", booking_id);
    Ok(Json(serde_json::json!({ "message": "Successfully deleted" })))
}

pub async fn list_current_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.booking_repo.list_by_user(&user_id).await?;
    let bookings: Vec<BookingWithSpotResponse> = rows.iter().map(BookingWithSpotResponse::from).collect();

    Ok(Json(serde_json::json!({ "Bookings": bookings })))
}

pub async fn list_spot_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(spot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let spot = state.spot_repo.find_by_id(&spot_id).await?
        .ok_or(AppError::NotFound("Spot couldn't be found".into()))?;

    if spot.owner_id == user_id {
        let rows = state.booking_repo.list_for_spot_with_user(&spot_id).await?;
        let bookings: Vec<BookingWithUserResponse> = rows.iter().map(BookingWithUserResponse::from).collect();
        return Ok(Json(serde_json::json!({ "Bookings": bookings })));
    }

    let rows = state.booking_repo.list_for_spot_by_user(&spot_id, &user_id).await?;
    let bookings: Vec<SlimBookingResponse> = rows.into_iter().map(|b| SlimBookingResponse {
        spot_id: b.spot_id,
        start_date: b.start_date,
        end_date: b.end_date,
    }).collect();

    Ok(Json(serde_json::json!({ "Bookings": bookings })))
}
