use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateSpotImageRequest, SpotListQuery, SpotRequest};
use crate::api::dtos::responses::{SpotDetailResponse, SpotImageSummary};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::spot::{NewSpotParams, Spot, SpotImage};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

const MAX_PAGE: i64 = 10;
const MAX_SIZE: i64 = 20;

pub async fn list_spots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SpotListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let errors = params.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let page = params.page.unwrap_or(1).min(MAX_PAGE);
    let size = params.size.unwrap_or(MAX_SIZE).min(MAX_SIZE);

    let spots = state.spot_repo
        .list(&params.filters(), size, size * (page - 1))
        .await?;

    Ok(Json(serde_json::json!({
        "Spots": spots,
        "page": page,
        "size": size
    })))
}

pub async fn list_current_spots(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let spots = state.spot_repo.list_by_owner(&user_id).await?;
    Ok(Json(serde_json::json!({ "Spots": spots })))
}

pub async fn get_spot(
    State(state): State<Arc<AppState>>,
    Path(spot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let spot = state.spot_repo.find_by_id(&spot_id).await?
        .ok_or(AppError::NotFound("Spot couldn't be found".into()))?;

    let stats = state.review_repo.stats_for_spot(&spot.id).await?;
    let images = state.spot_repo.list_images(&spot.id).await?;
    let owner = state.user_repo.find_by_id(&spot.owner_id).await?
        .ok_or(AppError::Internal)?;

    Ok(Json(SpotDetailResponse::compose(
        spot,
        stats.num_reviews,
        stats.avg_rating,
        &images,
        &owner,
    )))
}

pub async fn create_spot(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<SpotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let attrs = payload.validated().map_err(AppError::Validation)?;

    let spot = Spot::new(NewSpotParams {
        owner_id: user_id,
        address: attrs.address,
        city: attrs.city,
        state: attrs.state,
        country: attrs.country,
        lat: attrs.lat,
        lng: attrs.lng,
        name: attrs.name,
        description: attrs.description,
        price: attrs.price,
    });
    let created = state.spot_repo.create(&spot).await?;

    info!("Spot created: {} by {}", created.id, created.owner_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_spot(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(spot_id): Path<String>,
    Json(payload): Json<SpotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut spot = state.spot_repo.find_by_id(&spot_id).await?
        .ok_or(AppError::NotFound("Spot couldn't be found".into()))?;

    if spot.owner_id != user_id {
        return Err(AppError::Forbidden);
    }

    let attrs = payload.validated().map_err(AppError::Validation)?;

    spot.address = attrs.address;
    spot.city = attrs.city;
    spot.state = attrs.state;
    spot.country = attrs.country;
    spot.lat = attrs.lat;
    spot.lng = attrs.lng;
    spot.name = attrs.name;
    spot.description = attrs.description;
    spot.price = attrs.price;
    spot.updated_at = Utc::now();

    let updated = state.spot_repo.update(&spot).await?;
    info!("Spot updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_spot(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(spot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let spot = state.spot_repo.find_by_id(&spot_id).await?
        .ok_or(AppError::NotFound("Spot couldn't be found".into()))?;

    if spot.owner_id != user_id {
        return Err(AppError::Forbidden);
    }

    state.spot_repo.delete(&spot.id).await?;

    info!("Spot deleted: {}", spot_id);
    Ok(Json(serde_json::json!({ "message": "Successfully deleted" })))
}

pub async fn add_spot_image(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(spot_id): Path<String>,
    Json(payload): Json<CreateSpotImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let spot = state.spot_repo.find_by_id(&spot_id).await?
        .ok_or(AppError::NotFound("Spot couldn't be found".into()))?;

    if spot.owner_id != user_id {
        return Err(AppError::Forbidden);
    }

    let image = SpotImage::new(spot.id, payload.url, payload.preview);
    let created = state.spot_repo.add_image(&image).await?;

    info!("Image added to spot {}: {}", spot_id, created.id);
    Ok(Json(SpotImageSummary::from(&created)))
}
