use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::CreateReviewRequest;
use crate::api::dtos::responses::ReviewResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::review::Review;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn list_spot_reviews(
    State(state): State<Arc<AppState>>,
    Path(spot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.spot_repo.find_by_id(&spot_id).await?.is_none() {
        return Err(AppError::NotFound("Spot couldn't be found".into()));
    }

    let rows = state.review_repo.list_by_spot(&spot_id).await?;
    let reviews: Vec<ReviewResponse> = rows.iter().map(ReviewResponse::from).collect();

    Ok(Json(serde_json::json!({ "Reviews": reviews })))
}

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(spot_id): Path<String>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (text, stars) = payload.validated().map_err(AppError::Validation)?;

    if state.spot_repo.find_by_id(&spot_id).await?.is_none() {
        return Err(AppError::NotFound("Spot couldn't be found".into()));
    }

    if state.review_repo.find_by_spot_and_user(&spot_id, &user_id).await?.is_some() {
        return Err(AppError::ReviewExists);
    }

    let review = Review::new(user_id, spot_id, text, stars);
    let created = state.review_repo.create(&review).await?;

    info!("Review created: {} for spot {}", created.id, created.spot_id);
    Ok((StatusCode::CREATED, Json(created)))
}
