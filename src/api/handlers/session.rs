use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::LoginRequest;
use crate::api::dtos::responses::{SessionResponse, UserProfile};
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::error::AppError;
use crate::state::AppState;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use std::sync::Arc;
use time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};
use tracing::info;

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_login(&payload.credential).await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default().verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let (access_token, csrf_token) = state.auth_service.issue(&user)?;
    set_session_cookie(&cookies, &access_token);

    info!("User logged in: {}", user.id);

    Ok(Json(SessionResponse {
        csrf_token,
        user: UserProfile::from(&user),
    }))
}

pub async fn restore(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user_id): MaybeAuthUser,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = user_id else {
        return Ok(Json(serde_json::json!({ "user": null })));
    };

    match state.user_repo.find_by_id(&user_id).await? {
        Some(user) => Ok(Json(serde_json::json!({ "user": UserProfile::from(&user) }))),
        None => Ok(Json(serde_json::json!({ "user": null }))),
    }
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    cookies.remove(Cookie::build(("access_token", "")).path("/").into());

    info!("User logged out");

    Json(serde_json::json!({ "message": "success" }))
}

pub(crate) fn set_session_cookie(cookies: &Cookies, access: &str) {
    let mut access_c = Cookie::new("access_token", access.to_string());
    access_c.set_http_only(true);
    access_c.set_secure(true);
    access_c.set_same_site(SameSite::Strict);
    access_c.set_path("/");
    access_c.set_max_age(Duration::days(7));
    cookies.add(access_c);
}
