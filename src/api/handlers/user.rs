use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::SignupRequest;
use crate::api::dtos::responses::{SessionResponse, UserProfile};
use crate::api::handlers::session::set_session_cookie;
use crate::domain::models::user::{NewUserParams, User};
use crate::error::AppError;
use crate::state::AppState;
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

pub async fn signup(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let username = payload.username.unwrap_or_default();
    let email = payload.email.unwrap_or_default();

    if state.user_repo.find_by_login(&username).await?.is_some()
        || state.user_repo.find_by_login(&email).await?.is_some()
    {
        return Err(AppError::Duplicate("User already exists".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.unwrap_or_default().as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let user = User::new(NewUserParams {
        first_name: payload.first_name.unwrap_or_default(),
        last_name: payload.last_name.unwrap_or_default(),
        email,
        username,
        password_hash,
    });
    let created = state.user_repo.create(&user).await?;

    let (access_token, csrf_token) = state.auth_service.issue(&created)?;
    set_session_cookie(&cookies, &access_token);

    info!("User signed up: {}", created.id);

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            csrf_token,
            user: UserProfile::from(&created),
        }),
    ))
}
