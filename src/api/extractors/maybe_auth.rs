use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::domain::models::auth::Claims;
use crate::domain::services::auth_service::TOKEN_AUDIENCE;
use crate::error::AppError;
use crate::state::AppState;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::debug;

/// Like `AuthUser`, but an absent or stale token falls back to a guest
/// instead of rejecting.
pub struct MaybeAuthUser(pub Option<String>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(cookies) = parts.extensions.get::<Cookies>() else {
            return Ok(MaybeAuthUser(None));
        };

        let access_token = match cookies.get("access_token") {
            Some(cookie) => cookie.value().to_string(),
            None => return Ok(MaybeAuthUser(None)),
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let decoding_key = match DecodingKey::from_ed_pem(app_state.config.jwt_public_key.as_bytes()) {
            Ok(key) => key,
            Err(_) => {
                debug!("MaybeAuth: Invalid Public Key config");
                return Ok(MaybeAuthUser(None));
            }
        };

        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_audience(&[TOKEN_AUDIENCE]);

        match decode::<Claims>(&access_token, &decoding_key, &validation) {
            Ok(token_data) => Ok(MaybeAuthUser(Some(token_data.claims.sub))),
            // Expired or tampered token, treat as guest.
            Err(_) => Ok(MaybeAuthUser(None)),
        }
    }
}
