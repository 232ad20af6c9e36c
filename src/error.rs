use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::error;

/// Field name → message, at most one message per field. BTreeMap keeps the
/// serialized order stable.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Invalid input")]
    Validation(FieldErrors),
    #[error("Booking dates conflict with an existing booking")]
    BookingConflict(FieldErrors),
    #[error("{0}")]
    BookingLocked(&'static str),
    #[error("Conflict: {0}")]
    Duplicate(String),
    #[error("User already has a review for this spot")]
    ReviewExists,
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error() {
                    let code = db_err.code().unwrap_or_default();

                    // 2067 = SQLite Unique Constraint
                    // 23505 = PostgreSQL Unique Violation
                    if code == "2067" || code == "23505" {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({ "message": "Resource already exists (duplicate entry)" })),
                        ).into_response();
                    }
                }

                error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal Server Error" })),
                ).into_response()
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": msg }))).into_response()
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Authentication required" })),
            ).into_response(),
            AppError::Forbidden => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": "Forbidden" }))).into_response()
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Bad Request", "errors": errors })),
            ).into_response(),
            AppError::BookingConflict(errors) => (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "message": "Sorry, this spot is already booked for the specified dates",
                    "errors": errors
                })),
            ).into_response(),
            AppError::BookingLocked(msg) => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": msg }))).into_response()
            }
            AppError::Duplicate(msg) => {
                (StatusCode::CONFLICT, Json(json!({ "message": msg }))).into_response()
            }
            // The public contract pins duplicate reviews at 500.
            AppError::ReviewExists => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "User already has a review for this spot" })),
            ).into_response(),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal Server Error" })),
            ).into_response(),
        }
    }
}
