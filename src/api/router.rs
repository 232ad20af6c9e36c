use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{booking, health, review, session, spot, user};
use crate::state::AppState;
use tower_cookies::CookieManagerLayer;
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Session & Users
        .route("/api/users", post(user::signup))
        .route("/api/session", post(session::login).get(session::restore).delete(session::logout))

        // Spots
        .route("/api/spots", get(spot::list_spots).post(spot::create_spot))
        .route("/api/spots/current", get(spot::list_current_spots))
        .route("/api/spots/{spot_id}", get(spot::get_spot).put(spot::update_spot).delete(spot::delete_spot))
        .route("/api/spots/{spot_id}/images", post(spot::add_spot_image))

        // Reviews
        .route("/api/spots/{spot_id}/reviews", get(review::list_spot_reviews).post(review::create_review))

        // Bookings
        .route("/api/spots/{spot_id}/bookings", get(booking::list_spot_bookings).post(booking::create_booking))
        .route("/api/bookings/current", get(booking::list_current_bookings))
        .route("/api/bookings/{booking_id}", put(booking::update_booking).delete(booking::delete_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
