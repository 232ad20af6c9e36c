use stayspot_backend::{
    api::router::create_router,
    config::Config,
    domain::ports::Clock,
    domain::services::auth_service::AuthService,
    infra::clock::SystemClock,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_review_repo::SqliteReviewRepo,
        sqlite_spot_repo::SqliteSpotRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// Clock pinned to a fixed calendar date, so booking-date decisions in tests
/// do not depend on when the suite runs.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct AuthHeaders {
    pub access_token: String,
    pub csrf_token: String,
    pub user_id: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::build(Arc::new(SystemClock)).await
    }

    pub async fn with_today(date: &str) -> Self {
        let today = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Self::build(Arc::new(FixedClock(today))).await
    }

    async fn build(clock: Arc<dyn Clock>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret_key: include_str!("keys/test_private.pem").to_string(),
            jwt_public_key: include_str!("keys/test_public.pem").to_string(),
            auth_issuer: "test-issuer".to_string(),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            spot_repo: Arc::new(SqliteSpotRepo::new(pool.clone())),
            review_repo: Arc::new(SqliteReviewRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            auth_service: Arc::new(AuthService::new(config.clone())),
            clock,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        auth: Option<&AuthHeaders>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .header("X-CSRF-Token", auth.csrf_token.as_str());
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn signup(&self, username: &str) -> AuthHeaders {
        let payload = serde_json::json!({
            "firstName": "Test",
            "lastName": "User",
            "email": format!("{}@example.com", username),
            "username": username,
            "password": "password123"
        });

        let response = self.send("POST", "/api/users", None, Some(payload)).await;
        assert!(
            response.status().is_success(),
            "signup failed in test helper: status {}",
            response.status()
        );

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let access_token_cookie = cookies.iter()
            .find(|c| c.contains("access_token="))
            .expect("No access_token cookie returned");

        let start = access_token_cookie.find("access_token=").unwrap() + 13;
        let end = access_token_cookie[start..].find(';').unwrap_or(access_token_cookie.len() - start);
        let access_token = access_token_cookie[start..start + end].to_string();

        let body = parse_body(response).await;
        let csrf_token = body["csrfToken"].as_str().expect("No csrfToken in body").to_string();
        let user_id = body["user"]["id"].as_str().expect("No user id in body").to_string();

        AuthHeaders {
            access_token,
            csrf_token,
            user_id,
        }
    }

    pub async fn create_spot(&self, auth: &AuthHeaders, name: &str) -> String {
        let payload = serde_json::json!({
            "address": "123 Main Street",
            "city": "Portland",
            "state": "Oregon",
            "country": "United States",
            "lat": 45.52,
            "lng": -122.68,
            "name": name,
            "description": "A lovely place to stay",
            "price": 125.0
        });

        let response = self.send("POST", "/api/spots", Some(auth), Some(payload)).await;
        assert!(
            response.status().is_success(),
            "create_spot failed in test helper: status {}",
            response.status()
        );

        let body = parse_body(response).await;
        body["id"].as_str().expect("No spot id in body").to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
