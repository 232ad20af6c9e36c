mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn signup_returns_profile_and_session() {
    let app = TestApp::new().await;

    let auth = app.signup("newuser").await;

    assert!(!auth.access_token.is_empty());
    assert!(!auth.csrf_token.is_empty());

    let res = app.send("GET", "/api/session", Some(&auth), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["user"]["username"], "newuser");
    assert_eq!(body["user"]["email"], "newuser@example.com");
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn signup_validates_its_fields() {
    let app = TestApp::new().await;

    let res = app.send("POST", "/api/users", None, Some(json!({
        "firstName": "",
        "email": "not-an-email",
        "username": "ab",
        "password": "short"
    }))).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["errors"]["firstName"], "First Name is required");
    assert_eq!(body["errors"]["email"], "Invalid email");
    assert_eq!(body["errors"]["username"], "Username is required");
    assert_eq!(body["errors"]["password"], "Password must be 6 characters or more");
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let app = TestApp::new().await;
    app.signup("taken").await;

    let res = app.send("POST", "/api/users", None, Some(json!({
        "firstName": "Test",
        "lastName": "User",
        "email": "somebody-else@example.com",
        "username": "taken",
        "password": "password123"
    }))).await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn login_works_with_username_or_email() {
    let app = TestApp::new().await;
    app.signup("returning").await;

    let res = app.send("POST", "/api/session", None, Some(json!({
        "credential": "returning",
        "password": "password123"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["user"]["username"], "returning");
    assert!(body["csrfToken"].is_string());

    let res = app.send("POST", "/api/session", None, Some(json!({
        "credential": "returning@example.com",
        "password": "password123"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = TestApp::new().await;
    app.signup("victim").await;

    let res = app.send("POST", "/api/session", None, Some(json!({
        "credential": "victim",
        "password": "wrong-password"
    }))).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.send("POST", "/api/session", None, Some(json!({
        "credential": "nobody",
        "password": "password123"
    }))).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_restore_without_cookie_is_a_guest() {
    let app = TestApp::new().await;

    let res = app.send("GET", "/api/session", None, None).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn mutating_requests_need_the_csrf_header() {
    let app = TestApp::new().await;
    let auth = app.signup("careful").await;

    // Cookie alone, no X-CSRF-Token header.
    let res = app.router.clone().oneshot(
        axum::http::Request::builder()
            .method("POST")
            .uri("/api/spots")
            .header(axum::http::header::COOKIE, format!("access_token={}", auth.access_token))
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(json!({}).to_string()))
            .unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
