mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{parse_body, TestApp};
use serde_json::json;
use stayspot_backend::domain::models::booking::Booking;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn booked_app() -> (TestApp, common::AuthHeaders, common::AuthHeaders, String, String) {
    let app = TestApp::with_today("2024-06-01").await;
    let owner = app.signup("owner").await;
    let renter = app.signup("renter").await;
    let spot_id = app.create_spot(&owner, "Riverside Cabin").await;

    let res = app.send(
        "POST",
        &format!("/api/spots/{spot_id}/bookings"),
        Some(&renter),
        Some(json!({ "startDate": "2024-06-10", "endDate": "2024-06-15" })),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    let booking_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    (app, owner, renter, spot_id, booking_id)
}

#[tokio::test]
async fn edit_does_not_conflict_with_itself() {
    let (app, _owner, renter, _spot_id, booking_id) = booked_app().await;

    // Identical range: the stored booking is excluded from the scan.
    let res = app.send(
        "PUT",
        &format!("/api/bookings/{booking_id}"),
        Some(&renter),
        Some(json!({ "startDate": "2024-06-10", "endDate": "2024-06-15" })),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.send(
        "PUT",
        &format!("/api/bookings/{booking_id}"),
        Some(&renter),
        Some(json!({ "startDate": "2024-06-10", "endDate": "2024-06-17" })),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["endDate"], "2024-06-17");
}

#[tokio::test]
async fn edit_conflicting_with_another_booking_is_rejected() {
    let (app, _owner, renter, spot_id, booking_id) = booked_app().await;

    let other = app.signup("other-renter").await;
    let res = app.send(
        "POST",
        &format!("/api/spots/{spot_id}/bookings"),
        Some(&other),
        Some(json!({ "startDate": "2024-06-20", "endDate": "2024-06-25" })),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.send(
        "PUT",
        &format!("/api/bookings/{booking_id}"),
        Some(&renter),
        Some(json!({ "startDate": "2024-06-21", "endDate": "2024-06-24" })),
    ).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Sorry, this spot is already booked for the specified dates");
    assert_eq!(body["errors"]["startDate"], "Start date conflicts with an existing booking");
    assert_eq!(body["errors"]["endDate"], "End date conflicts with an existing booking");
}

#[tokio::test]
async fn edit_is_limited_to_the_bookings_renter() {
    let (app, owner, _renter, _spot_id, booking_id) = booked_app().await;

    // Even the spot's owner may not edit someone else's booking.
    let res = app.send(
        "PUT",
        &format!("/api/bookings/{booking_id}"),
        Some(&owner),
        Some(json!({ "startDate": "2024-06-10", "endDate": "2024-06-16" })),
    ).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Forbidden");
}

#[tokio::test]
async fn edit_of_missing_booking_is_not_found() {
    let app = TestApp::with_today("2024-06-01").await;
    let renter = app.signup("renter").await;

    let res = app.send(
        "PUT",
        "/api/bookings/no-such-booking",
        Some(&renter),
        Some(json!({ "startDate": "2024-06-10", "endDate": "2024-06-15" })),
    ).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Booking couldn't be found");
}

#[tokio::test]
async fn edit_of_past_booking_is_rejected() {
    let app = TestApp::with_today("2024-06-20").await;
    let owner = app.signup("owner").await;
    let renter = app.signup("renter").await;
    let spot_id = app.create_spot(&owner, "Riverside Cabin").await;

    // Seed a booking whose window has already closed.
    let past = Booking::new(spot_id, renter.user_id.clone(), d("2024-06-01"), d("2024-06-10"));
    app.state.booking_repo.create(&past).await.unwrap();

    let res = app.send(
        "PUT",
        &format!("/api/bookings/{}", past.id),
        Some(&renter),
        Some(json!({ "startDate": "2024-07-01", "endDate": "2024-07-05" })),
    ).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Past bookings can't be modified");
}

#[tokio::test]
async fn edit_validates_dates_before_touching_other_bookings() {
    let (app, _owner, renter, _spot_id, booking_id) = booked_app().await;

    let res = app.send(
        "PUT",
        &format!("/api/bookings/{booking_id}"),
        Some(&renter),
        Some(json!({ "startDate": "2024-05-01", "endDate": "2024-05-02" })),
    ).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["errors"]["startDate"], "startDate cannot be in the past");
}

#[tokio::test]
async fn delete_of_started_booking_is_rejected() {
    let app = TestApp::with_today("2024-06-05").await;
    let owner = app.signup("owner").await;
    let renter = app.signup("renter").await;
    let spot_id = app.create_spot(&owner, "Riverside Cabin").await;

    // Window contains today.
    let started = Booking::new(spot_id, renter.user_id.clone(), d("2024-06-01"), d("2024-06-10"));
    app.state.booking_repo.create(&started).await.unwrap();

    let res = app.send(
        "DELETE",
        &format!("/api/bookings/{}", started.id),
        Some(&renter),
        None,
    ).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Bookings that have been started can't be deleted");
}

#[tokio::test]
async fn delete_of_future_booking_succeeds() {
    let (app, _owner, renter, _spot_id, booking_id) = booked_app().await;

    let res = app.send(
        "DELETE",
        &format!("/api/bookings/{booking_id}"),
        Some(&renter),
        None,
    ).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Successfully deleted");

    let gone = app.state.booking_repo.find_by_id(&booking_id).await.unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn delete_of_completed_booking_succeeds() {
    let app = TestApp::with_today("2024-06-20").await;
    let owner = app.signup("owner").await;
    let renter = app.signup("renter").await;
    let spot_id = app.create_spot(&owner, "Riverside Cabin").await;

    let completed = Booking::new(spot_id, renter.user_id.clone(), d("2024-06-01"), d("2024-06-10"));
    app.state.booking_repo.create(&completed).await.unwrap();

    let res = app.send(
        "DELETE",
        &format!("/api/bookings/{}", completed.id),
        Some(&renter),
        None,
    ).await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn spot_owner_may_delete_a_renters_booking() {
    let (app, owner, _renter, _spot_id, booking_id) = booked_app().await;

    let res = app.send(
        "DELETE",
        &format!("/api/bookings/{booking_id}"),
        Some(&owner),
        None,
    ).await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn unrelated_user_may_not_delete_a_booking() {
    let (app, _owner, _renter, _spot_id, booking_id) = booked_app().await;
    let stranger = app.signup("stranger").await;

    let res = app.send(
        "DELETE",
        &format!("/api/bookings/{booking_id}"),
        Some(&stranger),
        None,
    ).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_of_missing_booking_is_not_found() {
    let app = TestApp::with_today("2024-06-01").await;
    let renter = app.signup("renter").await;

    let res = app.send("DELETE", "/api/bookings/no-such-booking", Some(&renter), None).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Booking couldn't be found");
}

#[tokio::test]
async fn current_bookings_include_the_spot_summary() {
    let (app, _owner, renter, spot_id, booking_id) = booked_app().await;

    let res = app.send("GET", "/api/bookings/current", Some(&renter), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let bookings = body["Bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["id"], booking_id.as_str());
    assert_eq!(bookings[0]["Spot"]["id"], spot_id.as_str());
    assert_eq!(bookings[0]["Spot"]["name"], "Riverside Cabin");
    assert!(bookings[0]["Spot"]["previewImage"].is_null());
    assert!(bookings[0]["Spot"].get("description").is_none());
}

#[tokio::test]
async fn spot_bookings_listing_depends_on_who_asks() {
    let (app, owner, renter, spot_id, booking_id) = booked_app().await;

    // The owner sees full bookings with the renter attached.
    let res = app.send("GET", &format!("/api/spots/{spot_id}/bookings"), Some(&owner), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let bookings = body["Bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["id"], booking_id.as_str());
    assert_eq!(bookings[0]["User"]["firstName"], "Test");

    // The renter only sees the date windows of their own bookings.
    let res = app.send("GET", &format!("/api/spots/{spot_id}/bookings"), Some(&renter), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let bookings = body["Bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["spotId"], spot_id.as_str());
    assert_eq!(bookings[0]["startDate"], "2024-06-10");
    assert!(bookings[0].get("id").is_none());
    assert!(bookings[0].get("User").is_none());
}
