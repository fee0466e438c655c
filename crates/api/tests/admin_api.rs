//! HTTP-level tests for admin RBAC and input validation.
//!
//! No database is running: requests rejected before any query are fully
//! checked, and requests that do reach the pool must fail as unavailable.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, get_auth, send_json_auth, token_with_role};
use lokanta_core::source::InMemorySource;
use serde_json::json;

fn app() -> axum::Router {
    common::build_test_app(InMemorySource::new())
}

// ---------------------------------------------------------------------------
// Authentication and roles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let response = get(app(), "/api/v1/admin/categories").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn malformed_or_forged_token_is_unauthorized() {
    let response = get_auth(app(), "/api/v1/admin/menu-items", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_admin_role_is_forbidden() {
    let token = token_with_role("viewer");
    let response = get_auth(app(), "/api/v1/admin/reviews", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

#[tokio::test]
async fn admin_reaching_a_down_database_gets_unavailable() {
    let response = get_auth(app(), "/api/v1/admin/languages", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// ---------------------------------------------------------------------------
// Validation (rejected before touching the database)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_without_base_name_is_rejected() {
    let body = json!({ "name": { "en": "Soups" }, "order": 1 });
    let response =
        send_json_auth(app(), "POST", "/api/v1/admin/categories", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("'tr'"));
}

#[tokio::test]
async fn menu_item_with_negative_price_is_rejected() {
    let body = json!({ "name": { "tr": "Çay" }, "price": -5 });
    let response =
        send_json_auth(app(), "POST", "/api/v1/admin/menu-items", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn menu_item_with_unknown_allergy_is_rejected() {
    let body = json!({ "name": { "tr": "Çay" }, "price": 30, "allergies": ["glitter"] });
    let response =
        send_json_auth(app(), "POST", "/api/v1/admin/menu-items", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_language_code_is_rejected() {
    let body = json!({ "code": "EN", "name": "English" });
    let response =
        send_json_auth(app(), "POST", "/api/v1/admin/languages", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let body = json!({ "author_name": "Ayşe", "rating": 6, "text": "Harika" });
    let response =
        send_json_auth(app(), "POST", "/api/v1/admin/reviews", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_working_hours_are_rejected() {
    let body = json!({ "working_hours": { "monday": { "open": "9am", "close": "17:00" } } });
    let response =
        send_json_auth(app(), "PUT", "/api/v1/admin/business", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn menu_item_with_bare_file_name_image_is_rejected() {
    let body = json!({ "name": { "tr": "Çay" }, "price": 30, "image_url": "cay.jpg" });
    let response =
        send_json_auth(app(), "POST", "/api/v1/admin/menu-items", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("image_url"));
}

#[tokio::test]
async fn business_maps_link_must_be_a_url() {
    let body = json!({ "google_maps_url": "not a url" });
    let response =
        send_json_auth(app(), "PUT", "/api/v1/admin/business", body, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Payloads the admin forms send (accepted, so they reach the down database)
// ---------------------------------------------------------------------------

async fn assert_accepted(method: &str, uri: &str, body: serde_json::Value) {
    let response = send_json_auth(app(), method, uri, body.clone(), &admin_token()).await;
    assert_eq!(
        response.status(),
        StatusCode::SERVICE_UNAVAILABLE,
        "{method} {uri} with {body} should pass validation",
    );
}

#[tokio::test]
async fn menu_item_accepts_uploaded_image_paths_and_blank_image() {
    for image_url in [
        json!("/menu-items/1700000000-cay.jpg"),
        json!("https://cdn.example.com/cay.jpg"),
        json!("data:image/png;base64,iVBORw0KGgo="),
        json!(""),
        json!(null),
    ] {
        let body = json!({ "name": { "tr": "Çay" }, "price": 30, "image_url": image_url });
        assert_accepted("POST", "/api/v1/admin/menu-items", body).await;
    }
}

#[tokio::test]
async fn menu_item_update_can_clear_image_and_category() {
    assert_accepted("PUT", "/api/v1/admin/menu-items/1", json!({ "image_url": null })).await;
    assert_accepted("PUT", "/api/v1/admin/menu-items/1", json!({ "image_url": "" })).await;
    assert_accepted("PUT", "/api/v1/admin/menu-items/1", json!({ "category_id": null })).await;
    assert_accepted(
        "PUT",
        "/api/v1/admin/menu-items/1",
        json!({ "image_url": "/menu-items/1700000001-kunefe.jpg" }),
    )
    .await;
}

#[tokio::test]
async fn business_accepts_blank_optional_contact_fields() {
    let body = json!({
        "phone": "+90 212 555 00 00",
        "email": "",
        "google_maps_url": "",
        "google_place_id": "",
    });
    assert_accepted("PUT", "/api/v1/admin/business", body).await;
    assert_accepted("PUT", "/api/v1/admin/business", json!({ "email": null })).await;
}

#[tokio::test]
async fn review_accepts_blank_or_relative_author_photo() {
    for author_photo in [json!(""), json!("/reviews/1700000000-ayse.jpg")] {
        let body = json!({
            "author_name": "Ayşe",
            "rating": 5,
            "text": "Harika",
            "author_photo": author_photo,
        });
        assert_accepted("POST", "/api/v1/admin/reviews", body).await;
    }
    assert_accepted("PUT", "/api/v1/admin/reviews/3", json!({ "author_photo": "" })).await;
}
