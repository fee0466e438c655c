//! HTTP-level tests for the public read endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, category, get, item, language, review};
use lokanta_core::business::{BusinessInfo, DayHours, WorkingHours};
use lokanta_core::locale::LocalizedText;
use lokanta_core::source::InMemorySource;

fn menu_source() -> InMemorySource {
    let mut hidden = item(4, Some(1), "Tükendi", 50.0);
    hidden.available = false;

    InMemorySource::new()
        .with_categories(vec![
            category(1, 2, "Tatlılar", "Desserts"),
            category(2, 1, "Çorbalar", "Soups"),
            category(3, 3, "İçecekler", "Drinks"),
        ])
        .with_items(vec![
            item(1, Some(1), "Baklava", 180.0),
            item(2, Some(2), "Mercimek", 120.0),
            item(3, Some(99), "Günün yemeği", 250.0),
            hidden,
        ])
}

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

#[tokio::test]
async fn menu_groups_by_category_order_with_uncategorized_last() {
    let app = common::build_test_app(menu_source());
    let response = get(app, "/api/v1/menu?locale=en").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let page = &json["data"];
    assert_eq!(page["locale"], "en");
    assert_eq!(page["currency"], "TL");

    let sections = page["sections"].as_array().unwrap();
    let anchors: Vec<&str> = sections.iter().map(|s| s["anchor"].as_str().unwrap()).collect();
    assert_eq!(anchors, vec!["category-2", "category-1", "other"]);
    assert_eq!(sections[0]["title"], "Soups");
    assert!(sections[2]["title"].is_null());
    assert_eq!(sections[2]["section"]["kind"], "uncategorized");

    // Unavailable items never render.
    assert_eq!(sections[1]["items"].as_array().unwrap().len(), 1);

    // No chip for the empty drinks category.
    let chips: Vec<&str> = page["chips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(chips, vec!["Soups", "Desserts"]);
}

#[tokio::test]
async fn menu_falls_back_to_base_locale_for_missing_translations() {
    let app = common::build_test_app(menu_source());
    let json = body_json(get(app, "/api/v1/menu?locale=de").await).await;

    let page = &json["data"];
    assert_eq!(page["locale"], "de");
    assert_eq!(page["sections"][0]["title"], "Çorbalar");
    assert_eq!(page["sections"][0]["items"][0]["name"], "Mercimek");
    assert_eq!(page["sections"][0]["items"][0]["price_label"], "120");
}

#[tokio::test]
async fn unsupported_locale_renders_in_base_locale() {
    let app = common::build_test_app(menu_source());
    let json = body_json(get(app, "/api/v1/menu?locale=xx").await).await;
    assert_eq!(json["data"]["locale"], "tr");
}

#[tokio::test]
async fn failing_source_yields_empty_menu_not_error() {
    let app = common::build_test_app(InMemorySource::unavailable());
    let response = get(app, "/api/v1/menu").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["sections"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["chips"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn switcher_lists_enabled_languages_by_code() {
    let source = InMemorySource::new().with_languages(vec![
        language(1, "tr", true),
        language(2, "de", false),
        language(3, "en", true),
    ]);
    let app = common::build_test_app(source);
    let json = body_json(get(app, "/api/v1/languages").await).await;

    let codes: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["en", "tr"]);
    assert_eq!(json["data"][1]["native_name"], "Türkçe");
}

#[tokio::test]
async fn switcher_falls_back_to_builtin_list_on_failure() {
    let app = common::build_test_app(InMemorySource::unavailable());
    let response = get(app, "/api/v1/languages").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 75);
}

#[tokio::test]
async fn locale_path_prefixes_as_needed() {
    let app = common::build_test_app(InMemorySource::new());
    let json = body_json(get(app.clone(), "/api/v1/locale-path?path=/menu&locale=en").await).await;
    assert_eq!(json["data"]["path"], "/en/menu");

    let json = body_json(get(app.clone(), "/api/v1/locale-path?path=/en/menu&locale=tr").await).await;
    assert_eq!(json["data"]["path"], "/menu");

    let json = body_json(get(app, "/api/v1/locale-path?path=/&locale=de").await).await;
    assert_eq!(json["data"]["path"], "/de");
}

// ---------------------------------------------------------------------------
// Business info
// ---------------------------------------------------------------------------

#[tokio::test]
async fn business_info_is_localized() {
    let info = BusinessInfo {
        name: LocalizedText::new().with("tr", "Lokanta"),
        address: LocalizedText::new()
            .with("tr", "Moda Cd. No:1, Kadıköy")
            .with("en", "1 Moda St, Kadikoy"),
        phone: "+90 216 000 00 00".into(),
        email: Some("info@lokanta.com".into()),
        google_maps_url: None,
        google_place_id: None,
        working_hours: WorkingHours {
            monday: Some(DayHours::new("09:00", "23:00")),
            ..WorkingHours::default()
        },
        social_media: None,
        updated_at: chrono::Utc::now(),
    };
    let app = common::build_test_app(InMemorySource::new().with_business(info));
    let json = body_json(get(app, "/api/v1/business?locale=en").await).await;

    let data = &json["data"];
    assert_eq!(data["name"], "Lokanta");
    assert_eq!(data["address"], "1 Moda St, Kadikoy");
    assert_eq!(data["hours"][0]["day"], "monday");
    assert_eq!(data["hours"][0]["open"], "09:00");
    assert_eq!(data["hours"][1]["closed"], true);
}

#[tokio::test]
async fn missing_business_info_is_null() {
    let app = common::build_test_app(InMemorySource::unavailable());
    let response = get(app, "/api/v1/business").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].is_null());
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reviews_are_featured_first_with_average() {
    let mut hidden = review(5, 1, true, "Kötü");
    hidden.visible = false;
    let mut translated = review(3, 4, false, "Çok güzel");
    translated.translations = LocalizedText::new().with("en", "Very nice");

    let source = InMemorySource::new().with_reviews(vec![
        review(1, 5, false, "Harika"),
        review(2, 5, true, "Mükemmel"),
        translated,
        hidden,
    ]);
    let app = common::build_test_app(source);
    let json = body_json(get(app, "/api/v1/reviews?locale=de&limit=2").await).await;

    let data = &json["data"];
    assert_eq!(data["total"], 3);
    assert_eq!(data["average_rating"], 4.7);

    let listed = data["reviews"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], 2);
    assert_eq!(listed[1]["id"], 3);
    assert_eq!(listed[1]["text"], "Very nice");
}
