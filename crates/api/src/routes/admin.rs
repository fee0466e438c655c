//! Admin routes, mounted at `/admin`. Every handler requires the admin role.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{business, categories, languages, menu_items, reviews};
use crate::state::AppState;

/// ```text
/// GET, POST          /categories        -> list_categories, create_category
/// GET, PUT, DELETE   /categories/{id}   -> get_category, update_category, delete_category
/// GET, POST          /menu-items        -> list_menu_items, create_menu_item
/// GET, PUT, DELETE   /menu-items/{id}   -> get_menu_item, update_menu_item, delete_menu_item
/// GET, POST          /languages         -> list_languages, create_language
/// PUT, DELETE        /languages/{id}    -> update_language, delete_language
/// GET, PUT           /business          -> get_business_admin, update_business
/// GET, POST          /reviews           -> list_reviews, create_review
/// GET, PUT, DELETE   /reviews/{id}      -> get_review, update_review, delete_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/menu-items",
            get(menu_items::list_menu_items).post(menu_items::create_menu_item),
        )
        .route(
            "/menu-items/{id}",
            get(menu_items::get_menu_item)
                .put(menu_items::update_menu_item)
                .delete(menu_items::delete_menu_item),
        )
        .route(
            "/languages",
            get(languages::list_languages).post(languages::create_language),
        )
        .route(
            "/languages/{id}",
            put(languages::update_language).delete(languages::delete_language),
        )
        .route(
            "/business",
            get(business::get_business_admin).put(business::update_business),
        )
        .route(
            "/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/reviews/{id}",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
}
