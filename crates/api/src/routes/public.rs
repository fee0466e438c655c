//! Public read-only routes. No authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::{business, languages, menu, reviews};
use crate::state::AppState;

/// ```text
/// GET /menu          -> menu::get_menu
/// GET /languages     -> languages::list_switcher_languages
/// GET /locale-path   -> languages::get_locale_path
/// GET /business      -> business::get_business
/// GET /reviews       -> reviews::list_public_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/menu", get(menu::get_menu))
        .route("/languages", get(languages::list_switcher_languages))
        .route("/locale-path", get(languages::get_locale_path))
        .route("/business", get(business::get_business))
        .route("/reviews", get(reviews::list_public_reviews))
}
