pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /menu?locale=                         grouped, localized menu page
/// /languages                            locale switcher entries
/// /locale-path?path=&locale=            locale switch navigation target
/// /business?locale=                     business info and weekly hours
/// /reviews?locale=&limit=               visible reviews with average
///
/// /admin/categories                     list, create (admin only)
/// /admin/categories/{id}                get, update, delete
/// /admin/menu-items                     list, create
/// /admin/menu-items/{id}                get, update, delete
/// /admin/languages                      list, create
/// /admin/languages/{id}                 update, delete
/// /admin/business                       get, merge-update
/// /admin/reviews                        list, create
/// /admin/reviews/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}
