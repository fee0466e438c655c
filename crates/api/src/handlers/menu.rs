//! Public menu page.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use lokanta_core::locale::negotiate_locale;
use lokanta_core::menu::render_menu;

use super::or_default;
use crate::error::AppResult;
use crate::query::LocaleParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/menu?locale=
///
/// Categories and items are fetched concurrently. A failed fetch counts as
/// an empty list, so the page renders its empty state instead of an error.
pub async fn get_menu(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let locale = negotiate_locale(params.locale.as_deref(), state.base_locale());

    let (categories, items) = tokio::join!(
        state.menu.list_categories(),
        state.menu.list_menu_items(),
    );
    let categories = or_default(categories, "categories");
    let items = or_default(items, "menu items");

    let page = render_menu(
        &categories,
        &items,
        &locale,
        &state.config.site.currency,
        &state.resolver,
    );

    tracing::debug!(
        locale = %locale,
        sections = page.sections.len(),
        chips = page.chips.len(),
        "Rendered menu page",
    );

    Ok(Json(DataResponse { data: page }))
}
