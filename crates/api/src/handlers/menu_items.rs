//! Menu item administration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lokanta_core::error::CoreError;
use lokanta_core::media::validate_image_ref;
use lokanta_core::menu::{parse_allergies, validate_base_name, validate_price, MenuItem};
use lokanta_core::types::DbId;
use lokanta_db::models::menu_item::{CreateMenuItem, UpdateMenuItem};
use lokanta_db::repositories::MenuItemRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MenuItem",
        id,
    })
}

/// Validate allergy tags and rewrite them in canonical form.
fn canonical_allergies(tags: &[String]) -> Result<Vec<String>, CoreError> {
    Ok(parse_allergies(tags)?
        .into_iter()
        .map(|tag| tag.as_str().to_string())
        .collect())
}

/// GET /api/v1/admin/menu-items
///
/// Every item, available or not, newest first.
pub async fn list_menu_items(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items: Vec<MenuItem> = MenuItemRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(MenuItem::from)
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/admin/menu-items/{id}
pub async fn get_menu_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = MenuItemRepo::find_by_id(&state.pool, item_id)
        .await?
        .ok_or_else(|| not_found(item_id))?;

    Ok(Json(DataResponse {
        data: MenuItem::from(row),
    }))
}

/// POST /api/v1/admin/menu-items
///
/// A `category_id` that does not exist is rejected with 400.
pub async fn create_menu_item(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(mut input): Json<CreateMenuItem>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_base_name(&input.name, state.base_locale())?;
    validate_price(input.price)?;
    if let Some(url) = &input.image_url {
        validate_image_ref("image_url", url)?;
    }
    input.allergies = canonical_allergies(&input.allergies)?;

    let item = MenuItem::from(MenuItemRepo::create(&state.pool, &input).await?);

    tracing::info!(
        item_id = item.id,
        category_id = ?item.category,
        admin = %admin.subject,
        "Menu item created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/admin/menu-items/{id}
///
/// `category_id` or `image_url` set to `null` (or `""`) clears the field.
pub async fn update_menu_item(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(mut input): Json<UpdateMenuItem>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(price) = input.price {
        validate_price(price)?;
    }
    if let Some(Some(url)) = &input.image_url {
        validate_image_ref("image_url", url)?;
    }
    if let Some(tags) = input.allergies.take() {
        input.allergies = Some(canonical_allergies(&tags)?);
    }

    if let Some(name) = &input.name {
        let existing = MenuItemRepo::find_by_id(&state.pool, item_id)
            .await?
            .ok_or_else(|| not_found(item_id))?;
        let mut merged = existing.name.0;
        merged.merge(name);
        validate_base_name(&merged, state.base_locale())?;
    }

    let row = MenuItemRepo::update(&state.pool, item_id, &input)
        .await?
        .ok_or_else(|| not_found(item_id))?;

    tracing::info!(item_id, admin = %admin.subject, "Menu item updated");

    Ok(Json(DataResponse {
        data: MenuItem::from(row),
    }))
}

/// DELETE /api/v1/admin/menu-items/{id}
pub async fn delete_menu_item(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !MenuItemRepo::delete(&state.pool, item_id).await? {
        return Err(not_found(item_id));
    }

    tracing::info!(item_id, admin = %admin.subject, "Menu item deleted");

    Ok(StatusCode::NO_CONTENT)
}
