//! Category administration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lokanta_core::error::CoreError;
use lokanta_core::menu::{validate_base_name, Category};
use lokanta_core::types::DbId;
use lokanta_db::models::category::{CreateCategory, UpdateCategory};
use lokanta_db::repositories::CategoryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/v1/admin/categories
pub async fn list_categories(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories: Vec<Category> = CategoryRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();

    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/admin/categories/{id}
pub async fn get_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or_else(|| not_found(category_id))?;

    Ok(Json(DataResponse {
        data: Category::from(row),
    }))
}

/// POST /api/v1/admin/categories
///
/// The name must carry a value in the base locale.
pub async fn create_category(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_base_name(&input.name, state.base_locale())?;

    let category = Category::from(CategoryRepo::create(&state.pool, &input).await?);

    tracing::info!(category_id = category.id, admin = %admin.subject, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/admin/categories/{id}
///
/// Name entries are merged into the stored map; the merged name must still
/// carry a base-locale value.
pub async fn update_category(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if let Some(name) = &input.name {
        let existing = CategoryRepo::find_by_id(&state.pool, category_id)
            .await?
            .ok_or_else(|| not_found(category_id))?;
        let mut merged = existing.name.0;
        merged.merge(name);
        validate_base_name(&merged, state.base_locale())?;
    }

    let row = CategoryRepo::update(&state.pool, category_id, &input)
        .await?
        .ok_or_else(|| not_found(category_id))?;

    tracing::info!(category_id, admin = %admin.subject, "Category updated");

    Ok(Json(DataResponse {
        data: Category::from(row),
    }))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Items in the category are kept and become uncategorized.
pub async fn delete_category(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CategoryRepo::delete(&state.pool, category_id).await? {
        return Err(not_found(category_id));
    }

    tracing::info!(category_id, admin = %admin.subject, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
