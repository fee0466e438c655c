//! Locale switcher and language administration.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lokanta_core::error::CoreError;
use lokanta_core::locale::{
    locale_path, native_name, negotiate_locale, switcher_languages, validate_locale_code, Language,
};
use lokanta_core::types::DbId;
use lokanta_db::models::language::{CreateLanguage, UpdateLanguage};
use lokanta_db::repositories::LanguageRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::LocalePathParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/languages
///
/// Enabled languages sorted by code. Falls back to the built-in list when
/// the source fails or nothing is enabled.
pub async fn list_switcher_languages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let fetched = state.menu.list_enabled_languages().await;
    if let Err(e) = &fetched {
        tracing::warn!(error = %e, "Language fetch failed, serving built-in list");
    }

    Ok(Json(DataResponse {
        data: switcher_languages(fetched),
    }))
}

#[derive(Debug, Serialize)]
pub struct LocalePath {
    pub locale: String,
    pub path: String,
}

/// GET /api/v1/locale-path?path=&locale=
///
/// Where the locale switcher navigates: the same page under the chosen
/// locale's prefix. Unsupported locales resolve to the base locale.
pub async fn get_locale_path(
    State(state): State<AppState>,
    Query(params): Query<LocalePathParams>,
) -> AppResult<impl IntoResponse> {
    let base = state.base_locale();
    let locale = negotiate_locale(Some(&params.locale), base);
    let path = locale_path(&params.path, &locale, base);

    Ok(Json(DataResponse {
        data: LocalePath { locale, path },
    }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/languages
///
/// Every language record, enabled or not, ordered by code.
pub async fn list_languages(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let languages: Vec<Language> = LanguageRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(Language::from)
        .collect();

    Ok(Json(DataResponse { data: languages }))
}

/// POST /api/v1/admin/languages
pub async fn create_language(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateLanguage>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_locale_code(&input.code)?;

    let native = input
        .native_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .or_else(|| native_name(&input.code))
        .unwrap_or(input.name.as_str())
        .to_string();

    let language = Language::from(LanguageRepo::create(&state.pool, &input, &native).await?);

    tracing::info!(
        language_id = language.id,
        code = %language.code,
        admin = %admin.subject,
        "Language created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: language })))
}

/// PUT /api/v1/admin/languages/{id}
///
/// Disabling a language hides it from the switcher; stored translations
/// are kept.
pub async fn update_language(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(language_id): Path<DbId>,
    Json(input): Json<UpdateLanguage>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let row = LanguageRepo::update(&state.pool, language_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Language",
            id: language_id,
        }))?;

    tracing::info!(language_id, admin = %admin.subject, "Language updated");

    Ok(Json(DataResponse {
        data: Language::from(row),
    }))
}

/// DELETE /api/v1/admin/languages/{id}
pub async fn delete_language(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(language_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = LanguageRepo::delete(&state.pool, language_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Language",
            id: language_id,
        }));
    }

    tracing::info!(language_id, admin = %admin.subject, "Language deleted");

    Ok(StatusCode::NO_CONTENT)
}
