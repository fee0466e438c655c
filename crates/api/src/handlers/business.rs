//! Business info: public view and admin merge-update.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use lokanta_core::business::{render_business, validate_contact, validate_working_hours, BusinessInfo};
use lokanta_core::error::CoreError;
use lokanta_core::locale::negotiate_locale;
use lokanta_core::media::validate_web_link;
use lokanta_core::menu::validate_base_name;
use lokanta_db::models::business_info::{BusinessInfoRow, UpdateBusinessInfo};
use lokanta_db::repositories::BusinessInfoRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::query::LocaleParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/business?locale=
///
/// `data` is `null` when no record exists or the source failed.
pub async fn get_business(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let locale = negotiate_locale(params.locale.as_deref(), state.base_locale());

    let info = match state.site.business_info().await {
        Ok(info) => info,
        Err(e) => {
            tracing::warn!(error = %e, "Business info fetch failed");
            None
        }
    };

    let view = info
        .as_ref()
        .map(|info| render_business(info, &locale, &state.resolver));

    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/admin/business
///
/// The raw record with every stored translation.
pub async fn get_business_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let info = BusinessInfoRepo::get(&state.pool)
        .await?
        .map(BusinessInfo::from);

    Ok(Json(DataResponse { data: info }))
}

/// PUT /api/v1/admin/business
///
/// Merges the payload into the stored record (created on first save). The
/// merged record must carry a base-locale name and a phone number; it is
/// checked inside the merge transaction and rolled back if it does not.
pub async fn update_business(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateBusinessInfo>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(hours) = &input.working_hours {
        validate_working_hours(hours)?;
    }
    if let Some(Some(url)) = &input.google_maps_url {
        validate_web_link("google_maps_url", url)?;
    }

    let base = state.base_locale();
    let check = |merged: &BusinessInfoRow| -> Result<(), CoreError> {
        validate_base_name(&merged.name.0, base)?;
        validate_contact(&merged.phone, merged.email.as_deref())
    };
    let row = BusinessInfoRepo::merge(&state.pool, &input, check).await??;
    let info = BusinessInfo::from(row);

    tracing::info!(admin = %admin.subject, "Business info updated");

    Ok(Json(DataResponse { data: info }))
}
