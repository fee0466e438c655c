//! Reviews: public block and admin curation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lokanta_core::error::CoreError;
use lokanta_core::locale::negotiate_locale;
use lokanta_core::media::validate_image_ref;
use lokanta_core::review::{render_reviews, validate_rating, Review};
use lokanta_core::types::DbId;
use lokanta_db::models::review::{CreateReview, UpdateReview};
use lokanta_db::repositories::ReviewRepo;
use validator::Validate;

use super::or_default;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{ReviewParams, VisibilityParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Upper bound for `?limit=` on the public review block.
const MAX_PUBLIC_LIMIT: usize = 50;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Review",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/reviews?locale=&limit=
///
/// Visible reviews, featured first then newest, with the average rating.
pub async fn list_public_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewParams>,
) -> AppResult<impl IntoResponse> {
    let locale = negotiate_locale(params.locale.as_deref(), state.base_locale());
    let limit = params
        .limit
        .unwrap_or(state.config.site.featured_review_limit)
        .min(MAX_PUBLIC_LIMIT);

    let reviews = or_default(state.site.list_reviews(true).await, "reviews");
    let page = render_reviews(reviews, &locale, limit, &state.resolver);

    Ok(Json(DataResponse { data: page }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/reviews?visible_only=
pub async fn list_reviews(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<VisibilityParams>,
) -> AppResult<impl IntoResponse> {
    let reviews: Vec<Review> = ReviewRepo::list(&state.pool, params.visible_only)
        .await?
        .into_iter()
        .map(Review::from)
        .collect();

    Ok(Json(DataResponse { data: reviews }))
}

/// GET /api/v1/admin/reviews/{id}
pub async fn get_review(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ReviewRepo::find_by_id(&state.pool, review_id)
        .await?
        .ok_or_else(|| not_found(review_id))?;

    Ok(Json(DataResponse {
        data: Review::from(row),
    }))
}

/// POST /api/v1/admin/reviews
///
/// Requires original text or at least one translation.
pub async fn create_review(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_rating(input.rating)?;
    if let Some(photo) = &input.author_photo {
        validate_image_ref("author_photo", photo)?;
    }
    if input.text.trim().is_empty() && input.translations.is_blank() {
        return Err(AppError::Core(CoreError::Validation(
            "Review text is required".into(),
        )));
    }

    let review = Review::from(ReviewRepo::create(&state.pool, &input).await?);

    tracing::info!(
        review_id = review.id,
        rating = review.rating,
        admin = %admin.subject,
        "Review created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// PUT /api/v1/admin/reviews/{id}
pub async fn update_review(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }
    if let Some(Some(photo)) = &input.author_photo {
        validate_image_ref("author_photo", photo)?;
    }

    let row = ReviewRepo::update(&state.pool, review_id, &input)
        .await?
        .ok_or_else(|| not_found(review_id))?;

    tracing::info!(review_id, admin = %admin.subject, "Review updated");

    Ok(Json(DataResponse {
        data: Review::from(row),
    }))
}

/// DELETE /api/v1/admin/reviews/{id}
pub async fn delete_review(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ReviewRepo::delete(&state.pool, review_id).await? {
        return Err(not_found(review_id));
    }

    tracing::info!(review_id, admin = %admin.subject, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}
