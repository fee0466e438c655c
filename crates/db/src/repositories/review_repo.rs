//! Repository for the `reviews` table.

use lokanta_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::review::{CreateReview, ReviewRow, UpdateReview};

/// Column list for `reviews` queries.
const COLUMNS: &str = "\
    id, author_name, author_photo, rating, text, translations, visible, \
    featured, created_at, updated_at";

/// Provides CRUD operations for customer reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Reviews ordered featured first, then newest first.
    pub async fn list(pool: &PgPool, visible_only: bool) -> Result<Vec<ReviewRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews \
             WHERE visible OR NOT $1 \
             ORDER BY featured DESC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ReviewRow>(&query)
            .bind(visible_only)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ReviewRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<ReviewRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews \
                 (author_name, author_photo, rating, text, translations, visible, featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReviewRow>(&query)
            .bind(&input.author_name)
            .bind(input.author_photo.as_deref())
            .bind(input.rating)
            .bind(&input.text)
            .bind(Json(&input.translations))
            .bind(input.visible)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no review with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<ReviewRow>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET \
                 author_name = COALESCE($2, author_name), \
                 author_photo = CASE WHEN $3 THEN $4 ELSE author_photo END, \
                 rating = COALESCE($5, rating), \
                 text = COALESCE($6, text), \
                 translations = translations || COALESCE($7, '{{}}'::jsonb), \
                 visible = COALESCE($8, visible), \
                 featured = COALESCE($9, featured), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReviewRow>(&query)
            .bind(id)
            .bind(input.author_name.as_deref())
            .bind(input.author_photo.is_some())
            .bind(input.author_photo.as_ref().and_then(|v| v.as_deref()))
            .bind(input.rating)
            .bind(input.text.as_deref())
            .bind(input.translations.as_ref().map(Json))
            .bind(input.visible)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete every review. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Returns `true` if a review was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
