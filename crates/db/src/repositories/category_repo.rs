//! Repository for the `categories` table.

use lokanta_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::category::{CategoryRow, CreateCategory, UpdateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, sort_order, icon, created_at";

/// Provides CRUD operations for menu categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories in display order. Ties keep insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY sort_order, id");
        sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<CategoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, sort_order, icon) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(Json(&input.name))
            .bind(input.order)
            .bind(input.icon.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Partially update a category. A present `name` map is overlaid onto the
    /// stored one.
    ///
    /// Returns `None` if no category with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<CategoryRow>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET \
                 name = name || COALESCE($2, '{{}}'::jsonb), \
                 sort_order = COALESCE($3, sort_order), \
                 icon = COALESCE($4, icon) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .bind(input.name.as_ref().map(Json))
            .bind(input.order)
            .bind(input.icon.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Items referencing it become uncategorized.
    ///
    /// Delete every category. Items left behind become uncategorized.
    /// Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Returns `true` if a category was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
