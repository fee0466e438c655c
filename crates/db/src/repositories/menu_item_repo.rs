//! Repository for the `menu_items` table.

use lokanta_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::menu_item::{CreateMenuItem, MenuItemRow, UpdateMenuItem};

/// Column list for `menu_items` queries.
const COLUMNS: &str = "\
    id, name, description, price, category_id, image_url, available, \
    allergies, created_at, updated_at";

/// Provides CRUD operations for menu items.
pub struct MenuItemRepo;

impl MenuItemRepo {
    /// All menu items, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MenuItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, MenuItemRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MenuItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items WHERE id = $1");
        sqlx::query_as::<_, MenuItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a menu item. `allergies` is expected in canonical form.
    pub async fn create(pool: &PgPool, input: &CreateMenuItem) -> Result<MenuItemRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_items \
                 (name, description, price, category_id, image_url, available, allergies) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItemRow>(&query)
            .bind(Json(&input.name))
            .bind(Json(&input.description))
            .bind(input.price)
            .bind(input.category_id)
            .bind(input.image_url.as_deref())
            .bind(input.available)
            .bind(&input.allergies)
            .fetch_one(pool)
            .await
    }

    /// Partially update a menu item. Present localized maps are overlaid onto
    /// the stored ones; `allergies` replaces the stored set when present.
    /// `category_id` and `image_url` use `Option<Option<_>>` so they can be
    /// cleared.
    ///
    /// Returns `None` if no item with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMenuItem,
    ) -> Result<Option<MenuItemRow>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_items SET \
                 name = name || COALESCE($2, '{{}}'::jsonb), \
                 description = description || COALESCE($3, '{{}}'::jsonb), \
                 price = COALESCE($4, price), \
                 category_id = CASE WHEN $5 THEN $6 ELSE category_id END, \
                 image_url = CASE WHEN $7 THEN $8 ELSE image_url END, \
                 available = COALESCE($9, available), \
                 allergies = COALESCE($10, allergies), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItemRow>(&query)
            .bind(id)
            .bind(input.name.as_ref().map(Json))
            .bind(input.description.as_ref().map(Json))
            .bind(input.price)
            .bind(input.category_id.is_some())
            .bind(input.category_id.flatten())
            .bind(input.image_url.is_some())
            .bind(input.image_url.as_ref().and_then(|v| v.as_deref()))
            .bind(input.available)
            .bind(input.allergies.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete every menu item. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_items").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Returns `true` if an item was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
