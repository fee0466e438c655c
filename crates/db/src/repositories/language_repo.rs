//! Repository for the `languages` table.

use lokanta_core::types::DbId;
use sqlx::PgPool;

use crate::models::language::{CreateLanguage, LanguageRow, UpdateLanguage};

/// Column list for `languages` queries.
const COLUMNS: &str = "id, code, name, native_name, enabled, created_at, updated_at";

/// Provides CRUD operations for switcher languages.
pub struct LanguageRepo;

impl LanguageRepo {
    /// All languages, ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<LanguageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM languages ORDER BY code");
        sqlx::query_as::<_, LanguageRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Enabled languages, ordered by code.
    pub async fn list_enabled(pool: &PgPool) -> Result<Vec<LanguageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM languages WHERE enabled ORDER BY code");
        sqlx::query_as::<_, LanguageRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LanguageRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM languages WHERE id = $1");
        sqlx::query_as::<_, LanguageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a language. A duplicate code violates `uq_languages_code`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLanguage,
        native_name: &str,
    ) -> Result<LanguageRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO languages (code, name, native_name, enabled) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LanguageRow>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(native_name)
            .bind(input.enabled)
            .fetch_one(pool)
            .await
    }

    /// Returns `None` if no language with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLanguage,
    ) -> Result<Option<LanguageRow>, sqlx::Error> {
        let query = format!(
            "UPDATE languages SET \
                 name = COALESCE($2, name), \
                 native_name = COALESCE($3, native_name), \
                 enabled = COALESCE($4, enabled), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LanguageRow>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.native_name.as_deref())
            .bind(input.enabled)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a language was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
