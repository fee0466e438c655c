//! Language enablement models and DTOs.

use lokanta_core::locale::Language;
use lokanta_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::default_true;

/// A row from the `languages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LanguageRow {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<LanguageRow> for Language {
    fn from(row: LanguageRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            name: row.name,
            native_name: row.native_name,
            enabled: row.enabled,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLanguage {
    #[validate(length(min = 2, max = 5))]
    pub code: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Defaults to the built-in native name for `code`.
    #[validate(length(max = 100))]
    pub native_name: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLanguage {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub native_name: Option<String>,
    pub enabled: Option<bool>,
}
