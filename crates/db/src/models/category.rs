//! Menu category models and DTOs.

use lokanta_core::locale::LocalizedText;
use lokanta_core::menu::Category;
use lokanta_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use super::{blank_as_none, LegacyRecord};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryRow {
    pub id: DbId,
    pub name: Json<LocalizedText>,
    pub sort_order: i32,
    pub icon: Option<String>,
    pub created_at: Timestamp,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name.0,
            order: row.sort_order,
            icon: row.icon,
            created_at: row.created_at,
        }
    }
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    pub name: LocalizedText,
    #[serde(default)]
    pub order: i32,
    #[validate(length(max = 64))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub icon: Option<String>,
}

impl CreateCategory {
    /// Build a create DTO from a flat legacy record (`name`, `nameEn`,
    /// `order`, `icon`). Returns `None` without a base-locale name.
    pub fn from_legacy(record: &LegacyRecord, base: &str) -> Option<Self> {
        let name = LocalizedText::from_legacy_fields("name", record, base);
        name.get(base)?;

        Some(Self {
            name,
            order: record
                .get("order")
                .and_then(Value::as_i64)
                .and_then(|order| i32::try_from(order).ok())
                .unwrap_or_default(),
            icon: record
                .get("icon")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|icon| !icon.is_empty())
                .map(str::to_string),
        })
    }
}

/// DTO for updating a category. Present name entries are merged into the
/// stored map.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategory {
    pub name: Option<LocalizedText>,
    pub order: Option<i32>,
    #[validate(length(max = 64))]
    pub icon: Option<String>,
}
