//! Menu item models and DTOs.

use std::collections::{BTreeSet, HashMap};

use lokanta_core::locale::LocalizedText;
use lokanta_core::media::is_image_ref;
use lokanta_core::menu::{validate_price, AllergyTag, MenuItem};
use lokanta_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use super::{blank_as_none, clearable, clearable_string, default_true, LegacyRecord};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `menu_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuItemRow {
    pub id: DbId,
    pub name: Json<LocalizedText>,
    pub description: Json<LocalizedText>,
    pub price: f64,
    pub category_id: Option<DbId>,
    pub image_url: Option<String>,
    pub available: bool,
    pub allergies: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<MenuItemRow> for MenuItem {
    /// Unknown allergy tags in storage are dropped.
    fn from(row: MenuItemRow) -> Self {
        let allergies: BTreeSet<AllergyTag> = row
            .allergies
            .iter()
            .filter_map(|tag| match AllergyTag::from_str(tag) {
                Ok(tag) => Some(tag),
                Err(_) => {
                    tracing::warn!(item_id = row.id, tag = %tag, "Ignoring unknown allergy tag");
                    None
                }
            })
            .collect();

        Self {
            id: row.id,
            name: row.name.0,
            description: row.description.0,
            price: row.price,
            category: row.category_id,
            image_url: row.image_url,
            available: row.available,
            allergies,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMenuItem {
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category_id: Option<DbId>,
    /// Blob store reference; see [`lokanta_core::media::is_image_ref`].
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// DTO for updating a menu item. Localized maps are merged into the stored
/// values. `category_id` and `image_url` are cleared by `null` (or `""`)
/// and left alone when absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMenuItem {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "clearable")]
    pub category_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "clearable_string")]
    pub image_url: Option<Option<String>>,
    pub available: Option<bool>,
    pub allergies: Option<Vec<String>>,
}

impl CreateMenuItem {
    /// Build a create DTO from a flat legacy record (`name`, `nameTr`,
    /// `descriptionEn`, `price`, `category`, ...).
    ///
    /// `categories` maps legacy category references (document ids or base
    /// names) to imported ids; an unknown reference leaves the item
    /// uncategorized. Unknown allergy tags and unusable image references are
    /// dropped. Returns `None` when the record has no base-locale name or no
    /// valid price.
    pub fn from_legacy(
        record: &LegacyRecord,
        base: &str,
        categories: &HashMap<String, DbId>,
    ) -> Option<Self> {
        let price = record.get("price").and_then(Value::as_f64)?;
        if validate_price(price).is_err() {
            return None;
        }
        let name = LocalizedText::from_legacy_fields("name", record, base);
        name.get(base)?;

        let category_id = record.get("category").and_then(|value| match value {
            Value::String(key) => categories.get(key).copied(),
            Value::Number(n) => categories.get(&n.to_string()).copied(),
            _ => None,
        });

        Some(Self {
            name,
            description: LocalizedText::from_legacy_fields("description", record, base),
            price,
            category_id,
            image_url: record
                .get("imageUrl")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|url| is_image_ref(url))
                .map(str::to_string),
            available: record
                .get("available")
                .and_then(Value::as_bool)
                .unwrap_or(true),
            allergies: record
                .get("allergies")
                .and_then(Value::as_array)
                .map(|tags| {
                    tags.iter()
                        .filter_map(Value::as_str)
                        .filter_map(|tag| AllergyTag::from_str(tag).ok())
                        .map(|tag| tag.as_str().to_string())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}
