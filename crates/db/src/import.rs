//! Import of a legacy content export (categories, menu items, reviews).
//!
//! The export holds flat documents as produced by the previous site
//! (`name`, `nameEn`, `price`, `category`, ...). Records are converted with
//! the `from_legacy` constructors and written through the repositories.
//! Records that cannot be converted are skipped and logged.

use std::collections::HashMap;

use lokanta_core::types::DbId;
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::category::CreateCategory;
use crate::models::menu_item::CreateMenuItem;
use crate::models::review::CreateReview;
use crate::models::LegacyRecord;
use crate::repositories::{CategoryRepo, MenuItemRepo, ReviewRepo};

/// A legacy content export.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyExport {
    #[serde(default)]
    pub categories: Vec<LegacyRecord>,
    #[serde(default)]
    pub menu_items: Vec<LegacyRecord>,
    #[serde(default)]
    pub reviews: Vec<LegacyRecord>,
}

/// Counts of imported and skipped records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: usize,
    pub menu_items: usize,
    pub reviews: usize,
    pub skipped: usize,
}

/// Keys under which legacy menu items may reference a category: its
/// document id and its base-locale name.
pub fn category_keys(record: &LegacyRecord, input: &CreateCategory, base: &str) -> Vec<String> {
    let mut keys = Vec::with_capacity(2);
    match record.get("id") {
        Some(Value::String(id)) if !id.is_empty() => keys.push(id.clone()),
        Some(Value::Number(id)) => keys.push(id.to_string()),
        _ => {}
    }
    if let Some(name) = input.name.get(base) {
        keys.push(name.to_string());
    }
    keys
}

/// Import every record of `export`. Categories go first so menu items can
/// resolve their category reference.
pub async fn import_legacy(
    pool: &PgPool,
    export: &LegacyExport,
    base: &str,
) -> Result<ImportSummary, sqlx::Error> {
    let mut summary = ImportSummary::default();
    let mut categories: HashMap<String, DbId> = HashMap::new();

    for (index, record) in export.categories.iter().enumerate() {
        let Some(input) = CreateCategory::from_legacy(record, base) else {
            tracing::warn!(index, "Skipping legacy category without a base-locale name");
            summary.skipped += 1;
            continue;
        };
        let row = CategoryRepo::create(pool, &input).await?;
        for key in category_keys(record, &input, base) {
            categories.insert(key, row.id);
        }
        summary.categories += 1;
    }

    for (index, record) in export.menu_items.iter().enumerate() {
        let Some(input) = CreateMenuItem::from_legacy(record, base, &categories) else {
            tracing::warn!(index, "Skipping legacy menu item without a name or valid price");
            summary.skipped += 1;
            continue;
        };
        if input.category_id.is_none() && record.contains_key("category") {
            tracing::debug!(index, "Legacy menu item category not found; importing uncategorized");
        }
        MenuItemRepo::create(pool, &input).await?;
        summary.menu_items += 1;
    }

    for (index, record) in export.reviews.iter().enumerate() {
        let Some(input) = CreateReview::from_legacy(record, base) else {
            tracing::warn!(index, "Skipping legacy review without an author, rating or text");
            summary.skipped += 1;
            continue;
        };
        ReviewRepo::create(pool, &input).await?;
        summary.reviews += 1;
    }

    tracing::info!(
        categories = summary.categories,
        menu_items = summary.menu_items,
        reviews = summary.reviews,
        skipped = summary.skipped,
        "Legacy import finished",
    );
    Ok(summary)
}

/// Delete all menu content and reviews ahead of a replacing import.
/// Languages and business info are left alone.
pub async fn clear_content(pool: &PgPool) -> Result<(), sqlx::Error> {
    let items = MenuItemRepo::delete_all(pool).await?;
    let categories = CategoryRepo::delete_all(pool).await?;
    let reviews = ReviewRepo::delete_all(pool).await?;
    tracing::info!(items, categories, reviews, "Cleared existing content");
    Ok(())
}
