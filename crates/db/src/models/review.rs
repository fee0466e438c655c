//! Review models and DTOs.

use lokanta_core::locale::LocalizedText;
use lokanta_core::media::is_image_ref;
use lokanta_core::review::{validate_rating, Review};
use lokanta_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use super::{blank_as_none, clearable_string, default_true, LegacyRecord};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewRow {
    pub id: DbId,
    pub author_name: String,
    pub author_photo: Option<String>,
    pub rating: i16,
    pub text: String,
    pub translations: Json<LocalizedText>,
    pub visible: bool,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            author_name: row.author_name,
            author_photo: row.author_photo,
            rating: row.rating,
            text: row.text,
            translations: row.translations.0,
            visible: row.visible,
            featured: row.featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    #[validate(length(min = 1, max = 120))]
    pub author_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub author_photo: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub translations: LocalizedText,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReview {
    #[validate(length(min = 1, max = 120))]
    pub author_name: Option<String>,
    /// `null` or `""` removes the photo.
    #[serde(default, deserialize_with = "clearable_string")]
    pub author_photo: Option<Option<String>>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i16>,
    pub text: Option<String>,
    pub translations: Option<LocalizedText>,
    pub visible: Option<bool>,
    pub featured: Option<bool>,
}

impl CreateReview {
    /// Build a create DTO from a flat legacy record (`authorName`, `rating`,
    /// `text`, `textTr`, `textEn`, ...). The bare `text` is the original
    /// wording; `text{Code}` keys become translations.
    ///
    /// Returns `None` without an author, a rating in range, or any text.
    pub fn from_legacy(record: &LegacyRecord, base: &str) -> Option<Self> {
        let author_name = record
            .get("authorName")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())?
            .to_string();
        let rating = i16::try_from(record.get("rating").and_then(Value::as_i64)?).ok()?;
        validate_rating(rating).ok()?;

        let text = record
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string();
        let mut translated = record.clone();
        translated.remove("text");
        let translations = LocalizedText::from_legacy_fields("text", &translated, base);
        if text.is_empty() && translations.is_blank() {
            return None;
        }

        Some(Self {
            author_name,
            author_photo: record
                .get("authorPhoto")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|photo| is_image_ref(photo))
                .map(str::to_string),
            rating,
            text,
            translations,
            visible: record.get("visible").and_then(Value::as_bool).unwrap_or(true),
            featured: record.get("featured").and_then(Value::as_bool).unwrap_or(false),
        })
    }
}
