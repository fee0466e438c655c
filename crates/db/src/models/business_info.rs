//! Business info models and DTOs.
//!
//! The `business_info` table holds a single row with `id = 1`.

use lokanta_core::business::{BusinessInfo, SocialMedia, WorkingHours};
use lokanta_core::locale::LocalizedText;
use lokanta_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use super::clearable_string;

/// The singleton row from the `business_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BusinessInfoRow {
    pub name: Json<LocalizedText>,
    pub address: Json<LocalizedText>,
    pub phone: String,
    pub email: Option<String>,
    pub google_maps_url: Option<String>,
    pub google_place_id: Option<String>,
    pub working_hours: Json<WorkingHours>,
    pub social_media: Option<Json<SocialMedia>>,
    pub updated_at: Timestamp,
}

impl From<BusinessInfoRow> for BusinessInfo {
    fn from(row: BusinessInfoRow) -> Self {
        Self {
            name: row.name.0,
            address: row.address.0,
            phone: row.phone,
            email: row.email,
            google_maps_url: row.google_maps_url,
            google_place_id: row.google_place_id,
            working_hours: row.working_hours.0,
            social_media: row.social_media.map(|s| s.0),
            updated_at: row.updated_at,
        }
    }
}

/// Merge-update payload. Absent fields keep their stored values; present
/// localized maps are overlaid onto the stored ones. The optional contact
/// fields are cleared by `null` or `""`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBusinessInfo {
    pub name: Option<LocalizedText>,
    pub address: Option<LocalizedText>,
    #[validate(length(min = 1, max = 40))]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "clearable_string")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "clearable_string")]
    pub google_maps_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "clearable_string")]
    pub google_place_id: Option<Option<String>>,
    pub working_hours: Option<WorkingHours>,
    pub social_media: Option<SocialMedia>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_contact_fields_clear_and_absent_fields_keep() {
        let input: UpdateBusinessInfo = serde_json::from_value(json!({
            "phone": "+90 212 000 00 00",
            "email": "",
            "google_maps_url": null,
        }))
        .unwrap();
        assert_eq!(input.email, Some(None));
        assert_eq!(input.google_maps_url, Some(None));
        assert_eq!(input.google_place_id, None);
        assert!(input.validate().is_ok());
    }
}
