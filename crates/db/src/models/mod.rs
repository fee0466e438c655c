//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` row struct matching the database table
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - A conversion from the row into the matching `lokanta_core` type
//!
//! Admin forms submit `""` for empty optional inputs. Create DTOs read a
//! blank string as absent. Update DTOs model clearable columns as
//! `Option<Option<T>>`: an absent field keeps the stored value, while `null`
//! or `""` clears it.

pub mod business_info;
pub mod category;
pub mod language;
pub mod menu_item;
pub mod review;

use serde::{Deserialize, Deserializer};

/// A flat document from the legacy store (`name`, `nameEn`, `price`, ...).
pub type LegacyRecord = serde_json::Map<String, serde_json::Value>;

/// Serde default for boolean flags that start out enabled.
pub(crate) fn default_true() -> bool {
    true
}

/// Optional string where a blank value counts as absent.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

/// Clearable string column of an update DTO. Pair with `#[serde(default)]`.
pub(crate) fn clearable_string<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    blank_as_none(deserializer).map(Some)
}

/// Clearable non-string column of an update DTO. Pair with `#[serde(default)]`.
pub(crate) fn clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
