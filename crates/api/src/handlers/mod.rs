//! Request handlers, grouped by resource.
//!
//! Public handlers read through the content sources on [`AppState`] and
//! degrade to empty results when a source fails. Admin handlers go straight
//! to the repositories and surface typed errors.
//!
//! [`AppState`]: crate::state::AppState

pub mod business;
pub mod categories;
pub mod languages;
pub mod menu;
pub mod menu_items;
pub mod reviews;

use lokanta_core::error::CoreError;

/// Unwrap a public content fetch, logging and substituting the default value
/// on failure.
pub(crate) fn or_default<T: Default>(result: Result<T, CoreError>, what: &'static str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, what, "Content fetch failed, serving empty result");
            T::default()
        }
    }
}
