//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?locale=` on public read endpoints. Unsupported or missing locales fall
/// back to the base locale.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<String>,
}

/// `?locale=&limit=` for the public review block.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewParams {
    pub locale: Option<String>,
    pub limit: Option<usize>,
}

/// `?path=&locale=` for locale switch navigation.
#[derive(Debug, Deserialize)]
pub struct LocalePathParams {
    pub path: String,
    pub locale: String,
}

/// `?visible_only=` on the admin review list.
#[derive(Debug, Default, Deserialize)]
pub struct VisibilityParams {
    #[serde(default)]
    pub visible_only: bool,
}
