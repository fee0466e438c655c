use lokanta_core::locale::{
    is_supported, validate_locale_code, LocaleResolver, BASE_LOCALE, SECONDARY_LOCALE,
};
use lokanta_core::review::DEFAULT_FEATURED_LIMIT;

use crate::auth::jwt::JwtConfig;

/// Default currency label printed next to menu prices.
const DEFAULT_CURRENCY: &str = "TL";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal
    /// (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT validation settings.
    pub jwt: JwtConfig,
    /// Locale and presentation settings for the public site.
    pub site: SiteConfig,
}

/// Locale and presentation settings for the public site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Locale every translatable field must carry (default: `tr`).
    pub base_locale: String,
    /// Second fallback after the base locale (default: `en`).
    pub secondary_locale: String,
    /// Currency label for menu prices (default: `TL`).
    pub currency: String,
    /// Reviews listed on the home page (default: `6`).
    pub featured_review_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_locale: BASE_LOCALE.to_string(),
            secondary_locale: SECONDARY_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            featured_review_limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

impl SiteConfig {
    /// Resolver built from the configured base and secondary locales.
    pub fn resolver(&self) -> LocaleResolver {
        LocaleResolver::new(&self.base_locale, &self.secondary_locale)
    }

    /// Load site settings from environment variables with defaults.
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `BASE_LOCALE`           | `tr`    |
    /// | `SECONDARY_LOCALE`      | `en`    |
    /// | `MENU_CURRENCY`         | `TL`    |
    /// | `FEATURED_REVIEW_LIMIT` | `6`     |
    ///
    /// # Panics
    ///
    /// Panics if either locale is malformed or not a supported locale.
    pub fn from_env() -> Self {
        let base_locale = locale_var("BASE_LOCALE", BASE_LOCALE);
        let secondary_locale = locale_var("SECONDARY_LOCALE", SECONDARY_LOCALE);

        let currency = std::env::var("MENU_CURRENCY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.into());

        let featured_review_limit: usize = std::env::var("FEATURED_REVIEW_LIMIT")
            .unwrap_or_else(|_| DEFAULT_FEATURED_LIMIT.to_string())
            .parse()
            .expect("FEATURED_REVIEW_LIMIT must be a valid usize");

        Self {
            base_locale,
            secondary_locale,
            currency,
            featured_review_limit,
        }
    }
}

fn locale_var(name: &str, default: &str) -> String {
    let code = std::env::var(name).unwrap_or_else(|_| default.into());
    if let Err(e) = validate_locale_code(&code) {
        panic!("{name}: {e}");
    }
    assert!(is_supported(&code), "{name} '{code}' is not a supported locale");
    code
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    ///
    /// JWT and site settings are read by [`JwtConfig::from_env`] and
    /// [`SiteConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
            site: SiteConfig::from_env(),
        }
    }
}
