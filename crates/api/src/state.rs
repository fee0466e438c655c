use std::sync::Arc;

use lokanta_core::locale::LocaleResolver;
use lokanta_core::source::{MenuSource, SiteSource};
use lokanta_db::source::PgContentSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by admin handlers.
    pub pool: lokanta_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Read side of the menu, used by public handlers.
    pub menu: Arc<dyn MenuSource>,
    /// Read side of business info and reviews, used by public handlers.
    pub site: Arc<dyn SiteSource>,
    pub resolver: LocaleResolver,
}

impl AppState {
    /// State whose public content comes from the database behind `pool`.
    pub fn new(pool: lokanta_db::DbPool, config: ServerConfig) -> Self {
        let source = Arc::new(PgContentSource::new(pool.clone()));
        Self::with_sources(pool, config, source.clone(), source)
    }

    /// State with explicit content sources.
    pub fn with_sources(
        pool: lokanta_db::DbPool,
        config: ServerConfig,
        menu: Arc<dyn MenuSource>,
        site: Arc<dyn SiteSource>,
    ) -> Self {
        let resolver = config.site.resolver();
        Self {
            pool,
            config: Arc::new(config),
            menu,
            site,
            resolver,
        }
    }

    pub fn base_locale(&self) -> &str {
        self.resolver.base()
    }
}
