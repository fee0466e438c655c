//! Database-backed content source.

use async_trait::async_trait;
use lokanta_core::business::BusinessInfo;
use lokanta_core::error::CoreError;
use lokanta_core::locale::Language;
use lokanta_core::menu::{Category, MenuItem};
use lokanta_core::review::Review;
use lokanta_core::source::{MenuSource, SiteSource};

use crate::repositories::{BusinessInfoRepo, CategoryRepo, LanguageRepo, MenuItemRepo, ReviewRepo};
use crate::DbPool;

/// Reads menu and site content from PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgContentSource {
    pool: DbPool,
}

impl PgContentSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Any database failure surfaces as an unavailable source.
fn unavailable(what: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::warn!(error = %err, what, "Content query failed");
        CoreError::Unavailable(format!("failed to load {what}"))
    }
}

#[async_trait]
impl MenuSource for PgContentSource {
    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        let rows = CategoryRepo::list(&self.pool)
            .await
            .map_err(unavailable("categories"))?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CoreError> {
        let rows = MenuItemRepo::list(&self.pool)
            .await
            .map_err(unavailable("menu items"))?;
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn list_enabled_languages(&self) -> Result<Vec<Language>, CoreError> {
        let rows = LanguageRepo::list_enabled(&self.pool)
            .await
            .map_err(unavailable("languages"))?;
        Ok(rows.into_iter().map(Language::from).collect())
    }
}

#[async_trait]
impl SiteSource for PgContentSource {
    async fn business_info(&self) -> Result<Option<BusinessInfo>, CoreError> {
        let row = BusinessInfoRepo::get(&self.pool)
            .await
            .map_err(unavailable("business info"))?;
        Ok(row.map(BusinessInfo::from))
    }

    async fn list_reviews(&self, visible_only: bool) -> Result<Vec<Review>, CoreError> {
        let rows = ReviewRepo::list(&self.pool, visible_only)
            .await
            .map_err(unavailable("reviews"))?;
        Ok(rows.into_iter().map(Review::from).collect())
    }
}
