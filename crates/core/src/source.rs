//! Content source traits.
//!
//! The public endpoints read menu and site content through these traits so
//! the storage backend can be swapped (PostgreSQL in production, an
//! in-memory fixture in tests).

use async_trait::async_trait;

use crate::business::BusinessInfo;
use crate::error::CoreError;
use crate::locale::Language;
use crate::menu::{Category, MenuItem};
use crate::review::Review;

/// Read access to the menu catalogue.
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// All categories, ordered by their display order.
    async fn list_categories(&self) -> Result<Vec<Category>, CoreError>;

    /// All menu items, newest first. Availability filtering happens at render.
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CoreError>;

    /// Enabled languages, ordered by code.
    async fn list_enabled_languages(&self) -> Result<Vec<Language>, CoreError>;
}

/// Read access to business info and reviews.
#[async_trait]
pub trait SiteSource: Send + Sync {
    /// The singleton business record, if one has been saved.
    async fn business_info(&self) -> Result<Option<BusinessInfo>, CoreError>;

    async fn list_reviews(&self, visible_only: bool) -> Result<Vec<Review>, CoreError>;
}

// ---------------------------------------------------------------------------
// In-memory source
// ---------------------------------------------------------------------------

/// Fixed content held in memory.
///
/// An unavailable source fails every call with [`CoreError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    pub languages: Vec<Language>,
    pub business: Option<BusinessInfo>,
    pub reviews: Vec<Review>,
    unavailable: bool,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_business(mut self, business: BusinessInfo) -> Self {
        self.business = Some(business);
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    fn check(&self) -> Result<(), CoreError> {
        if self.unavailable {
            return Err(CoreError::Unavailable("in-memory source is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MenuSource for InMemorySource {
    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.check()?;
        let mut categories = self.categories.clone();
        categories.sort_by_key(|c| c.order);
        Ok(categories)
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CoreError> {
        self.check()?;
        let mut items = self.items.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn list_enabled_languages(&self) -> Result<Vec<Language>, CoreError> {
        self.check()?;
        let mut languages: Vec<Language> =
            self.languages.iter().filter(|l| l.enabled).cloned().collect();
        languages.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(languages)
    }
}

#[async_trait]
impl SiteSource for InMemorySource {
    async fn business_info(&self) -> Result<Option<BusinessInfo>, CoreError> {
        self.check()?;
        Ok(self.business.clone())
    }

    async fn list_reviews(&self, visible_only: bool) -> Result<Vec<Review>, CoreError> {
        self.check()?;
        Ok(self
            .reviews
            .iter()
            .filter(|r| !visible_only || r.visible)
            .cloned()
            .collect())
    }
}
