//! Customer reviews: ordering, text resolution and the public summary.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::locale::{LocaleResolver, LocalizedText};
use crate::types::{DbId, Timestamp};

/// Number of reviews shown on the home page by default.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: DbId,
    pub author_name: String,
    pub author_photo: Option<String>,
    pub rating: i16,
    /// Text as the author wrote it.
    pub text: String,
    pub translations: LocalizedText,
    pub visible: bool,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Review {
    /// Text for `locale`: the requested translation, then the secondary
    /// locale, then the original.
    pub fn text_for<'a>(&'a self, locale: &str, resolver: &LocaleResolver) -> &'a str {
        self.translations
            .get(locale)
            .or_else(|| self.translations.get(resolver.secondary()))
            .unwrap_or(self.text.as_str())
    }
}

/// Sort featured reviews first, newest first within each group.
pub fn sort_reviews(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Mean rating rounded to one decimal, or `None` when there are no reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: f64 = reviews.iter().map(|r| f64::from(r.rating)).sum();
    let mean = total / reviews.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub id: DbId,
    pub author_name: String,
    pub author_photo: Option<String>,
    pub rating: i16,
    pub text: String,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// The public review block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewsPage {
    pub locale: String,
    pub average_rating: Option<f64>,
    pub total: usize,
    pub reviews: Vec<ReviewView>,
}

/// Build the public review block from visible reviews.
///
/// The average and total cover every visible review; only the first `limit`
/// are listed.
pub fn render_reviews(
    mut reviews: Vec<Review>,
    locale: &str,
    limit: usize,
    resolver: &LocaleResolver,
) -> ReviewsPage {
    reviews.retain(|r| r.visible);
    sort_reviews(&mut reviews);

    ReviewsPage {
        locale: locale.to_string(),
        average_rating: average_rating(&reviews),
        total: reviews.len(),
        reviews: reviews
            .iter()
            .take(limit)
            .map(|r| ReviewView {
                id: r.id,
                author_name: r.author_name.clone(),
                author_photo: r.author_photo.clone(),
                rating: r.rating,
                text: r.text_for(locale, resolver).to_string(),
                featured: r.featured,
                created_at: r.created_at,
            })
            .collect(),
    }
}

pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}
