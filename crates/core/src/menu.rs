//! Menu domain types, grouping, and the public menu page model.
//!
//! The public page shows available items grouped under their category,
//! categories in ascending `order`, and a trailing "uncategorized" group for
//! items whose category is empty or no longer exists. Each group carries an
//! anchor id the scroll-synchronized selector uses to find it in the layout.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::locale::{FieldGroup, Localized, LocaleResolver, LocalizedText};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Anchors
// ---------------------------------------------------------------------------

/// Anchor id of the element wrapping the whole menu.
pub const MENU_ANCHOR: &str = "menu";

/// Anchor id of the trailing uncategorized group.
pub const UNCATEGORIZED_ANCHOR: &str = "other";

/// Prefix of per-category group anchors (`category-{id}`).
pub const CATEGORY_ANCHOR_PREFIX: &str = "category-";

// ---------------------------------------------------------------------------
// Allergy tags
// ---------------------------------------------------------------------------

/// Dietary and allergen markers attached to a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllergyTag {
    Gluten,
    Dairy,
    Nuts,
    Eggs,
    Fish,
    Shellfish,
    Soy,
    Sesame,
    Vegetarian,
    Vegan,
}

impl AllergyTag {
    pub const ALL: [AllergyTag; 10] = [
        Self::Gluten,
        Self::Dairy,
        Self::Nuts,
        Self::Eggs,
        Self::Fish,
        Self::Shellfish,
        Self::Soy,
        Self::Sesame,
        Self::Vegetarian,
        Self::Vegan,
    ];

    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gluten => "gluten",
            Self::Dairy => "dairy",
            Self::Nuts => "nuts",
            Self::Eggs => "eggs",
            Self::Fish => "fish",
            Self::Shellfish => "shellfish",
            Self::Soy => "soy",
            Self::Sesame => "sesame",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        }
    }

    /// Parse from a string, returning an error for unknown tags.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(AllergyTag::as_str).collect();
                CoreError::Validation(format!(
                    "Unknown allergy tag: '{s}'. Valid tags: {}",
                    valid.join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: DbId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub price: f64,
    /// Referenced category; may be empty or dangling.
    pub category: Option<DbId>,
    pub image_url: Option<String>,
    pub available: bool,
    pub allergies: BTreeSet<AllergyTag>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Localized for MenuItem {
    fn localized(&self, group: FieldGroup) -> Option<&LocalizedText> {
        match group {
            FieldGroup::Name => Some(&self.name),
            FieldGroup::Description => Some(&self.description),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: LocalizedText,
    pub order: i32,
    pub icon: Option<String>,
    pub created_at: Timestamp,
}

impl Localized for Category {
    fn localized(&self, group: FieldGroup) -> Option<&LocalizedText> {
        match group {
            FieldGroup::Name => Some(&self.name),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Identifies one rendered group of the menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SectionId {
    Category(DbId),
    Uncategorized,
}

impl SectionId {
    /// Anchor id of the group element.
    pub fn anchor(&self) -> String {
        match self {
            Self::Category(id) => format!("{CATEGORY_ANCHOR_PREFIX}{id}"),
            Self::Uncategorized => UNCATEGORIZED_ANCHOR.to_string(),
        }
    }
}

/// Available items of one section, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup<'a> {
    pub section: SectionId,
    pub category: Option<&'a Category>,
    pub items: Vec<&'a MenuItem>,
}

/// Categories by ascending `order`; equal orders keep their input order.
pub fn sort_categories(categories: &[Category]) -> Vec<&Category> {
    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by_key(|c| c.order);
    sorted
}

/// Group available items by category.
///
/// Categories without any available item are omitted. Items whose category
/// is empty or unknown land in a trailing [`SectionId::Uncategorized`] group.
pub fn group_menu<'a>(categories: &'a [Category], items: &'a [MenuItem]) -> Vec<MenuGroup<'a>> {
    let available: Vec<&MenuItem> = items.iter().filter(|item| item.available).collect();
    let known: HashSet<DbId> = categories.iter().map(|c| c.id).collect();

    let mut groups: Vec<MenuGroup<'a>> = sort_categories(categories)
        .into_iter()
        .filter_map(|category| {
            let members: Vec<&MenuItem> = available
                .iter()
                .copied()
                .filter(|item| item.category == Some(category.id))
                .collect();
            (!members.is_empty()).then(|| MenuGroup {
                section: SectionId::Category(category.id),
                category: Some(category),
                items: members,
            })
        })
        .collect();

    let orphans: Vec<&MenuItem> = available
        .iter()
        .copied()
        .filter(|item| item.category.map_or(true, |id| !known.contains(&id)))
        .collect();
    if !orphans.is_empty() {
        groups.push(MenuGroup {
            section: SectionId::Uncategorized,
            category: None,
            items: orphans,
        });
    }

    groups
}

// ---------------------------------------------------------------------------
// Page model
// ---------------------------------------------------------------------------

/// Whole-unit price label (`100`).
pub fn format_price(price: f64) -> String {
    format!("{price:.0}")
}

/// One item as shown on the public menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuCardView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_label: String,
    pub image_url: Option<String>,
    pub allergies: Vec<AllergyTag>,
}

/// One rendered group with its anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSectionView {
    pub section: SectionId,
    pub anchor: String,
    /// Heading; `None` for the uncategorized group.
    pub title: Option<String>,
    pub items: Vec<MenuCardView>,
}

/// A chip of the category picker strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChipView {
    pub id: DbId,
    pub label: String,
    pub anchor: String,
}

/// Everything the public menu page renders for one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuPage {
    pub locale: String,
    pub currency: String,
    pub chips: Vec<CategoryChipView>,
    pub sections: Vec<MenuSectionView>,
}

impl MenuPage {
    /// True when there is nothing to list; the page shows its empty state.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in render order, as registered with the scroll selector.
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.section).collect()
    }
}

/// Build the public menu page for `locale`.
///
/// Chips are offered only for categories that render a section.
pub fn render_menu(
    categories: &[Category],
    items: &[MenuItem],
    locale: &str,
    currency: &str,
    resolver: &LocaleResolver,
) -> MenuPage {
    let groups = group_menu(categories, items);

    let chips = groups
        .iter()
        .filter_map(|group| group.category)
        .map(|category| CategoryChipView {
            id: category.id,
            label: resolver.resolve(category, FieldGroup::Name, locale),
            anchor: SectionId::Category(category.id).anchor(),
        })
        .collect();

    let sections = groups
        .into_iter()
        .map(|group| MenuSectionView {
            section: group.section,
            anchor: group.section.anchor(),
            title: group
                .category
                .map(|category| resolver.resolve(category, FieldGroup::Name, locale)),
            items: group
                .items
                .into_iter()
                .map(|item| MenuCardView {
                    id: item.id,
                    name: resolver.resolve(item, FieldGroup::Name, locale),
                    description: resolver.resolve(item, FieldGroup::Description, locale),
                    price: item.price,
                    price_label: format_price(item.price),
                    image_url: item.image_url.clone(),
                    allergies: item.allergies.iter().copied().collect(),
                })
                .collect(),
        })
        .collect();

    MenuPage {
        locale: locale.to_string(),
        currency: currency.to_string(),
        chips,
        sections,
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a price is finite and non-negative.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(format!(
            "Price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

/// Validate that a localized name carries a value in the base locale.
pub fn validate_base_name(name: &LocalizedText, base: &str) -> Result<(), CoreError> {
    if name.get(base).is_none() {
        return Err(CoreError::Validation(format!(
            "Name is required in the base language '{base}'"
        )));
    }
    Ok(())
}

/// Parse a list of allergy tag strings into a set, rejecting unknown tags.
pub fn parse_allergies(tags: &[String]) -> Result<BTreeSet<AllergyTag>, CoreError> {
    tags.iter().map(|t| AllergyTag::from_str(t)).collect()
}
