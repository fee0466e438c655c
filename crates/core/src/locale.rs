//! Locale handling and localized field resolution.
//!
//! Every translatable field (menu item names, category names, business
//! address, review text, ...) is stored as a [`LocalizedText`]: an explicit
//! map from locale code to value. [`LocaleResolver`] picks the single value
//! to display for a requested locale using a fixed fallback chain:
//!
//! ```text
//! requested -> base -> secondary -> placeholder
//! ```
//!
//! Records written before the map representation existed used flat keys
//! (`name`, `nameTr`, `nameEn`, ...). [`LocalizedText::from_legacy_fields`]
//! folds those into the map so only one storage form is ever resolved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Canonical base locale for this deployment. Its value is mandatory at
/// data-entry time.
pub const BASE_LOCALE: &str = "tr";

/// Lingua-franca fallback used after the base locale.
pub const SECONDARY_LOCALE: &str = "en";

/// Displayed when no name is available in any fallback locale.
pub const NAME_PLACEHOLDER: &str = "Untitled";

/// Every locale the public site can be rendered in, with its native name.
///
/// Also serves as the static language list when the language enablement
/// source is unavailable.
pub const SUPPORTED_LOCALES: &[(&str, &str)] = &[
    ("tr", "Türkçe"),
    ("en", "English"),
    ("de", "Deutsch"),
    ("fr", "Français"),
    ("es", "Español"),
    ("it", "Italiano"),
    ("pt", "Português"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("ru", "Русский"),
    ("uk", "Українська"),
    ("ro", "Română"),
    ("cs", "Čeština"),
    ("hu", "Magyar"),
    ("sv", "Svenska"),
    ("no", "Norsk"),
    ("da", "Dansk"),
    ("fi", "Suomi"),
    ("el", "Ελληνικά"),
    ("bg", "Български"),
    ("hr", "Hrvatski"),
    ("sk", "Slovenčina"),
    ("sl", "Slovenščina"),
    ("sr", "Српски"),
    ("mk", "Македонски"),
    ("sq", "Shqip"),
    ("lv", "Latviešu"),
    ("lt", "Lietuvių"),
    ("et", "Eesti"),
    ("is", "Íslenska"),
    ("ga", "Gaeilge"),
    ("mt", "Malti"),
    ("eu", "Euskara"),
    ("ca", "Català"),
    ("zh", "中文"),
    ("zh-TW", "繁體中文"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("hi", "हिन्दी"),
    ("th", "ไทย"),
    ("vi", "Tiếng Việt"),
    ("id", "Bahasa Indonesia"),
    ("ms", "Bahasa Melayu"),
    ("tl", "Filipino"),
    ("my", "မြန်မာ"),
    ("km", "ខ្មែរ"),
    ("lo", "ລາວ"),
    ("bn", "বাংলা"),
    ("ta", "தமிழ்"),
    ("te", "తెలుగు"),
    ("mr", "मराठी"),
    ("gu", "ગુજરાતી"),
    ("pa", "ਪੰਜਾਬੀ"),
    ("ur", "اردو"),
    ("fa", "فارسی"),
    ("ps", "پښتو"),
    ("uz", "O'zbek"),
    ("kk", "Қазақ"),
    ("ky", "Кыргызча"),
    ("mn", "Монгол"),
    ("ne", "नेपाली"),
    ("si", "සිංහල"),
    ("ar", "العربية"),
    ("he", "עברית"),
    ("sw", "Kiswahili"),
    ("am", "አማርኛ"),
    ("zu", "isiZulu"),
    ("af", "Afrikaans"),
    ("yo", "Yorùbá"),
    ("ig", "Igbo"),
    ("ha", "Hausa"),
    ("es-MX", "Español (México)"),
    ("pt-BR", "Português (Brasil)"),
    ("fr-CA", "Français (Canada)"),
    ("mi", "Te Reo Māori"),
];

// ---------------------------------------------------------------------------
// Locale codes
// ---------------------------------------------------------------------------

/// Whether `code` is one of [`SUPPORTED_LOCALES`].
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LOCALES.iter().any(|(c, _)| *c == code)
}

/// Native display name for a supported locale.
pub fn native_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LOCALES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Pick the locale to render: the requested one when supported, otherwise
/// `default`.
pub fn negotiate_locale(requested: Option<&str>, default: &str) -> String {
    match requested.map(str::trim) {
        Some(code) if is_supported(code) => code.to_string(),
        _ => default.to_string(),
    }
}

/// Upper-case the first character of a locale code, leaving the rest as-is.
///
/// `en` -> `En`, `zh-TW` -> `Zh-TW`. Region suffixes are not special-cased.
pub fn capitalize_locale(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Legacy flat key for a field in a locale (`name` + `en` -> `nameEn`).
pub fn legacy_field_key(field: &str, code: &str) -> String {
    format!("{field}{}", capitalize_locale(code))
}

/// Validate a locale code shape: `xx` or `xx-YY`.
pub fn validate_locale_code(code: &str) -> Result<(), CoreError> {
    let bytes = code.as_bytes();
    let primary_ok = |b: &[u8]| b.len() == 2 && b.iter().all(u8::is_ascii_lowercase);
    let valid = match bytes.len() {
        2 => primary_ok(bytes),
        5 => {
            primary_ok(&bytes[..2])
                && bytes[2] == b'-'
                && bytes[3..].iter().all(u8::is_ascii_uppercase)
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid language code '{code}'. Expected 'xx' or 'xx-YY'"
        )))
    }
}

/// Rewrite a site path so it points at the same page in `locale`.
///
/// Paths are prefixed "as needed": the base locale has no prefix, every
/// other locale gets `/{code}`. An existing locale prefix is replaced.
pub fn locale_path(path: &str, locale: &str, base: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    let rest = match trimmed.split_once('/') {
        Some((first, rest)) if is_supported(first) => rest,
        None if is_supported(trimmed) => "",
        _ => trimmed,
    };

    match (locale == base, rest.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{rest}"),
        (false, true) => format!("/{locale}"),
        (false, false) => format!("/{locale}/{rest}"),
    }
}

// ---------------------------------------------------------------------------
// LocalizedText
// ---------------------------------------------------------------------------

/// Per-locale values of one translatable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

/// Whitespace-only values count as missing.
fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, code: &str, value: impl Into<String>) -> Self {
        self.set(code, value);
        self
    }

    pub fn set(&mut self, code: &str, value: impl Into<String>) {
        self.0.insert(code.to_string(), value.into());
    }

    /// The value for `code`, if present and not blank.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0
            .get(code)
            .map(String::as_str)
            .filter(|value| present(value))
    }

    /// Whether no locale carries a non-blank value.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|value| !present(value))
    }

    /// Locale codes that carry a non-blank value.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, value)| present(value))
            .map(|(code, _)| code.as_str())
    }

    /// Overlay every entry of `other` onto `self`.
    pub fn merge(&mut self, other: &LocalizedText) {
        for (code, value) in &other.0 {
            self.0.insert(code.clone(), value.clone());
        }
    }

    /// Decode a flat legacy record (`name`, `nameTr`, `nameEn`, ...).
    ///
    /// Every key of the form `{field}{Code}` for a supported locale becomes an
    /// entry. The bare `{field}` key fills the base locale only when
    /// `{field}{Base}` is absent or blank.
    pub fn from_legacy_fields(
        field: &str,
        record: &serde_json::Map<String, serde_json::Value>,
        base: &str,
    ) -> Self {
        let mut text = Self::new();

        for (code, _) in SUPPORTED_LOCALES {
            let key = legacy_field_key(field, code);
            if let Some(value) = record.get(&key).and_then(serde_json::Value::as_str) {
                text.set(code, value);
            }
        }

        if text.get(base).is_none() {
            if let Some(bare) = record.get(field).and_then(serde_json::Value::as_str) {
                text.set(base, bare);
            }
        }

        text
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Which translatable field of an entity to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Name,
    Description,
    Address,
    Text,
}

impl FieldGroup {
    /// Legacy flat key prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Address => "address",
            Self::Text => "text",
        }
    }

    /// Value returned when every fallback misses.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => NAME_PLACEHOLDER,
            Self::Description | Self::Address | Self::Text => "",
        }
    }
}

/// An entity exposing translatable fields.
pub trait Localized {
    /// The localized values of `group`, or `None` if the entity has no such
    /// field.
    fn localized(&self, group: FieldGroup) -> Option<&LocalizedText>;
}

/// Resolves localized fields against a fixed base and secondary locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResolver {
    base: String,
    secondary: String,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(BASE_LOCALE, SECONDARY_LOCALE)
    }
}

impl LocaleResolver {
    pub fn new(base: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            secondary: secondary.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Locales tried, in order, for `requested`. Duplicates are removed.
    pub fn fallback_chain<'a>(&'a self, requested: &'a str) -> Vec<&'a str> {
        let mut chain = Vec::with_capacity(3);
        for code in [requested, self.base.as_str(), self.secondary.as_str()] {
            if !chain.contains(&code) {
                chain.push(code);
            }
        }
        chain
    }

    /// First non-blank value along the fallback chain, if any.
    pub fn lookup<'t>(&self, text: &'t LocalizedText, requested: &str) -> Option<&'t str> {
        self.fallback_chain(requested)
            .into_iter()
            .find_map(|code| text.get(code))
    }

    /// Resolve `text` for `requested`, falling back to the group placeholder.
    pub fn resolve_text(&self, text: &LocalizedText, requested: &str, group: FieldGroup) -> String {
        self.lookup(text, requested)
            .unwrap_or(group.placeholder())
            .to_string()
    }

    /// Resolve a field group of `entity` for `requested`.
    pub fn resolve<E: Localized + ?Sized>(
        &self,
        entity: &E,
        group: FieldGroup,
        requested: &str,
    ) -> String {
        match entity.localized(group) {
            Some(text) => self.resolve_text(text, requested, group),
            None => group.placeholder().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

/// A language enablement record managed from the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One entry of the public locale switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: String,
    pub native_name: String,
}

/// Static switcher list built from [`SUPPORTED_LOCALES`].
pub fn builtin_language_options() -> Vec<LanguageOption> {
    SUPPORTED_LOCALES
        .iter()
        .map(|(code, name)| LanguageOption {
            code: (*code).to_string(),
            native_name: (*name).to_string(),
        })
        .collect()
}

/// Languages offered by the locale switcher.
///
/// Enabled languages sorted by code; the static list when the source failed
/// or returned nothing.
pub fn switcher_languages(fetched: Result<Vec<Language>, CoreError>) -> Vec<LanguageOption> {
    let mut languages: Vec<Language> = match fetched {
        Ok(languages) => languages.into_iter().filter(|l| l.enabled).collect(),
        Err(_) => Vec::new(),
    };

    if languages.is_empty() {
        return builtin_language_options();
    }

    languages.sort_by(|a, b| a.code.cmp(&b.code));
    languages
        .into_iter()
        .map(|l| LanguageOption {
            native_name: if l.native_name.trim().is_empty() {
                native_name(&l.code).unwrap_or(l.code.as_str()).to_string()
            } else {
                l.native_name
            },
            code: l.code,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    struct Item {
        name: LocalizedText,
    }

    impl Localized for Item {
        fn localized(&self, group: FieldGroup) -> Option<&LocalizedText> {
            match group {
                FieldGroup::Name => Some(&self.name),
                _ => None,
            }
        }
    }

    fn language(code: &str, enabled: bool) -> Language {
        Language {
            id: 1,
            code: code.to_string(),
            name: code.to_string(),
            native_name: String::new(),
            enabled,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn capitalizes_first_character_only() {
        assert_eq!(capitalize_locale("en"), "En");
        assert_eq!(capitalize_locale("zh-TW"), "Zh-TW");
        assert_eq!(capitalize_locale(""), "");
        assert_eq!(legacy_field_key("description", "de"), "descriptionDe");
    }

    #[test]
    fn requested_locale_wins_when_present() {
        let resolver = LocaleResolver::default();
        let text = LocalizedText::new().with("tr", "Çay").with("en", "Tea");
        assert_eq!(resolver.resolve_text(&text, "en", FieldGroup::Name), "Tea");
        assert_eq!(resolver.resolve_text(&text, "tr", FieldGroup::Name), "Çay");
    }

    #[test]
    fn missing_locale_falls_back_to_base_then_secondary() {
        let resolver = LocaleResolver::default();
        let base_only = LocalizedText::new().with("tr", "Simit");
        assert_eq!(resolver.resolve_text(&base_only, "de", FieldGroup::Name), "Simit");

        let secondary_only = LocalizedText::new().with("en", "Bagel");
        assert_eq!(resolver.resolve_text(&secondary_only, "de", FieldGroup::Name), "Bagel");
        assert_eq!(resolver.resolve_text(&secondary_only, "tr", FieldGroup::Name), "Bagel");
    }

    #[test]
    fn base_value_converges_for_every_locale() {
        let resolver = LocaleResolver::default();
        let text = LocalizedText::new().with("tr", "Menemen");
        for (code, _) in SUPPORTED_LOCALES {
            assert_eq!(resolver.resolve_text(&text, code, FieldGroup::Name), "Menemen");
        }
    }

    #[test]
    fn blank_values_fall_through() {
        let resolver = LocaleResolver::default();
        let text = LocalizedText::new()
            .with("tr", "Simit")
            .with("en", "")
            .with("de", "   ");
        assert_eq!(resolver.resolve_text(&text, "en", FieldGroup::Name), "Simit");
        assert_eq!(resolver.resolve_text(&text, "de", FieldGroup::Name), "Simit");
    }

    #[test]
    fn placeholders_depend_on_field_group() {
        let resolver = LocaleResolver::default();
        let empty = LocalizedText::new();
        assert_eq!(resolver.resolve_text(&empty, "en", FieldGroup::Name), "Untitled");
        assert_eq!(resolver.resolve_text(&empty, "en", FieldGroup::Description), "");

        let item = Item { name: empty };
        assert_eq!(resolver.resolve(&item, FieldGroup::Description, "fr"), "");
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = LocaleResolver::default();
        let item = Item {
            name: LocalizedText::new().with("fr", "Thé").with("en", "Tea"),
        };
        let first = resolver.resolve(&item, FieldGroup::Name, "ja");
        let second = resolver.resolve(&item, FieldGroup::Name, "ja");
        assert_eq!(first, second);
        assert_eq!(first, "Tea");
    }

    #[test]
    fn fallback_chain_deduplicates() {
        let resolver = LocaleResolver::default();
        assert_eq!(resolver.fallback_chain("tr"), vec!["tr", "en"]);
        assert_eq!(resolver.fallback_chain("en"), vec!["en", "tr"]);
        assert_eq!(resolver.fallback_chain("de"), vec!["de", "tr", "en"]);
    }

    #[test]
    fn legacy_record_folds_bare_field_into_base() {
        let record = serde_json::json!({
            "name": "Simit",
            "nameEn": "",
            "nameDe": "Sesamring",
        });
        let text = LocalizedText::from_legacy_fields("name", record.as_object().unwrap(), "tr");
        assert_eq!(text.get("tr"), Some("Simit"));
        assert_eq!(text.get("en"), None);
        assert_eq!(text.get("de"), Some("Sesamring"));

        let resolver = LocaleResolver::default();
        assert_eq!(resolver.resolve_text(&text, "en", FieldGroup::Name), "Simit");
    }

    #[test]
    fn legacy_explicit_base_beats_bare_field() {
        let record = serde_json::json!({ "name": "Eski", "nameTr": "Yeni" });
        let text = LocalizedText::from_legacy_fields("name", record.as_object().unwrap(), "tr");
        assert_eq!(text.get("tr"), Some("Yeni"));
    }

    #[test]
    fn legacy_region_codes_are_used_as_is() {
        let record = serde_json::json!({ "nameZh-TW": "烤餅" });
        let text = LocalizedText::from_legacy_fields("name", record.as_object().unwrap(), "tr");
        assert_eq!(text.get("zh-TW"), Some("烤餅"));
        assert_eq!(text.get("zh"), None);
    }

    #[test]
    fn negotiates_unsupported_locales_to_default() {
        assert_eq!(negotiate_locale(Some("en"), "tr"), "en");
        assert_eq!(negotiate_locale(Some("pt-BR"), "tr"), "pt-BR");
        assert_eq!(negotiate_locale(Some("xx"), "tr"), "tr");
        assert_eq!(negotiate_locale(None, "tr"), "tr");
    }

    #[test]
    fn locale_codes_are_validated() {
        assert!(validate_locale_code("en").is_ok());
        assert!(validate_locale_code("zh-TW").is_ok());
        assert_matches!(validate_locale_code("EN"), Err(CoreError::Validation(_)));
        assert_matches!(validate_locale_code("eng"), Err(CoreError::Validation(_)));
        assert_matches!(validate_locale_code("zh_TW"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn locale_paths_are_prefixed_as_needed() {
        assert_eq!(locale_path("/menu", "en", "tr"), "/en/menu");
        assert_eq!(locale_path("/en/menu", "tr", "tr"), "/menu");
        assert_eq!(locale_path("/en/menu", "de", "tr"), "/de/menu");
        assert_eq!(locale_path("/en", "tr", "tr"), "/");
        assert_eq!(locale_path("/", "fr", "tr"), "/fr");
    }

    #[test]
    fn switcher_uses_enabled_languages_sorted() {
        let options = switcher_languages(Ok(vec![
            language("tr", true),
            language("de", false),
            language("en", true),
        ]));
        let codes: Vec<_> = options.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "tr"]);
        assert_eq!(options[1].native_name, "Türkçe");
    }

    #[test]
    fn switcher_falls_back_to_static_list() {
        let options = switcher_languages(Err(CoreError::Unavailable("offline".into())));
        assert_eq!(options.len(), SUPPORTED_LOCALES.len());
        assert_eq!(options[0].code, "tr");

        let options = switcher_languages(Ok(Vec::new()));
        assert_eq!(options.len(), SUPPORTED_LOCALES.len());
    }
}
