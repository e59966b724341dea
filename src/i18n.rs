//! Locale store.
//!
//! Holds the current language code and two flat key→string maps: the
//! active dictionary and the English fallback. Lookup order is
//! current → fallback → raw key. Dictionary fetching is the data
//! source's job; the store only swaps maps that were already loaded.

use std::collections::HashMap;

pub type Dictionary = HashMap<String, String>;

pub const DEFAULT_LOCALE: &str = "en";

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    pub code: &'static str,
    pub native_name: &'static str,
}

pub const SUPPORTED_LOCALES: [LocaleInfo; 3] = [
    LocaleInfo { code: "en", native_name: "English" },
    LocaleInfo { code: "fr", native_name: "Français" },
    LocaleInfo { code: "zh", native_name: "中文" },
];

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LOCALES.iter().any(|locale| locale.code == code)
}

/// Maps an environment locale value (`fr_FR.UTF-8`, `zh-Hans`, ...)
/// to a supported code, defaulting to English.
pub fn match_locale_tag(tag: &str) -> &'static str {
    let tag = tag.trim().to_lowercase();
    SUPPORTED_LOCALES
        .iter()
        .find(|locale| tag.starts_with(locale.code))
        .map(|locale| locale.code)
        .unwrap_or(DEFAULT_LOCALE)
}

/// Detects the preferred locale from `LC_ALL` / `LANG`, the terminal
/// counterpart of the browser language.
pub fn detect_locale() -> &'static str {
    for var in ["LC_ALL", "LANG"] {
        if let Ok(value) = std::env::var(var)
            && !value.is_empty()
        {
            return match_locale_tag(&value);
        }
    }
    DEFAULT_LOCALE
}

pub struct LocaleStore {
    current: String,
    active: Dictionary,
    fallback: Dictionary,
}

impl LocaleStore {
    /// Builds a store around already-fetched dictionaries. `fallback`
    /// is the English map and stays empty when `code` is English
    /// itself.
    pub fn new(code: &str, active: Dictionary, fallback: Dictionary) -> Self {
        Self {
            current: code.to_string(),
            active,
            fallback,
        }
    }

    /// An empty store; every lookup echoes its key. Used while the
    /// startup error view is showing.
    pub fn empty() -> Self {
        Self::new(DEFAULT_LOCALE, Dictionary::new(), Dictionary::new())
    }

    pub fn locale(&self) -> &str {
        &self.current
    }

    /// Resolves a key: active dictionary, then English fallback, then
    /// the key itself. Empty strings count as missing so a blank
    /// translation cannot mask the fallback.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.active
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .unwrap_or(key)
    }

    /// Swaps in freshly fetched dictionaries for a new locale.
    pub fn replace(&mut self, code: &str, active: Dictionary, fallback: Dictionary) {
        self.current = code.to_string();
        self.active = active;
        self.fallback = fallback;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&str, &str)]) -> Dictionary {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn lookup_prefers_active_dictionary() {
        let store = LocaleStore::new(
            "fr",
            dict(&[("site.title", "Atelier Vitrine")]),
            dict(&[("site.title", "Vitrine Workshop")]),
        );
        assert_eq!(store.t("site.title"), "Atelier Vitrine");
    }

    #[test]
    fn lookup_falls_back_to_english() {
        let store = LocaleStore::new("fr", dict(&[]), dict(&[("nav.contact", "Contact")]));
        assert_eq!(store.t("nav.contact"), "Contact");
    }

    #[test]
    fn missing_key_resolves_to_itself() {
        let store = LocaleStore::new("fr", dict(&[]), dict(&[]));
        assert_eq!(store.t("missing.key"), "missing.key");
    }

    #[test]
    fn blank_translation_does_not_mask_fallback() {
        let store = LocaleStore::new(
            "fr",
            dict(&[("button.viewAll", "")]),
            dict(&[("button.viewAll", "View all")]),
        );
        assert_eq!(store.t("button.viewAll"), "View all");
    }

    #[test]
    fn locale_tags_map_to_supported_codes() {
        assert_eq!(match_locale_tag("fr_FR.UTF-8"), "fr");
        assert_eq!(match_locale_tag("zh-Hans-CN"), "zh");
        assert_eq!(match_locale_tag("en_US"), "en");
        assert_eq!(match_locale_tag("de_DE"), "en");
        assert_eq!(match_locale_tag(""), "en");
    }

    #[test]
    fn supported_set_is_closed() {
        assert!(is_supported("en"));
        assert!(is_supported("fr"));
        assert!(is_supported("zh"));
        assert!(!is_supported("de"));
        assert!(!is_supported(""));
    }
}
