//! Localized text catalog
//!
//! Message keys map to one template per supported locale. Lookups are total:
//! a key without a translation in the active locale comes back verbatim.

mod en;
mod sk;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported UI locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Slovak, the default locale
    #[default]
    Sk,
    /// English
    En,
}

impl Locale {
    /// All locales in presentation order
    pub const ALL: [Locale; 2] = [Locale::Sk, Locale::En];

    /// Returns the locale code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Sk => "sk",
            Locale::En => "en",
        }
    }

    /// Parses a locale code, tolerating case and region suffixes (`en-US`)
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next() {
            Some("sk") => Some(Locale::Sk),
            Some("en") => Some(Locale::En),
            _ => None,
        }
    }

    /// Returns the other locale (the language switcher flips between two)
    pub fn toggled(&self) -> Self {
        match self {
            Locale::Sk => Locale::En,
            Locale::En => Locale::Sk,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

type MessageTable = HashMap<&'static str, &'static str>;

static TABLES: OnceLock<HashMap<Locale, MessageTable>> = OnceLock::new();

fn tables() -> &'static HashMap<Locale, MessageTable> {
    TABLES.get_or_init(|| {
        let mut tables = HashMap::new();
        tables.insert(Locale::Sk, sk::MESSAGES.iter().copied().collect());
        tables.insert(Locale::En, en::MESSAGES.iter().copied().collect());
        tables
    })
}

/// Translates message keys for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translates `key`, replacing the first `{name}` occurrence for each
    /// replacement pair
    ///
    /// # Example
    /// ```
    /// use seo_prompter_api::i18n::{Locale, Translator};
    ///
    /// let t = Translator::new(Locale::En);
    /// assert_eq!(t.t("app.promptCount", &[("visible", "2"), ("total", "5")]), "Showing: 2 / 5");
    /// assert_eq!(t.t("no.such.key", &[]), "no.such.key");
    /// ```
    pub fn t(&self, key: &str, replacements: &[(&str, &str)]) -> String {
        let mut translation = tables()
            .get(&self.locale)
            .and_then(|table| table.get(key))
            .map(|text| text.to_string())
            .unwrap_or_else(|| key.to_string());

        for (name, value) in replacements {
            let marker = format!("{{{}}}", name);
            translation = translation.replacen(&marker, value, 1);
        }

        translation
    }

    /// Every message of the active locale, keyed by message key
    pub fn messages(&self) -> HashMap<&'static str, &'static str> {
        tables().get(&self.locale).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_key_per_locale() {
        assert_eq!(
            Translator::new(Locale::En).t("toast.promptCopied", &[]),
            "Prompt copied ✓"
        );
        assert_eq!(
            Translator::new(Locale::Sk).t("toast.promptCopied", &[]),
            "Prompt skopírovaný ✓"
        );
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(Translator::new(Locale::Sk).t("nope", &[("x", "1")]), "nope");
    }

    #[test]
    fn replacement_value_is_not_rescanned() {
        let t = Translator::new(Locale::En);
        assert_eq!(
            t.t("promptCard.variableInputPlaceholder", &[("placeholder", "{placeholder}")]),
            "Enter {placeholder}..."
        );
        assert_eq!(
            t.t("promptCard.variableInputPlaceholder", &[("placeholder", "city")]),
            "Enter city..."
        );
    }

    #[test]
    fn unused_replacement_is_ignored() {
        let t = Translator::new(Locale::En);
        assert_eq!(t.t("app.title", &[("unused", "x")]), "Liquid Glass");
    }

    #[test]
    fn locales_share_the_same_keys() {
        let sk: Vec<_> = {
            let mut keys: Vec<_> = Translator::new(Locale::Sk).messages().into_keys().collect();
            keys.sort();
            keys
        };
        let en: Vec<_> = {
            let mut keys: Vec<_> = Translator::new(Locale::En).messages().into_keys().collect();
            keys.sort();
            keys
        };
        assert_eq!(sk, en);
    }

    #[test]
    fn parse_locale_codes() {
        assert_eq!(Locale::parse("sk"), Some(Locale::Sk));
        assert_eq!(Locale::parse("EN-us"), Some(Locale::En));
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn toggle_flips_between_locales() {
        assert_eq!(Locale::Sk.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled(), Locale::Sk);
        assert_eq!(Locale::default(), Locale::Sk);
    }
}
