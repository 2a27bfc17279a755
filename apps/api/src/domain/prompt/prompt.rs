use serde::{Deserialize, Serialize};

use super::placeholders::extract_placeholders;
use super::value_objects::{Category, PromptId};
use crate::i18n::Locale;

/// One display string per supported locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub sk: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(sk: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            sk: sk.into(),
            en: en.into(),
        }
    }

    /// Returns the text for `locale`
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Sk => &self.sk,
            Locale::En => &self.en,
        }
    }
}

/// A curated prompt template
///
/// Immutable once built. The body is English text with `{{ name }}`
/// placeholder markers.
///
/// # Example
/// ```
/// use seo_prompter_api::domain::prompt::{Category, LocalizedText, PromptId, PromptTemplate};
///
/// let template = PromptTemplate::new(
///     PromptId::new(9).unwrap(),
///     "🔎",
///     LocalizedText::new("Sken", "Scan"),
///     LocalizedText::new("pripravené", "ready"),
///     "Audit {{domain}} for {{city}}",
///     Category::New,
/// );
///
/// assert_eq!(template.placeholders(), vec!["domain", "city"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    id: PromptId,
    icon: String,
    title: LocalizedText,
    timestamp_label: LocalizedText,
    body: String,
    category: Category,
}

impl PromptTemplate {
    pub fn new(
        id: PromptId,
        icon: impl Into<String>,
        title: LocalizedText,
        timestamp_label: LocalizedText,
        body: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            icon: icon.into(),
            title,
            timestamp_label,
            body: body.into(),
            category,
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> PromptId {
        self.id
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn title(&self, locale: Locale) -> &str {
        self.title.get(locale)
    }

    pub fn timestamp_label(&self, locale: Locale) -> &str {
        self.timestamp_label.get(locale)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Distinct placeholder names in first-occurrence order
    pub fn placeholders(&self) -> Vec<String> {
        extract_placeholders(&self.body)
    }
}
