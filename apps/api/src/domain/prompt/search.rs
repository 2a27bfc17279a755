use super::catalog::PromptCatalog;
use super::prompt::PromptTemplate;
use crate::i18n::Locale;

/// Returns the templates whose localized title or body contains `query`
///
/// Matching is a case-insensitive substring test; catalog order is kept.
/// An empty query returns the whole catalog.
///
/// # Example
/// ```
/// use seo_prompter_api::domain::prompt::{filter_prompts, PromptCatalog};
/// use seo_prompter_api::i18n::Locale;
///
/// let catalog = PromptCatalog::builtin();
/// let hits = filter_prompts(&catalog, Locale::En, "rank math");
/// assert_eq!(hits.len(), 1);
/// ```
pub fn filter_prompts<'a>(
    catalog: &'a PromptCatalog,
    locale: Locale,
    query: &str,
) -> Vec<&'a PromptTemplate> {
    if query.is_empty() {
        return catalog.prompts().iter().collect();
    }

    let needle = query.to_lowercase();
    catalog
        .prompts()
        .iter()
        .filter(|prompt| {
            prompt.title(locale).to_lowercase().contains(&needle)
                || prompt.body().to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(prompts: &[&PromptTemplate]) -> Vec<u32> {
        prompts.iter().map(|p| p.id().value()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let catalog = PromptCatalog::builtin();
        assert_eq!(
            ids(&filter_prompts(&catalog, Locale::Sk, "")),
            vec![1, 2, 3, 4, 5],
        );
    }

    #[test]
    fn title_match_uses_active_locale() {
        let catalog = PromptCatalog::builtin();
        assert_eq!(
            ids(&filter_prompts(&catalog, Locale::Sk, "nastavenia")),
            vec![2],
        );
        assert!(filter_prompts(&catalog, Locale::En, "nastavenia").is_empty());
    }

    #[test]
    fn body_match_is_case_insensitive() {
        let catalog = PromptCatalog::builtin();
        assert_eq!(
            ids(&filter_prompts(&catalog, Locale::En, "LIGHTHOUSE")),
            vec![4],
        );
    }

    #[test]
    fn matches_keep_catalog_order() {
        let catalog = PromptCatalog::builtin();
        assert_eq!(
            ids(&filter_prompts(&catalog, Locale::En, "{{brand}}")),
            vec![2, 5],
        );
    }

    #[test]
    fn no_match_yields_empty() {
        let catalog = PromptCatalog::builtin();
        assert!(filter_prompts(&catalog, Locale::En, "zzz-no-such-text").is_empty());
    }
}
