// Placeholder extraction and substitution for `{{ name }}` markers

use regex::{Captures, Regex};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

static MARKER_RE: OnceLock<Regex> = OnceLock::new();

fn marker_regex() -> &'static Regex {
    MARKER_RE.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Returns the distinct placeholder names of `body` in first-occurrence order
///
/// # Example
/// ```
/// use seo_prompter_api::domain::prompt::placeholders::extract_placeholders;
///
/// let names = extract_placeholders("Hi {{name}}, welcome to {{ name }} in {{city}}");
/// assert_eq!(names, vec!["name", "city"]);
/// ```
pub fn extract_placeholders(body: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in marker_regex().captures_iter(body) {
        let name = &caps[1];
        if !names.iter().any(|known| known == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Substitutes every marker whose value is present and non-empty
///
/// Markers without a usable value are left exactly as written. Substituted
/// values are not scanned again.
pub fn resolve(body: &str, values: &HashMap<String, String>) -> String {
    marker_regex()
        .replace_all(body, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// True iff `text` still contains at least one marker
pub fn has_unresolved(text: &str) -> bool {
    marker_regex().is_match(text)
}

/// A template body after substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPrompt {
    text: String,
    placeholders: Vec<String>,
    unresolved: Vec<String>,
}

impl ResolvedPrompt {
    /// Resolves `body` against `values`
    pub fn resolve(body: &str, values: &HashMap<String, String>) -> Self {
        let text = resolve(body, values);
        Self {
            placeholders: extract_placeholders(body),
            unresolved: extract_placeholders(&text),
            text,
        }
    }

    /// The resolved text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every placeholder referenced by the original body
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Placeholders still present in the resolved text
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn has_unresolved(&self) -> bool {
        !self.unresolved.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn body_without_markers_is_unchanged() {
        let body = "Audit the SERP for { single } braces and }} stray closers.";
        assert_eq!(resolve(body, &values(&[("single", "x")])), body);
        assert!(!has_unresolved(body));
        assert!(extract_placeholders(body).is_empty());
    }

    #[test]
    fn empty_body_has_no_placeholders() {
        assert!(extract_placeholders("").is_empty());
        assert_eq!(resolve("", &HashMap::new()), "");
    }

    #[test]
    fn repeated_placeholder_extracted_once_and_substituted_everywhere() {
        let body = "Hi {{name}}, welcome to {{name}}";
        assert_eq!(extract_placeholders(body), vec!["name"]);
        assert_eq!(
            resolve(body, &values(&[("name", "Ana")])),
            "Hi Ana, welcome to Ana"
        );
    }

    #[test]
    fn missing_value_leaves_marker_visible() {
        let resolved = resolve("{{city}} - {{missing}}", &values(&[("city", "Linz")]));
        assert_eq!(resolved, "Linz - {{missing}}");
        assert!(has_unresolved(&resolved));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let resolved = resolve("{{ brand }}!", &values(&[("brand", "")]));
        assert_eq!(resolved, "{{ brand }}!");
    }

    #[test]
    fn whitespace_inside_marker_is_insignificant() {
        let body = "{{city}} {{  city  }} {{\tcity\n}}";
        assert_eq!(extract_placeholders(body), vec!["city"]);
        assert_eq!(
            resolve(body, &values(&[("city", "Linz")])),
            "Linz Linz Linz",
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        let body = "{{City}} {{city}}";
        assert_eq!(extract_placeholders(body), vec!["City", "city"]);
        assert_eq!(resolve(body, &values(&[("city", "Linz")])), "{{City}} Linz");
    }

    #[test]
    fn unclosed_marker_is_not_matched() {
        let body = "Start {{city and {{domain}";
        assert!(extract_placeholders(body).is_empty());
        assert_eq!(
            resolve(body, &values(&[("city", "Linz"), ("domain", "x.sk")])),
            body
        );
        assert!(!has_unresolved(body));
    }

    #[test]
    fn adjacent_markers_each_substituted() {
        assert_eq!(
            resolve("{{a}}{{a}}{{b}}", &values(&[("a", "1"), ("b", "2")])),
            "112"
        );
    }

    #[test]
    fn resolution_is_idempotent_once_resolved() {
        let once = resolve(
            "{{brand}} on {{domain}}",
            &values(&[("brand", "Acme"), ("domain", "acme.sk")]),
        );
        assert!(!has_unresolved(&once));
        assert_eq!(resolve(&once, &values(&[("brand", "Other")])), once);
    }

    #[test]
    fn substituted_value_is_not_rescanned() {
        let resolved = resolve("{{a}}", &values(&[("a", "{{b}}"), ("b", "x")]));
        assert_eq!(resolved, "{{b}}");
    }

    #[test]
    fn dollar_signs_in_values_are_literal() {
        assert_eq!(
            resolve("{{price}}", &values(&[("price", "$1 $&")])),
            "$1 $&",
        );
    }

    #[test]
    fn resolved_prompt_tracks_unresolved_names() {
        let prompt =
            ResolvedPrompt::resolve("{{city}} - {{missing}}", &values(&[("city", "Linz")]));
        assert_eq!(prompt.text(), "Linz - {{missing}}");
        assert_eq!(prompt.placeholders(), ["city", "missing"]);
        assert_eq!(prompt.unresolved(), ["missing"]);
        assert!(prompt.has_unresolved());
    }

    mod properties {
        use super::*;
        use proptest::collection::hash_map;
        use proptest::prelude::*;

        fn any_values() -> impl Strategy<Value = HashMap<String, String>> {
            hash_map("[a-z_]{1,8}", ".{0,12}", 0..5)
        }

        proptest! {
            #[test]
            fn text_without_markers_resolves_unchanged(
                body in "[a-zA-Z0-9_ {}\n]{0,48}",
                values in any_values(),
            ) {
                prop_assume!(!has_unresolved(&body));

                prop_assert_eq!(resolve(&body, &values), body.clone());
                prop_assert!(extract_placeholders(&body).is_empty());
            }

            #[test]
            fn resolving_resolved_text_again_changes_nothing(
                body in "([a-z .]{0,6}\\{\\{ ?(brand|city|domain) ?\\}\\}){0,4}[a-z .]{0,6}",
                brand in "[a-zA-Z0-9 .]{1,10}",
                city in "[a-zA-Z0-9 .]{1,10}",
                domain in "[a-zA-Z0-9 .]{1,10}",
                other in any_values(),
            ) {
                let full = values(&[("brand", &brand), ("city", &city), ("domain", &domain)]);
                let once = resolve(&body, &full);

                prop_assert!(!has_unresolved(&once));
                prop_assert_eq!(resolve(&once, &other), once.clone());
            }
        }
    }
}
