use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Variable names editable in the global settings form
pub const GLOBAL_KEYS: [&str; 8] = [
    "brand",
    "domain",
    "city",
    "address",
    "phone",
    "primary_category",
    "stack",
    "url",
];

/// Immutable snapshot of the global variables
///
/// Saving settings builds a new snapshot and swaps it in whole; readers keep
/// whatever snapshot they cloned.
///
/// # Invariants
/// - Only names from [`GLOBAL_KEYS`] are kept; anything else is dropped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GlobalVariables(BTreeMap<String, String>);

impl GlobalVariables {
    /// Builds a snapshot, ignoring unknown names
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    /// use seo_prompter_api::domain::variables::GlobalVariables;
    ///
    /// let raw = HashMap::from([
    ///     ("city".to_string(), "Linz".to_string()),
    ///     ("favourite_color".to_string(), "teal".to_string()),
    /// ]);
    /// let vars = GlobalVariables::from_map(raw);
    ///
    /// assert_eq!(vars.get("city"), Some("Linz"));
    /// assert_eq!(vars.get("favourite_color"), None);
    /// ```
    pub fn from_map(values: HashMap<String, String>) -> Self {
        let mut known = BTreeMap::new();
        for (name, value) in values {
            if Self::is_known(&name) {
                known.insert(name, value);
            } else {
                debug!(variable = %name, "Ignoring unknown global variable");
            }
        }
        Self(known)
    }

    pub fn is_known(name: &str) -> bool {
        GLOBAL_KEYS.contains(&name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the non-empty values for the given placeholder names
    pub fn values_for(&self, names: &[String]) -> HashMap<String, String> {
        names
            .iter()
            .filter_map(|name| {
                self.get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| (name.clone(), value.to_string()))
            })
            .collect()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
