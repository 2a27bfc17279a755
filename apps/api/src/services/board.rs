// Card presentation state
// Per-card values the user typed, the "new" badge and the expanded flag

use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

use crate::domain::prompt::{Category, PromptId, PromptTemplate, ResolvedPrompt};
use crate::domain::repositories::storage_keys;
use crate::domain::run::{RunSnapshot, RunStatus};
use crate::domain::variables::GlobalVariables;
use crate::i18n::Translator;
use crate::infrastructure::persistence::PersistenceAdapter;
use crate::services::rendering;

/// Delay before a card shown as new is marked as seen
pub const SEEN_DELAY: Duration = Duration::from_millis(2500);

/// One input of a card's variable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderField {
    pub name: String,
    pub label: String,
    pub hint: String,
}

/// Everything a client needs to draw one card
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: PromptId,
    pub icon: String,
    pub title: String,
    pub timestamp: String,
    pub category: Category,
    /// Body with all known values substituted
    pub body: String,
    pub placeholders: Vec<PlaceholderField>,
    pub unresolved: Vec<String>,
    pub has_unresolved: bool,
    pub values: BTreeMap<String, String>,
    pub is_new: bool,
    pub expanded: bool,
    pub status: RunStatus,
    pub response: String,
    pub response_html: String,
    /// Localized error banner
    pub error: Option<String>,
    pub error_detail: Option<String>,
}

/// Session state of the card list
///
/// Overrides are never persisted; they live until the process exits.
pub struct Board {
    new_ids: Arc<Mutex<HashSet<PromptId>>>,
    expanded: Mutex<HashSet<PromptId>>,
    overrides: Mutex<HashMap<PromptId, HashMap<String, String>>>,
}

impl Board {
    /// Creates the board; cards with a saved response start expanded
    pub fn new(persistence: &PersistenceAdapter) -> Self {
        let saved: HashMap<u32, String> = persistence
            .get(storage_keys::RESPONSES)
            .unwrap_or_default();

        let expanded: HashSet<PromptId> = saved
            .into_iter()
            .filter(|(_, response)| !response.is_empty())
            .filter_map(|(raw_id, _)| PromptId::new(raw_id).ok())
            .collect();

        let new_ids: HashSet<PromptId> = PromptId::new(1).into_iter().collect();

        Self {
            new_ids: Arc::new(Mutex::new(new_ids)),
            expanded: Mutex::new(expanded),
            overrides: Mutex::new(HashMap::new()),
        }
    }

    // ===== New badge =====

    pub fn is_new(&self, id: PromptId) -> bool {
        self.new_ids
            .lock()
            .map(|ids| ids.contains(&id))
            .unwrap_or(false)
    }

    /// Clears the badge; returns false when the card was not new
    pub fn mark_seen(&self, id: PromptId) -> bool {
        self.new_ids
            .lock()
            .map(|mut ids| ids.remove(&id))
            .unwrap_or(false)
    }

    /// Clears the badge of every new card after [`SEEN_DELAY`]
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule_seen(&self) {
        let new_ids = Arc::clone(&self.new_ids);
        tokio::spawn(async move {
            tokio::time::sleep(SEEN_DELAY).await;
            if let Ok(mut ids) = new_ids.lock() {
                debug!(cards = ids.len(), "Clearing new badges");
                ids.clear();
            }
        });
    }

    // ===== Expanded flag =====

    pub fn is_expanded(&self, id: PromptId) -> bool {
        self.expanded
            .lock()
            .map(|expanded| expanded.contains(&id))
            .unwrap_or(false)
    }

    /// Flips the expanded flag and returns the new value
    pub fn toggle_expanded(&self, id: PromptId) -> bool {
        match self.expanded.lock() {
            Ok(mut expanded) => {
                if expanded.remove(&id) {
                    false
                } else {
                    expanded.insert(id);
                    true
                }
            }
            Err(_) => false,
        }
    }

    pub fn expand(&self, id: PromptId) {
        if let Ok(mut expanded) = self.expanded.lock() {
            expanded.insert(id);
        }
    }

    // ===== Variables =====

    /// Merges user edits into the card's overrides
    ///
    /// Names that are not placeholders of the template are ignored. An empty
    /// value is kept: it hides the global value for this card.
    pub fn update_values(&self, prompt: &PromptTemplate, values: HashMap<String, String>) {
        let placeholders = prompt.placeholders();
        let Ok(mut overrides) = self.overrides.lock() else {
            return;
        };
        let card = overrides.entry(prompt.id()).or_default();

        for (name, value) in values {
            if placeholders.contains(&name) {
                card.insert(name, value);
            } else {
                debug!(
                    prompt_id = %prompt.id(),
                    variable = %name,
                    "Ignoring value for unknown placeholder"
                );
            }
        }
    }

    /// Effective value of every placeholder: user edit, else global, else empty
    pub fn values(
        &self,
        prompt: &PromptTemplate,
        globals: &GlobalVariables,
    ) -> BTreeMap<String, String> {
        let placeholders = prompt.placeholders();
        let mut values: BTreeMap<String, String> = placeholders
            .iter()
            .map(|name| (name.clone(), String::new()))
            .collect();

        values.extend(globals.values_for(&placeholders));

        if let Ok(overrides) = self.overrides.lock() {
            if let Some(card) = overrides.get(&prompt.id()) {
                values.extend(card.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }

        values
    }

    /// Resolves the template against the global snapshot and this card's edits
    pub fn resolve(&self, prompt: &PromptTemplate, globals: &GlobalVariables) -> ResolvedPrompt {
        let values: HashMap<String, String> = self.values(prompt, globals).into_iter().collect();
        ResolvedPrompt::resolve(prompt.body(), &values)
    }

    // ===== View =====

    pub fn view(
        &self,
        prompt: &PromptTemplate,
        translator: Translator,
        globals: &GlobalVariables,
        run: RunSnapshot,
    ) -> CardView {
        let locale = translator.locale();
        let resolved = self.resolve(prompt, globals);

        let placeholders = resolved
            .placeholders()
            .iter()
            .map(|name| {
                let spoken = name.replace('_', " ");
                PlaceholderField {
                    name: name.clone(),
                    label: translator.t(
                        "promptCard.variableInputLabel",
                        &[("placeholder", spoken.as_str())],
                    ),
                    hint: translator.t(
                        "promptCard.variableInputPlaceholder",
                        &[("placeholder", spoken.as_str())],
                    ),
                }
            })
            .collect();

        let streaming = run.status.is_running();
        let response_html = if run.response.is_empty() && !streaming {
            String::new()
        } else {
            rendering::render_response(&run.response, streaming)
        };

        CardView {
            id: prompt.id(),
            icon: prompt.icon().to_string(),
            title: prompt.title(locale).to_string(),
            timestamp: prompt.timestamp_label(locale).to_string(),
            category: prompt.category(),
            placeholders,
            unresolved: resolved.unresolved().to_vec(),
            has_unresolved: resolved.has_unresolved(),
            values: self.values(prompt, globals),
            is_new: self.is_new(prompt.id()),
            expanded: self.is_expanded(prompt.id()),
            status: run.status,
            response_html,
            error: run.error.as_ref().map(|_| translator.t("promptCard.error", &[])),
            error_detail: run.error,
            response: run.response,
            body: resolved.into_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::LocalizedText;
    use crate::domain::run::CardRun;
    use crate::i18n::Locale;
    use crate::infrastructure::repositories::MemoryStore;

    fn persistence() -> PersistenceAdapter {
        PersistenceAdapter::new(Arc::new(MemoryStore::new()))
    }

    fn template(body: &str) -> PromptTemplate {
        PromptTemplate::new(
            PromptId::new(7).unwrap(),
            "🧪",
            LocalizedText::new("Test", "Test"),
            LocalizedText::new("teraz", "now"),
            body,
            Category::Default,
        )
    }

    fn globals(pairs: &[(&str, &str)]) -> GlobalVariables {
        GlobalVariables::from_map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn first_card_starts_new() {
        let board = Board::new(&persistence());
        assert!(board.is_new(PromptId::new(1).unwrap()));
        assert!(!board.is_new(PromptId::new(2).unwrap()));

        assert!(board.mark_seen(PromptId::new(1).unwrap()));
        assert!(!board.is_new(PromptId::new(1).unwrap()));
        assert!(!board.mark_seen(PromptId::new(1).unwrap()));
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_seen_clears_badge_after_delay() {
        let board = Board::new(&persistence());
        board.schedule_seen();

        tokio::time::sleep(Duration::from_millis(2400)).await;
        assert!(board.is_new(PromptId::new(1).unwrap()));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!board.is_new(PromptId::new(1).unwrap()));
    }

    #[test]
    fn saved_response_starts_expanded() {
        let persistence = persistence();
        persistence.set(
            storage_keys::RESPONSES,
            &HashMap::from([(2u32, "saved"), (3u32, "")]),
        );

        let board = Board::new(&persistence);

        assert!(board.is_expanded(PromptId::new(2).unwrap()));
        assert!(!board.is_expanded(PromptId::new(3).unwrap()));
        assert!(!board.toggle_expanded(PromptId::new(2).unwrap()));
        assert!(board.toggle_expanded(PromptId::new(2).unwrap()));
    }

    #[test]
    fn overrides_win_over_globals() {
        let board = Board::new(&persistence());
        let prompt = template("{{city}} - {{brand}}");

        board.update_values(
            &prompt,
            HashMap::from([("city".to_string(), "Graz".to_string())]),
        );
        let resolved = board.resolve(&prompt, &globals(&[("city", "Linz"), ("brand", "Acme")]));

        assert_eq!(resolved.text(), "Graz - Acme");
    }

    #[test]
    fn empty_override_hides_global_value() {
        let board = Board::new(&persistence());
        let prompt = template("Hello {{city}}");

        board.update_values(
            &prompt,
            HashMap::from([("city".to_string(), String::new())]),
        );
        let resolved = board.resolve(&prompt, &globals(&[("city", "Linz")]));

        assert_eq!(resolved.text(), "Hello {{city}}");
        assert!(resolved.has_unresolved());
    }

    #[test]
    fn values_for_unknown_placeholders_are_dropped() {
        let board = Board::new(&persistence());
        let prompt = template("{{city}}");

        board.update_values(
            &prompt,
            HashMap::from([("zip".to_string(), "4020".to_string())]),
        );

        let values = board.values(&prompt, &GlobalVariables::default());
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["city"]);
    }

    #[test]
    fn new_globals_reach_cards_without_overrides() {
        let board = Board::new(&persistence());
        let prompt = template("{{brand}}");

        assert_eq!(
            board.resolve(&prompt, &globals(&[("brand", "Old")])).text(),
            "Old",
        );
        assert_eq!(
            board.resolve(&prompt, &globals(&[("brand", "New")])).text(),
            "New",
        );
    }

    #[test]
    fn view_localizes_labels_and_error() {
        let board = Board::new(&persistence());
        let prompt = template("Audit {{primary_category}}");

        let mut run = CardRun::new(prompt.id());
        let ready = ResolvedPrompt::resolve("x", &HashMap::new());
        let run_id = run.start(&ready).unwrap().1;
        run.append(run_id, "partial");
        run.fail(run_id, "HTTP error 500");

        let view = board.view(
            &prompt,
            Translator::new(Locale::En),
            &GlobalVariables::default(),
            run.snapshot(),
        );

        assert_eq!(view.timestamp, "now");
        assert!(view.has_unresolved);
        assert_eq!(view.unresolved, vec!["primary_category"]);
        assert_eq!(view.status, RunStatus::Errored);
        assert_eq!(view.response, "partial");
        assert_eq!(view.error_detail.as_deref(), Some("HTTP error 500"));
        assert_eq!(
            view.error.as_deref(),
            Some("Error communicating with the Gemini API. Check the console for more details.")
        );
        assert_eq!(view.placeholders[0].label, "primary category");
        assert_eq!(view.placeholders[0].hint, "Enter primary category...");
    }

    #[test]
    fn running_view_marks_response_in_progress() {
        let board = Board::new(&persistence());
        let prompt = template("Say hi");

        let mut run = CardRun::new(prompt.id());
        let ready = ResolvedPrompt::resolve("Say hi", &HashMap::new());
        let run_id = run.start(&ready).unwrap().1;
        run.append(run_id, "Hi");

        let view = board.view(
            &prompt,
            Translator::new(Locale::Sk),
            &GlobalVariables::default(),
            run.snapshot(),
        );

        assert_eq!(view.status, RunStatus::Running);
        assert!(view.response_html.starts_with("<p>Hi"));
        assert_ne!(view.response_html, "<p>Hi</p>\n");
        assert_eq!(view.error, None);
    }
}
