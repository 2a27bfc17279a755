use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a prompt template
///
/// Used as the storage key of the card's response and as the list key.
///
/// # Invariants
/// - Always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct PromptId(pub(super) u32);

impl PromptId {
    /// Creates a PromptId, rejecting zero
    ///
    /// # Example
    /// ```
    /// use seo_prompter_api::domain::prompt::PromptId;
    ///
    /// assert_eq!(PromptId::new(3).unwrap().value(), 3);
    /// assert!(PromptId::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, String> {
        if value == 0 {
            return Err("Prompt id must be positive".to_string());
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PromptId {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PromptId> for u32 {
    fn from(id: PromptId) -> Self {
        id.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display tag of a prompt card
///
/// Purely presentational; it never changes how a card behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Default,
    New,
    Urgent,
    Success,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Default => write!(f, "default"),
            Category::New => write!(f, "new"),
            Category::Urgent => write!(f, "urgent"),
            Category::Success => write!(f, "success"),
        }
    }
}
