// Prompt domain module
// Contains the template entity, the built-in catalog, placeholder
// resolution and catalog search

#![allow(clippy::module_inception)]

pub mod catalog;
pub mod placeholders;
pub mod prompt;
pub mod search;
pub mod value_objects;

// Re-export main types for convenience
pub use catalog::PromptCatalog;
pub use placeholders::ResolvedPrompt;
pub use prompt::{LocalizedText, PromptTemplate};
pub use search::filter_prompts;
pub use value_objects::{Category, PromptId};
