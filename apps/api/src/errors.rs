use thiserror::Error;

/// Errors that can occur in the prompter
#[derive(Debug, Error)]
pub enum PrompterError {
    #[error("Clipboard blocked: {0}")]
    ClipboardBlocked(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Prompt not found: {0}")]
    PromptNotFound(u32),

    #[error("Unresolved placeholders: {}", .0.join(", "))]
    UnresolvedPlaceholders(Vec<String>),

    #[error("A run is already active for prompt {0}")]
    AlreadyRunning(u32),

    #[error("Invalid prompt catalog: {0}")]
    InvalidCatalog(String),

    #[error("Code block not found: {0}")]
    CodeBlockNotFound(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PrompterResult<T> = Result<T, PrompterError>;
