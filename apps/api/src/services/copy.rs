use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use super::notifier::{Notice, Notifier};
use crate::domain::ports::Clipboard;
use crate::i18n::Translator;

/// Result of a copy action as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct CopyOutcome {
    pub copied: bool,
    pub notice: Notice,
}

/// Copies text to the clipboard and announces the result
///
/// Never touches card state. A blocked clipboard is reported through the
/// "copy manually" notice instead of an error.
pub struct CopyService {
    clipboard: Arc<dyn Clipboard>,
    notifier: Notifier,
}

impl CopyService {
    pub fn new(clipboard: Arc<dyn Clipboard>, notifier: Notifier) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }

    /// Copies `text` trimmed; `success_key` names the message shown on success
    pub fn copy(&self, text: &str, success_key: &str, translator: Translator) -> CopyOutcome {
        match self.clipboard.write_text(text.trim()) {
            Ok(()) => CopyOutcome {
                copied: true,
                notice: self.notifier.show(translator.t(success_key, &[])),
            },
            Err(e) => {
                warn!(error = %e, "Failed to copy text");
                CopyOutcome {
                    copied: false,
                    notice: self.notifier.show(translator.t("toast.copyError", &[])),
                }
            }
        }
    }
}
