use std::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::ports::Clipboard;
use crate::errors::{PrompterError, PrompterResult};

/// Clipboard of the machine the service runs on
///
/// The handle is opened once and kept for the life of the process. On X11
/// and Wayland the owning process serves the clipboard contents, so dropping
/// the handle after each write would lose the copied text.
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let handle = match arboard::Clipboard::new() {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "System clipboard unavailable, copy actions will fail");
                None
            }
        };

        Self {
            handle: Mutex::new(handle),
        }
    }

    #[cfg(test)]
    fn unavailable() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> PrompterResult<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| PrompterError::ClipboardBlocked(e.to_string()))?;

        let clipboard = handle
            .as_mut()
            .ok_or_else(|| PrompterError::ClipboardBlocked("no clipboard available".to_string()))?;

        clipboard.set_text(text.to_string()).map_err(|e| {
            debug!(error = %e, "Clipboard write rejected");
            PrompterError::ClipboardBlocked(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_handle_reports_blocked_clipboard() {
        let clipboard = SystemClipboard::unavailable();

        let result = clipboard.write_text("Audit acme.sk");

        assert!(matches!(result, Err(PrompterError::ClipboardBlocked(_))));
    }

    #[test]
    fn handle_is_shared_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<SystemClipboard>();
    }
}
