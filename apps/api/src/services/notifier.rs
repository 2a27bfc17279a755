use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

/// How long a notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_millis(1200);

/// A transient, already localized message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

/// Single-slot toast
///
/// Showing a notice replaces the current one and arms a hide timer. A timer
/// only hides the notice it was armed for, so an older timer never hides a
/// newer notice.
#[derive(Clone)]
pub struct Notifier {
    current: Arc<Mutex<Option<Notice>>>,
    next_id: Arc<AtomicU64>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            next_id: Arc::new(AtomicU64::new(1)),
            ttl,
        }
    }

    /// Shows `message`, replacing whatever is visible
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>) -> Notice {
        let notice = Notice {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            shown_at: Utc::now(),
        };

        if let Ok(mut current) = self.current.lock() {
            *current = Some(notice.clone());
        }
        debug!(notice_id = notice.id, message = %notice.message, "Notice shown");

        let slot = Arc::clone(&self.current);
        let id = notice.id;
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Ok(mut current) = slot.lock() {
                if current.as_ref().map(|n| n.id) == Some(id) {
                    *current = None;
                }
            }
        });

        notice
    }

    /// The visible notice, if any
    pub fn current(&self) -> Option<Notice> {
        self.current.lock().ok().and_then(|current| current.clone())
    }
}
