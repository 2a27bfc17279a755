// Typed persistence on top of the key-value store
// Storage failures never reach callers; the session falls back to memory

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

use super::repositories::MemoryStore;
use crate::domain::repositories::KeyValueStore;
use crate::errors::PrompterError;

/// Typed get/set with JSON encoding and an in-memory fallback
///
/// Every write goes to the memory mirror first, then to the durable store.
/// The first durable failure switches the adapter to memory-only for the
/// rest of the process; nothing is surfaced to the user.
pub struct PersistenceAdapter {
    durable: Arc<dyn KeyValueStore>,
    fallback: MemoryStore,
    degraded: AtomicBool,
}

impl PersistenceAdapter {
    /// Creates an adapter over a durable store
    pub fn new(durable: Arc<dyn KeyValueStore>) -> Self {
        Self {
            durable,
            fallback: MemoryStore::new(),
            degraded: AtomicBool::new(false),
        }
    }

    /// True once the adapter has fallen back to memory
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }

    /// Reads and decodes the value under `key`
    ///
    /// Missing keys, undecodable values and storage failures all yield `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.durable_store() {
            Some(store) => match store.get(key) {
                Ok(value) => value,
                Err(e) => {
                    self.degrade(key, &e);
                    self.fallback.get(key).ok().flatten()
                }
            },
            None => self.fallback.get(key).ok().flatten(),
        }?;

        match serde_json::from_value(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Ignoring undecodable stored value");
                None
            }
        }
    }

    /// Encodes and stores `value` under `key`
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_value(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode value for storage");
                return;
            }
        };

        if let Err(e) = self.fallback.set(key, raw.clone()) {
            warn!(key, error = %e, "In-memory store rejected write");
        }

        if let Some(store) = self.durable_store() {
            if let Err(e) = store.set(key, raw) {
                self.degrade(key, &e);
            }
        }
    }

    fn durable_store(&self) -> Option<&Arc<dyn KeyValueStore>> {
        if self.is_degraded() {
            return None;
        }
        Some(&self.durable)
    }

    fn degrade(&self, key: &str, error: &PrompterError) {
        if !self.degraded.swap(true, Ordering::Relaxed) {
            warn!(
                key,
                error = %error,
                "Durable storage unavailable, keeping state in memory only"
            );
        }
    }
}
