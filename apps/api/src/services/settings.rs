use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use crate::domain::repositories::storage_keys;
use crate::domain::variables::GlobalVariables;
use crate::infrastructure::persistence::PersistenceAdapter;

/// Owner of the global variables snapshot
///
/// Readers take an `Arc` clone and keep it for the whole resolution; saving
/// swaps in a new snapshot without touching the old one.
pub struct SettingsService {
    current: RwLock<Arc<GlobalVariables>>,
    persistence: Arc<PersistenceAdapter>,
}

impl SettingsService {
    /// Loads the saved snapshot, or starts empty
    pub fn load(persistence: Arc<PersistenceAdapter>) -> Self {
        let saved: HashMap<String, String> = persistence
            .get(storage_keys::SETTINGS)
            .unwrap_or_default();

        Self {
            current: RwLock::new(Arc::new(GlobalVariables::from_map(saved))),
            persistence,
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<GlobalVariables> {
        match self.current.read() {
            Ok(current) => Arc::clone(&current),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replaces the whole snapshot and persists it
    pub fn save(&self, values: HashMap<String, String>) -> Arc<GlobalVariables> {
        let next = Arc::new(GlobalVariables::from_map(values));

        match self.current.write() {
            Ok(mut current) => *current = Arc::clone(&next),
            Err(poisoned) => {
                warn!("Settings lock poisoned, replacing snapshot anyway");
                *poisoned.into_inner() = Arc::clone(&next);
            }
        }

        self.persistence.set(storage_keys::SETTINGS, next.as_ref());
        info!(variables = next.as_map().len(), "Global variables saved");
        next
    }
}
