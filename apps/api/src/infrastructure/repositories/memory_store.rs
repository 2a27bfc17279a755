use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::repositories::KeyValueStore;
use crate::errors::{PrompterError, PrompterResult};

/// In-memory implementation of KeyValueStore
///
/// Holds values for the lifetime of the process only. Used as the fallback
/// when the durable store cannot be reached.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PrompterResult<Option<Value>> {
        let values = self
            .values
            .lock()
            .map_err(|e| PrompterError::PersistenceUnavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> PrompterResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| PrompterError::PersistenceUnavailable(e.to_string()))?;
        values.insert(key.to_string(), value);
        Ok(())
    }
}
