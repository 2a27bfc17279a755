use serde_json::Value;

use crate::errors::PrompterResult;

/// Keys of the shared key-value namespace
///
/// Each entity is read and written as one whole value under its own key.
pub mod storage_keys {
    /// Global variables (`{name: value}`)
    pub const SETTINGS: &str = "gemini-seo-prompter-settings";
    /// Persisted responses (`{prompt id: text}`)
    pub const RESPONSES: &str = "gemini-seo-prompter-responses";
    /// Selected UI locale (`"sk"` or `"en"`)
    pub const LOCALE: &str = "gemini-prompter-lang";
}

/// Durable key-value store holding JSON values
///
/// Defines the contract of the local persistence backend. Calls are
/// synchronous: the store is small and local.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`
    fn get(&self, key: &str) -> PrompterResult<Option<Value>>;

    /// Replaces the value stored under `key`
    fn set(&self, key: &str, value: Value) -> PrompterResult<()>;
}
