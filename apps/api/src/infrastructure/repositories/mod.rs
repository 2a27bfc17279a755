// Key-value store implementations (data access layer)
// Adapters that implement the domain KeyValueStore interface

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
