// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod key_value_store;

pub use key_value_store::{storage_keys, KeyValueStore};
