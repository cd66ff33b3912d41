// Port for the string key-value storage that holds persisted state.
//
// Purpose
// - Describe the capability the users module needs (read a key, overwrite a key)
//   without tying it to a backend.
//
// Boundaries
// - Values are opaque strings here. Serialization belongs to the callers.
// - Adapters live next to the port: in_memory for tests, file for the binary.

pub mod file;
pub mod in_memory;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Overwrites any previous value under `key`.
    fn set(&mut self, key: &str, value: String) -> Result<(), KeyValueStoreError>;
}
