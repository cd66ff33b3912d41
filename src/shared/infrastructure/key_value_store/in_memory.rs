use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: HashMap<String, String>,
    offline: bool,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Makes every read and write fail until toggled back.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Caps the summed length of all keys and values, like a browser storage quota.
    pub fn set_quota_bytes(&mut self, quota: usize) {
        self.quota_bytes = Some(quota);
    }

    fn ensure_online(&self) -> Result<(), KeyValueStoreError> {
        if self.offline {
            return Err(KeyValueStoreError::Unavailable(
                "Key value store offline".into(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        self.ensure_online()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        self.ensure_online()?;
        if let Some(quota) = self.quota_bytes {
            let others: usize = self
                .entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(KeyValueStoreError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
