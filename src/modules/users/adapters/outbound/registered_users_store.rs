// Persistent store for the registered users collection.
//
// Responsibilities
// - Read and write the whole collection as one JSON array under a fixed key.
// - Report malformed stored data and rejected writes as distinct errors. Recovering
//   from them (empty collection, keep going in memory) is the controller's job.
//
// Boundaries
// - No partial updates, no batching. Every save rewrites the full array.

use crate::modules::users::core::registered_users::RegisteredUsers;
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use thiserror::Error;

pub const REGISTERED_USERS_KEY: &str = "registeredUsers";

#[derive(Debug, Error)]
pub enum DeserializationError {
    #[error("stored value under `{key}` is malformed: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored value under `{key}` could not be read: {source}")]
    Unreadable {
        key: &'static str,
        #[source]
        source: KeyValueStoreError,
    },
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("registered users could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("write under `{key}` was rejected: {source}")]
    Rejected {
        key: &'static str,
        #[source]
        source: KeyValueStoreError,
    },
}

pub struct RegisteredUsersStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> RegisteredUsersStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// An absent or empty value loads as an empty collection.
    pub fn load(&self) -> Result<RegisteredUsers, DeserializationError> {
        let stored = self
            .backend
            .get(REGISTERED_USERS_KEY)
            .map_err(|source| DeserializationError::Unreadable {
                key: REGISTERED_USERS_KEY,
                source,
            })?;
        match stored {
            Some(value) if !value.is_empty() => {
                serde_json::from_str(&value).map_err(|source| DeserializationError::Malformed {
                    key: REGISTERED_USERS_KEY,
                    source,
                })
            }
            _ => Ok(RegisteredUsers::new()),
        }
    }

    pub fn save(&mut self, users: &RegisteredUsers) -> Result<(), PersistenceError> {
        let value = serde_json::to_string(users).map_err(PersistenceError::Serialize)?;
        self.backend
            .set(REGISTERED_USERS_KEY, value)
            .map_err(|source| PersistenceError::Rejected {
                key: REGISTERED_USERS_KEY,
                source,
            })
    }
}
