use std::env::VarError;
use std::path::PathBuf;
use thiserror::Error;

pub const STORAGE_FILE_ENV: &str = "USER_REGISTRATIONS_STORAGE_FILE";
pub const DEFAULT_STORAGE_FILE: &str = "registered_users.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("USER_REGISTRATIONS_STORAGE_FILE must not be empty")]
    EmptyStorageFile,

    #[error("USER_REGISTRATIONS_STORAGE_FILE is not valid unicode")]
    NotUnicode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, VarError>,
    ) -> Result<Self, ConfigError> {
        let storage_file = match lookup(STORAGE_FILE_ENV) {
            Ok(value) if value.is_empty() => return Err(ConfigError::EmptyStorageFile),
            Ok(value) => PathBuf::from(value),
            Err(VarError::NotPresent) => PathBuf::from(DEFAULT_STORAGE_FILE),
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode),
        };
        Ok(Self { storage_file })
    }

    /// A path given on the command line wins over the environment.
    pub fn with_storage_file(mut self, storage_file: Option<PathBuf>) -> Self {
        if let Some(path) = storage_file {
            self.storage_file = path;
        }
        self
    }
}
