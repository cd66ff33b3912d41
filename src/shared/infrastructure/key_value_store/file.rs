// File backed implementation of the KeyValueStore port.
//
// Responsibilities
// - Keep every key in one JSON object on disk, the process level stand-in for browser local storage.
// - Treat a missing file as an empty store.
// - Overwrite a file that no longer parses on the next write; reads still report it.
// - Replace the file through a sibling temp file so a failed write never truncates it.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, KeyValueStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), KeyValueStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), KeyValueStoreError> {
        let mut entries = match self.read_entries() {
            Err(KeyValueStoreError::Corrupt(err)) => {
                warn!(path = %self.path.display(), error = %err, "replacing corrupt storage file");
                BTreeMap::new()
            }
            other => other?,
        };
        entries.insert(key.to_string(), value);
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod file_key_value_store_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn dir() -> TempDir {
        tempfile::tempdir().expect("failed to create temp dir")
    }

    #[rstest]
    fn it_should_treat_a_missing_file_as_empty(dir: TempDir) {
        let store = FileKeyValueStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get("registeredUsers").unwrap(), None);
    }

    #[rstest]
    fn it_should_persist_values_across_instances(dir: TempDir) {
        let path = dir.path().join("nested").join("storage.json");
        let mut store = FileKeyValueStore::new(&path);
        store.set("a", "1".into()).unwrap();
        store.set("b", "2".into()).unwrap();
        store.set("a", "3".into()).unwrap();

        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(reopened.get("a").unwrap(), Some("3".to_string()));
        assert_eq!(reopened.get("b").unwrap(), Some("2".to_string()));
        assert!(!dir.path().join("nested").join("storage.json.tmp").exists());
    }

    #[rstest]
    fn it_should_report_a_corrupt_file_on_read(dir: TempDir) {
        let path = dir.path().join("storage.json");
        fs::write(&path, "not-json").unwrap();
        let store = FileKeyValueStore::new(&path);
        assert!(matches!(store.get("a"), Err(KeyValueStoreError::Corrupt(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "not-json");
    }

    #[rstest]
    fn it_should_replace_a_corrupt_file_on_write(dir: TempDir) {
        let path = dir.path().join("storage.json");
        fs::write(&path, "not-json").unwrap();
        let mut store = FileKeyValueStore::new(&path);

        store.set("a", "1".into()).unwrap();

        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.get("b").unwrap(), None);
    }

    #[rstest]
    fn it_should_remove_the_temp_file_when_the_rename_fails(dir: TempDir) {
        let path = dir.path().join("storage.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();
        let store = FileKeyValueStore::new(&path);

        let result = store.write_entries(&BTreeMap::from([("a".to_string(), "1".to_string())]));

        assert!(matches!(result, Err(KeyValueStoreError::Io(_))));
        assert!(!dir.path().join("storage.json.tmp").exists());
        assert!(path.is_dir());
    }

    #[rstest]
    fn it_should_fail_to_write_when_the_path_is_a_directory(dir: TempDir) {
        let mut store = FileKeyValueStore::new(dir.path());
        assert!(matches!(
            store.set("a", "1".into()),
            Err(KeyValueStoreError::Io(_))
        ));
    }
}
