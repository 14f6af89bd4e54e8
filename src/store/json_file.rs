//! File-persisted world-state backend

use crate::error::StoreError;
use crate::store::memory::range_bounds;
use crate::store::{RangeCursor, StateStore};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store that persists its full state as a JSON snapshot file.
///
/// Every mutation rewrites the snapshot, so state survives between
/// process invocations. Suited to the CLI harness and small ledgers;
/// not a database.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: BTreeMap<String, Vec<u8>>,
}

impl JsonFileStore {
    /// Open the snapshot at `path`, creating an empty store if the
    /// file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let bytes = fs::read(&path)?;
            serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Backend(format!("corrupt store snapshot: {e}")))?
        } else {
            log::debug!("no snapshot at {}, starting empty", path.display());
            BTreeMap::new()
        };
        Ok(Self { path, state })
    }

    /// Path of the backing snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&self.state)
            .map_err(|e| StoreError::Backend(format!("snapshot encode failed: {e}")))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.state.insert(key.to_string(), value.to_vec());
        self.persist()
    }

    fn del_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.state.remove(key);
        self.persist()
    }

    fn get_state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> Result<RangeCursor<'a>, StoreError> {
        let cursor = self
            .state
            .range(range_bounds(start, end))
            .map(|(k, v)| Ok((k.clone(), v.clone())));
        Ok(Box::new(cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.put_state("1", b"first").unwrap();
            store.put_state("2", b"second").unwrap();
            store.del_state("2").unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get_state("1").unwrap(), Some(b"first".to_vec()));
        assert_eq!(store.get_state("2").unwrap(), None);
    }

    #[test]
    fn test_corrupt_snapshot_is_a_backend_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, b"{ definitely not a snapshot").unwrap();

        let result = JsonFileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Backend(_))));
    }

    #[test]
    fn test_range_scan_matches_memory_semantics() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("state.json")).unwrap();
        store.put_state("b", b"2").unwrap();
        store.put_state("a", b"1").unwrap();

        let keys: Vec<String> = store
            .get_state_by_range("", "")
            .unwrap()
            .map(|r| r.unwrap().0)
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
