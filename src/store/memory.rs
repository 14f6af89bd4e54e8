//! In-memory world-state backend

use crate::error::StoreError;
use crate::store::{RangeCursor, StateStore};
use std::collections::BTreeMap;
use std::ops::Bound;

/// BTreeMap-backed store with lexicographic range scans.
///
/// The default backend for tests and examples; point operations never
/// fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// True when no keys are held
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

pub(super) fn range_bounds(start: &str, end: &str) -> (Bound<String>, Bound<String>) {
    let lower = if start.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start.to_string())
    };
    let upper = if end.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end.to_string())
    };
    (lower, upper)
}

impl StateStore for MemoryStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.state.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.state.remove(key);
        Ok(())
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

    #[test]
    fn test_put_get_del() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_state("a").unwrap(), None);

        store.put_state("a", b"one").unwrap();
        assert_eq!(store.get_state("a").unwrap(), Some(b"one".to_vec()));

        store.put_state("a", b"two").unwrap();
        assert_eq!(store.get_state("a").unwrap(), Some(b"two".to_vec()));

        store.del_state("a").unwrap();
        assert_eq!(store.get_state("a").unwrap(), None);

        // Deleting again is not an error
        store.del_state("a").unwrap();
    }

    #[test]
    fn test_full_range_scan_is_key_ordered() {
        let mut store = MemoryStore::new();
        store.put_state("b", b"2").unwrap();
        store.put_state("a", b"1").unwrap();
        store.put_state("c", b"3").unwrap();

        let keys: Vec<String> = store
            .get_state_by_range("", "")
            .unwrap()
            .map(|r| r.unwrap().0)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_range_scan_is_half_open() {
        let mut store = MemoryStore::new();
        for key in ["a", "b", "c", "d"] {
            store.put_state(key, b"x").unwrap();
        }

        let keys: Vec<String> = store
            .get_state_by_range("b", "d")
            .unwrap()
            .map(|r| r.unwrap().0)
            .collect();
        assert_eq!(keys, vec!["b", "c"]);
    }
}
