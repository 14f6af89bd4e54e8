//! World-state store abstraction
//!
//! The registry reaches its backing ledger through the [`StateStore`]
//! trait, which lists exactly the four accessor operations the
//! registry uses: point lookup, write, delete, and ordered range
//! scans. Anything that can answer those four calls can host the
//! registry; the crate ships an in-memory backend for tests and a
//! JSON-file backend for the CLI harness.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Cursor over `(key, value)` pairs yielded by a range scan.
///
/// The cursor borrows the store; dropping it releases the scan.
pub type RangeCursor<'a> =
    Box<dyn Iterator<Item = std::result::Result<(String, Vec<u8>), StoreError>> + 'a>;

/// Key-value world-state operations used by the registry
pub trait StateStore {
    /// Point lookup. `Ok(None)` means the key is absent.
    fn get_state(&self, key: &str) -> std::result::Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, overwriting any existing value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> std::result::Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not a store error.
    fn del_state(&mut self, key: &str) -> std::result::Result<(), StoreError>;

    /// Ordered scan over the half-open key range `[start, end)`.
    ///
    /// An empty bound is unbounded, so `get_state_by_range("", "")`
    /// walks the full keyspace in lexicographic key order.
    fn get_state_by_range<'a>(
        &'a self,
        start: &str,
        end: &str,
    ) -> std::result::Result<RangeCursor<'a>, StoreError>;
}
