//! Asset registry - CRUD contract over a ledger world state
//!
//! Every operation is a single synchronous read-modify-write against
//! the store passed in by the caller. Atomicity, isolation, and
//! conflict resolution belong to the hosting ledger's transaction
//! machinery, so there is no caching, locking, or retry logic here.

use crate::asset::Asset;
use crate::error::{RegistryError, Result};
use crate::store::{RangeCursor, StateStore};

/// Records written by [`AssetRegistry::init`]
fn seed_assets() -> [Asset; 4] {
    [
        Asset::new("1", "米米", "black", "郑雅菱"),
        Asset::new("2", "小黄", "green", "水成渊"),
        Asset::new("3", "花花", "red", "零零自"),
        Asset::new("4", "艾灸", "blue", "雅菱二"),
    ]
}

/// Stateless CRUD method set over a world-state store.
///
/// The store is an explicit parameter on every operation rather than
/// a field: the registry holds no state of its own between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetRegistry;

impl AssetRegistry {
    /// Create a registry handle
    pub fn new() -> Self {
        Self
    }

    /// Seed the ledger with the predefined assets.
    ///
    /// Writes unconditionally, overwriting any records already under
    /// the seed ids, and aborts on the first failed write.
    pub fn init<S: StateStore>(&self, store: &mut S) -> Result<()> {
        let seeds = seed_assets();
        for asset in &seeds {
            let bytes = asset.to_state_bytes()?;
            store.put_state(&asset.id, &bytes)?;
        }
        log::info!("ledger seeded with {} assets", seeds.len());
        Ok(())
    }

    /// Check whether an asset exists.
    ///
    /// True iff the store holds non-empty bytes under `id`.
    pub fn exists<S: StateStore>(&self, store: &S, id: &str) -> Result<bool> {
        Ok(store
            .get_state(id)?
            .is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Create a new asset, refusing ids that already exist
    pub fn create<S: StateStore>(
        &self,
        store: &mut S,
        id: &str,
        name: &str,
        category: &str,
        owner: &str,
    ) -> Result<()> {
        if self.exists(store, id)? {
            return Err(RegistryError::AlreadyExists(id.to_string()));
        }
        let asset = Asset::new(id, name, category, owner);
        let bytes = asset.to_state_bytes()?;
        store.put_state(id, &bytes)?;
        Ok(())
    }

    /// Read an asset by id
    pub fn read<S: StateStore>(&self, store: &S, id: &str) -> Result<Asset> {
        let bytes = store
            .get_state(id)?
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        Asset::from_state_bytes(&bytes)
    }

    /// Replace an existing asset wholesale.
    ///
    /// All fields are rewritten from the arguments; this is a full
    /// overwrite, not a merge with the stored record.
    pub fn update<S: StateStore>(
        &self,
        store: &mut S,
        id: &str,
        name: &str,
        category: &str,
        owner: &str,
    ) -> Result<()> {
        if !self.exists(store, id)? {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        let asset = Asset::new(id, name, category, owner);
        let bytes = asset.to_state_bytes()?;
        store.put_state(id, &bytes)?;
        Ok(())
    }

    /// Delete an existing asset
    pub fn delete<S: StateStore>(&self, store: &mut S, id: &str) -> Result<()> {
        if !self.exists(store, id)? {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        store.del_state(id)?;
        Ok(())
    }

    /// Reassign ownership of an existing asset.
    ///
    /// Only the owner field changes; id, name, and category are
    /// carried over from the stored record.
    pub fn transfer<S: StateStore>(&self, store: &mut S, id: &str, new_owner: &str) -> Result<()> {
        let mut asset = self.read(store, id)?;
        asset.owner = new_owner.to_string();
        let bytes = asset.to_state_bytes()?;
        store.put_state(id, &bytes)?;
        Ok(())
    }

    /// Iterate over every asset in store key order.
    ///
    /// The iterator is lazy and non-restartable: entries decode as
    /// they are pulled, and the first store or decode failure is
    /// yielded once before the iteration ends.
    pub fn list_all<'a, S: StateStore>(&self, store: &'a S) -> Result<AssetIter<'a>> {
        let cursor = store.get_state_by_range("", "")?;
        Ok(AssetIter {
            cursor: Some(cursor),
        })
    }
}

/// Lazy iterator over decoded assets from a full-range scan.
///
/// The underlying cursor is dropped, releasing the scan, as soon as
/// the iteration finishes or fails, and when the iterator itself is
/// dropped early.
pub struct AssetIter<'a> {
    cursor: Option<RangeCursor<'a>>,
}

impl Iterator for AssetIter<'_> {
    type Item = Result<Asset>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let entry = match cursor.next() {
            Some(entry) => entry,
            None => {
                self.cursor = None;
                return None;
            }
        };
        match entry {
            Ok((_key, bytes)) => match Asset::from_state_bytes(&bytes) {
                Ok(asset) => Some(Ok(asset)),
                Err(err) => {
                    self.cursor = None;
                    Some(Err(err))
                }
            },
            Err(err) => {
                self.cursor = None;
                Some(Err(err.into()))
            }
        }
    }
}
