//! # cat-registry
//!
//! A ledger-backed registry for cat assets: create, read, update,
//! delete, list, and transfer ownership of identifier-keyed records
//! held in a key-value world state.
//!
//! The registry itself is a thin CRUD contract. Persistence, ordering,
//! and conflict resolution belong to whatever backs the [`store::StateStore`]
//! trait - in production a ledger runtime's world state, in tests the
//! bundled [`store::MemoryStore`].
//!
//! ## Example
//!
//! ```rust
//! use cat_registry::prelude::*;
//!
//! let registry = AssetRegistry::new();
//! let mut store = MemoryStore::new();
//!
//! registry.create(&mut store, "7", "Tom", "grey", "jerry")?;
//! registry.transfer(&mut store, "7", "spike")?;
//!
//! let asset = registry.read(&store, "7")?;
//! assert_eq!(asset.owner, "spike");
//! # Ok::<(), cat_registry::error::RegistryError>(())
//! ```

pub mod asset;
pub mod error;
pub mod registry;
pub mod store;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::asset::Asset;
    pub use crate::error::{RegistryError, Result, StoreError};
    pub use crate::registry::{AssetIter, AssetRegistry};
    pub use crate::store::{JsonFileStore, MemoryStore, RangeCursor, StateStore};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_compile() {
        // Smoke test to ensure library compiles
        let _ = registry::AssetRegistry::new();
    }
}
