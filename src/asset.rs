//! Asset representation and its stored JSON form

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cat record keyed by its identifier in world state.
///
/// The serde field names below are the stored wire format and must
/// stay stable: records written by one build have to decode under the
/// next.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier, immutable once created
    pub id: String,
    /// Display name
    pub name: String,
    /// Category attribute, e.g. coat color
    pub category: String,
    /// Current owner, reassigned by transfer
    pub owner: String,
}

impl Asset {
    /// Create a new asset
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            owner: owner.into(),
        }
    }

    /// Encode to the stored JSON bytes
    pub fn to_state_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| RegistryError::Serialization(e.to_string()))
    }

    /// Decode from stored JSON bytes
    pub fn from_state_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| RegistryError::Deserialization(e.to_string()))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Asset({}, {}, {}, owner={})",
            self.id, self.name, self.category, self.owner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_creation() {
        let asset = Asset::new("1", "米米", "black", "郑雅菱");
        assert_eq!(asset.id, "1");
        assert_eq!(asset.name, "米米");
        assert_eq!(asset.category, "black");
        assert_eq!(asset.owner, "郑雅菱");
    }

    #[test]
    fn test_stored_field_names_are_stable() {
        let asset = Asset::new("1", "Whiskers", "black", "alice");
        let value: serde_json::Value =
            serde_json::from_slice(&asset.to_state_bytes().unwrap()).unwrap();

        assert_eq!(value["id"], "1");
        assert_eq!(value["name"], "Whiskers");
        assert_eq!(value["category"], "black");
        assert_eq!(value["owner"], "alice");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_state_bytes_round_trip() {
        let asset = Asset::new("4", "艾灸", "blue", "雅菱二");
        let bytes = asset.to_state_bytes().unwrap();
        assert_eq!(Asset::from_state_bytes(&bytes).unwrap(), asset);
    }

    #[test]
    fn test_malformed_bytes_fail_with_deserialization() {
        let result = Asset::from_state_bytes(b"not json");
        assert!(matches!(result, Err(RegistryError::Deserialization(_))));
    }
}
