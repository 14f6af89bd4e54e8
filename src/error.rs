//! Error types for the cat registry

use thiserror::Error;

/// Main error type for registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset already exists: {0}")]
    AlreadyExists(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Failure raised by a world-state store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend failure: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_wraps_into_registry_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: RegistryError = StoreError::from(io).into();

        let msg = err.to_string();
        assert!(msg.contains("Store error"));
        assert!(msg.contains("disk gone"));
    }

    #[test]
    fn test_error_messages_carry_the_id() {
        assert_eq!(
            RegistryError::NotFound("7".to_string()).to_string(),
            "Asset not found: 7"
        );
        assert_eq!(
            RegistryError::AlreadyExists("7".to_string()).to_string(),
            "Asset already exists: 7"
        );
    }
}
