//! Error types for data manager reads.

use crate::key::NamespacedKey;
use crate::types::PersistentDataType;
use thiserror::Error;

/// Error returned by strict data manager reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataManagerError {
    /// No value is stored under the key.
    #[error("Key \"{key}\" does not exists")]
    KeyAbsent {
        /// Requested key.
        key: NamespacedKey,
    },

    /// A value is stored under the key, but not of the requested type.
    #[error("Type is not \"{data_type}\"")]
    TypeMismatch {
        /// Requested data type.
        data_type: PersistentDataType,
    },
}

/// Result type alias for data manager reads.
pub type Result<T> = std::result::Result<T, DataManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_absent_message() {
        let err = DataManagerError::KeyAbsent {
            key: NamespacedKey::new("minecraft", "missing"),
        };
        assert_eq!(err.to_string(), "Key \"minecraft:missing\" does not exists");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = DataManagerError::TypeMismatch {
            data_type: PersistentDataType::Integer,
        };
        assert_eq!(err.to_string(), "Type is not \"INTEGER\"");
    }
}
