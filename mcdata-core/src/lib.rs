//! # MCData Core
//!
//! Reference runtime for generated data managers.
//!
//! This crate provides:
//! - The host persistence contract ([`PersistentDataContainer`])
//! - An in-memory container implementation
//! - Storage type tokens shared with the code generator
//! - A [`DataManager`] with the same read/write contract as the generated
//!   wrapper
//! - Error types for strict reads

pub mod container;
pub mod error;
pub mod key;
pub mod manager;
pub mod types;

pub use container::{MemoryContainer, PersistentDataContainer};
pub use error::{DataManagerError, Result};
pub use key::{KeyArgument, NamespacedKey};
pub use manager::{DEFAULT_NAMESPACE, DataManager};
pub use types::{DataType, PersistentDataType, Value};
