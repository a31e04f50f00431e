//! Reference data manager.
//!
//! [`DataManager`] wraps a container with typed accessors that follow the
//! same contract as the generated wrapper:
//!
//! - [`DataManager::get`] fails with [`DataManagerError::KeyAbsent`] when the
//!   key is missing, then with [`DataManagerError::TypeMismatch`] when the
//!   stored value has another type.
//! - [`DataManager::get_or_null`] returns `None` in both cases.
//! - [`DataManager::get_or_default`] returns the supplied fallback in both
//!   cases.
//! - [`DataManager::set`] returns the same manager for chaining.
//!
//! Local keys are resolved against the manager's namespace. Managers created
//! with [`DataManager::new`] use the process-wide default namespace, which
//! starts as [`DEFAULT_NAMESPACE`].

use crate::container::{MemoryContainer, PersistentDataContainer};
use crate::error::{DataManagerError, Result};
use crate::key::{KeyArgument, NamespacedKey};
use crate::types::{DataType, PersistentDataType, Value};
use parking_lot::RwLock;
use std::sync::LazyLock;

/// Initial process-wide default namespace.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

static DEFAULT_NAMESPACE_CELL: LazyLock<RwLock<String>> =
    LazyLock::new(|| RwLock::new(DEFAULT_NAMESPACE.to_string()));

/// Typed accessors over a [`MemoryContainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct DataManager {
    namespace: String,
    container: MemoryContainer,
}

impl DataManager {
    /// Creates a manager using the process-wide default namespace.
    #[must_use]
    pub fn new(container: MemoryContainer) -> Self {
        Self::with_namespace(container, Self::default_namespace())
    }

    /// Creates a manager with an explicit namespace.
    #[must_use]
    pub fn with_namespace(container: MemoryContainer, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            container,
        }
    }

    /// Returns the process-wide default namespace.
    #[must_use]
    pub fn default_namespace() -> String {
        DEFAULT_NAMESPACE_CELL.read().clone()
    }

    /// Sets the process-wide default namespace.
    ///
    /// Only managers created afterwards are affected.
    pub fn set_default_namespace(namespace: impl Into<String>) {
        *DEFAULT_NAMESPACE_CELL.write() = namespace.into();
    }

    /// Returns the namespace local keys are resolved against.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the wrapped container.
    #[must_use]
    pub fn container(&self) -> &MemoryContainer {
        &self.container
    }

    /// Consumes the manager, returning the wrapped container.
    #[must_use]
    pub fn into_container(self) -> MemoryContainer {
        self.container
    }

    /// Returns true if any value is stored under the key.
    pub fn contains(&self, key: impl KeyArgument) -> bool {
        let key = key.resolve(&self.namespace);
        self.container.has(&key)
    }

    /// Returns true if a value of type `T` is stored under the key.
    ///
    /// Returns false when the key is absent.
    pub fn is<T: DataType>(&self, key: impl KeyArgument) -> bool {
        let key = key.resolve(&self.namespace);
        self.container.has_type(&key, T::TYPE)
    }

    /// Reads a value of type `T`.
    ///
    /// # Errors
    /// Returns [`DataManagerError::KeyAbsent`] if nothing is stored under the
    /// key, or [`DataManagerError::TypeMismatch`] if the stored value is not a
    /// `T`.
    pub fn get<T: DataType>(&self, key: impl KeyArgument) -> Result<T> {
        let key = key.resolve(&self.namespace);
        self.read(&key)
    }

    /// Reads a value of type `T`, or `None` if it is absent or of another type.
    pub fn get_or_null<T: DataType>(&self, key: impl KeyArgument) -> Option<T> {
        self.get(key).ok()
    }

    /// Reads a value of type `T`, or `default` if it is absent or of another
    /// type.
    pub fn get_or_default<T: DataType>(&self, key: impl KeyArgument, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Stores a value of type `T`.
    pub fn set<T: DataType>(&mut self, key: impl KeyArgument, value: T) -> &mut Self {
        let key = key.resolve(&self.namespace);
        self.container.set(key, value.into_value());
        self
    }

    fn read<T: DataType>(&self, key: &NamespacedKey) -> Result<T> {
        if !self.container.has(key) {
            return Err(DataManagerError::KeyAbsent { key: key.clone() });
        }
        let mismatch = DataManagerError::TypeMismatch { data_type: T::TYPE };
        if !self.container.has_type(key, T::TYPE) {
            return Err(mismatch);
        }
        self.container
            .get(key, T::TYPE)
            .and_then(T::from_value)
            .ok_or(mismatch)
    }
}

/// Nested managers are stored as their underlying container and wrapped
/// again on read, using the default namespace.
impl DataType for DataManager {
    const TYPE: PersistentDataType = PersistentDataType::TagContainer;

    fn into_value(self) -> Value {
        Value::TagContainer(self.container)
    }

    fn from_value(value: Value) -> Option<Self> {
        MemoryContainer::from_value(value).map(Self::new)
    }
}
