//! Host persistence capability.
//!
//! [`PersistentDataContainer`] is the four-operation contract generated
//! wrappers call into. [`MemoryContainer`] is an in-memory implementation
//! used by the reference [`DataManager`](crate::manager::DataManager).

use crate::key::NamespacedKey;
use crate::types::{PersistentDataType, Value};
use std::collections::BTreeMap;

/// A container addressed by namespaced keys.
pub trait PersistentDataContainer {
    /// Returns true if any value is stored under `key`.
    fn has(&self, key: &NamespacedKey) -> bool;

    /// Returns true if a value of `data_type` is stored under `key`.
    fn has_type(&self, key: &NamespacedKey, data_type: PersistentDataType) -> bool;

    /// Reads the value stored under `key` if it has `data_type`.
    fn get(&self, key: &NamespacedKey, data_type: PersistentDataType) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: NamespacedKey, value: Value);
}

/// In-memory container.
///
/// Entries are kept ordered by key so iteration and debug output are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryContainer {
    entries: BTreeMap<NamespacedKey, Value>,
}

impl MemoryContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &NamespacedKey> {
        self.entries.keys()
    }

    /// Removes the entry under `key`, returning it if present.
    pub fn remove(&mut self, key: &NamespacedKey) -> Option<Value> {
        self.entries.remove(key)
    }
}

impl PersistentDataContainer for MemoryContainer {
    fn has(&self, key: &NamespacedKey) -> bool {
        self.entries.contains_key(key)
    }

    fn has_type(&self, key: &NamespacedKey, data_type: PersistentDataType) -> bool {
        self.entries
            .get(key)
            .is_some_and(|value| value.data_type() == data_type)
    }

    fn get(&self, key: &NamespacedKey, data_type: PersistentDataType) -> Option<Value> {
        self.entries
            .get(key)
            .filter(|value| value.data_type() == data_type)
            .cloned()
    }

    fn set(&mut self, key: NamespacedKey, value: Value) {
        self.entries.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> NamespacedKey {
        NamespacedKey::new("test", name)
    }

    #[test]
    fn test_new_is_empty() {
        let container = MemoryContainer::new();
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
        assert!(!container.has(&key("a")));
    }

    #[test]
    fn test_set_and_typed_lookup() {
        let mut container = MemoryContainer::new();
        container.set(key("a"), Value::Integer(5));

        assert!(container.has(&key("a")));
        assert!(container.has_type(&key("a"), PersistentDataType::Integer));
        assert!(!container.has_type(&key("a"), PersistentDataType::Long));
        assert_eq!(
            container.get(&key("a"), PersistentDataType::Integer),
            Some(Value::Integer(5))
        );
        assert_eq!(container.get(&key("a"), PersistentDataType::Long), None);
    }

    #[test]
    fn test_set_replaces_value_and_type() {
        let mut container = MemoryContainer::new();
        container.set(key("a"), Value::Integer(5));
        container.set(key("a"), Value::String("five".into()));

        assert_eq!(container.len(), 1);
        assert!(container.has_type(&key("a"), PersistentDataType::String));
        assert!(!container.has_type(&key("a"), PersistentDataType::Integer));
    }

    #[test]
    fn test_keys_are_namespace_qualified() {
        let mut container = MemoryContainer::new();
        container.set(NamespacedKey::new("one", "a"), Value::Boolean(true));

        assert!(!container.has(&NamespacedKey::new("two", "a")));
        let keys: Vec<_> = container.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["one:a"]);
    }

    #[test]
    fn test_remove() {
        let mut container = MemoryContainer::new();
        container.set(key("a"), Value::Byte(1));
        assert_eq!(container.remove(&key("a")), Some(Value::Byte(1)));
        assert!(container.is_empty());
        assert_eq!(container.remove(&key("a")), None);
    }
}
