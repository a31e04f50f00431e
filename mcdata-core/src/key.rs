//! Namespaced keys and key arguments.

use std::fmt;

/// A key qualified by a namespace, displayed as `namespace:key`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacedKey {
    namespace: String,
    key: String,
}

impl NamespacedKey {
    /// Creates a new namespaced key.
    #[must_use]
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Parses a key of the form `namespace:key`.
    ///
    /// Returns `None` if the separator is missing or either part is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (namespace, key) = s.split_once(':')?;
        if namespace.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self::new(namespace, key))
    }

    /// Returns the namespace part.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the local key part.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

/// A way of addressing an entry.
///
/// Fully qualified keys are used as-is. Local keys (`&str`, `String`) are
/// resolved against the namespace of the manager they are passed to.
pub trait KeyArgument {
    /// Resolves the argument into a fully qualified key.
    fn resolve(self, namespace: &str) -> NamespacedKey;
}

impl KeyArgument for NamespacedKey {
    #[inline]
    fn resolve(self, _namespace: &str) -> NamespacedKey {
        self
    }
}

impl KeyArgument for &NamespacedKey {
    #[inline]
    fn resolve(self, _namespace: &str) -> NamespacedKey {
        self.clone()
    }
}

impl KeyArgument for &str {
    #[inline]
    fn resolve(self, namespace: &str) -> NamespacedKey {
        NamespacedKey::new(namespace, self)
    }
}

impl KeyArgument for String {
    #[inline]
    fn resolve(self, namespace: &str) -> NamespacedKey {
        NamespacedKey::new(namespace, self)
    }
}

impl KeyArgument for &String {
    #[inline]
    fn resolve(self, namespace: &str) -> NamespacedKey {
        NamespacedKey::new(namespace, self.as_str())
    }
}
