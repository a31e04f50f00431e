//! Descriptor tables.
//!
//! The generator cross-products a table of [`TypeBinding`]s against a table
//! of [`KeyBinding`]s. Both tables are ordered and the order is preserved
//! through generation.

use crate::model::ArgumentSpec;

/// Describes one storable data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeBinding {
    /// Method name suffix, e.g. `Integer` for `getInteger`.
    pub name: String,
    /// Unboxed type spelling, e.g. `int`.
    pub primitive_type: String,
    /// Boxed (nullable) type spelling, e.g. `Integer`.
    pub boxed_type: String,
    /// Host storage token, e.g. `INTEGER`.
    pub storage_constant: String,
    /// True when the value is a nested instance of the generated class.
    pub is_custom: bool,
}

impl TypeBinding {
    /// Creates a binding for a plain value type.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        primitive_type: impl Into<String>,
        boxed_type: impl Into<String>,
        storage_constant: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primitive_type: primitive_type.into(),
            boxed_type: boxed_type.into(),
            storage_constant: storage_constant.into(),
            is_custom: false,
        }
    }

    /// Creates a binding for a nested instance of `class_name`.
    #[must_use]
    pub fn custom(
        name: impl Into<String>,
        class_name: impl Into<String>,
        storage_constant: impl Into<String>,
    ) -> Self {
        let class_name = class_name.into();
        Self {
            name: name.into(),
            primitive_type: class_name.clone(),
            boxed_type: class_name,
            storage_constant: storage_constant.into(),
            is_custom: true,
        }
    }
}

/// Describes one way a caller addresses an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// How the key is passed in.
    pub argument: ArgumentSpec,
    /// True when the argument is a local key that must be resolved against
    /// the instance namespace.
    pub is_indirect: bool,
}

impl KeyBinding {
    /// Creates a binding whose argument already is a qualified key.
    #[must_use]
    pub fn direct(argument: ArgumentSpec) -> Self {
        Self {
            argument,
            is_indirect: false,
        }
    }

    /// Creates a binding whose argument is resolved against the namespace.
    #[must_use]
    pub fn indirect(argument: ArgumentSpec) -> Self {
        Self {
            argument,
            is_indirect: true,
        }
    }
}

/// The two ordered descriptor tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorTables {
    /// Type bindings, in generation order.
    pub types: Vec<TypeBinding>,
    /// Key bindings, in generation order.
    pub keys: Vec<KeyBinding>,
}

impl DescriptorTables {
    /// Creates tables from the given bindings.
    #[must_use]
    pub fn new(types: Vec<TypeBinding>, keys: Vec<KeyBinding>) -> Self {
        Self { types, keys }
    }

    /// Returns the built-in tables for a wrapper class named `class_name`.
    ///
    /// Eleven host value types plus the nested-container type, each
    /// addressable by a `NamespacedKey` or by a local `String` key.
    #[must_use]
    pub fn builtin(class_name: &str) -> Self {
        let types = vec![
            TypeBinding::new("Byte", "byte", "Byte", "BYTE"),
            TypeBinding::new("Short", "short", "Short", "SHORT"),
            TypeBinding::new("Integer", "int", "Integer", "INTEGER"),
            TypeBinding::new("Long", "long", "Long", "LONG"),
            TypeBinding::new("Float", "float", "Float", "FLOAT"),
            TypeBinding::new("Double", "double", "Double", "DOUBLE"),
            TypeBinding::new("Boolean", "boolean", "Boolean", "BOOLEAN"),
            TypeBinding::new("String", "String", "String", "STRING"),
            TypeBinding::new("ByteArray", "byte[]", "byte[]", "BYTE_ARRAY"),
            TypeBinding::new("IntegerArray", "int[]", "int[]", "INTEGER_ARRAY"),
            TypeBinding::new("LongArray", "long[]", "long[]", "LONG_ARRAY"),
            TypeBinding::custom("Container", class_name, "TAG_CONTAINER"),
        ];

        let keys = vec![
            KeyBinding::direct(ArgumentSpec::new("NamespacedKey", "key").with_description("Key")),
            KeyBinding::indirect(ArgumentSpec::new("String", "keyString").with_description("Key")),
        ];

        Self { types, keys }
    }

    /// Iterates over every `(type, key)` pair, types outermost.
    pub fn pairs(&self) -> impl Iterator<Item = (&TypeBinding, &KeyBinding)> {
        self.types
            .iter()
            .flat_map(move |t| self.keys.iter().map(move |k| (t, k)))
    }

    /// Looks up a type binding by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeBinding> {
        self.types.iter().find(|t| t.name == name)
    }
}
