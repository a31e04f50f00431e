//! Descriptor table validation.
//!
//! Validation never reorders the tables. Any error is fatal for generation.

use crate::error::SchemaError;
use crate::tables::{DescriptorTables, KeyBinding, TypeBinding};
use std::collections::HashSet;

/// Names every generated body uses for its own purposes.
const RESERVED_ARGUMENTS: &[(&str, &str)] = &[
    ("value", "used by setters"),
    ("defaultValue", "used by or-default getters"),
    ("container", "shadows the container field"),
    ("namespace", "shadows the namespace field"),
];

/// Validates descriptor tables for generation.
///
/// # Arguments
/// * `tables` - The tables to validate
///
/// # Errors
/// Returns `SchemaError` describing the first problem found.
pub fn validate_tables(tables: &DescriptorTables) -> Result<(), SchemaError> {
    validate_types(&tables.types)?;
    validate_keys(&tables.keys)?;
    Ok(())
}

/// Validates the type table.
fn validate_types(types: &[TypeBinding]) -> Result<(), SchemaError> {
    if types.is_empty() {
        return Err(SchemaError::EmptyTable { table: "type" });
    }

    let mut seen_names = HashSet::new();
    for binding in types {
        if !is_identifier(&binding.name) {
            return Err(SchemaError::invalid_identifier("type name", &binding.name));
        }
        if !seen_names.insert(binding.name.as_str()) {
            return Err(SchemaError::DuplicateType {
                name: binding.name.clone(),
            });
        }
        if !is_identifier(&binding.storage_constant) {
            return Err(SchemaError::invalid_identifier(
                "storage constant",
                &binding.storage_constant,
            ));
        }
        if !is_type_spelling(&binding.primitive_type) {
            return Err(SchemaError::invalid_identifier(
                "primitive type",
                &binding.primitive_type,
            ));
        }
        if !is_type_spelling(&binding.boxed_type) {
            return Err(SchemaError::invalid_identifier(
                "boxed type",
                &binding.boxed_type,
            ));
        }
    }

    Ok(())
}

/// Validates the key table.
fn validate_keys(keys: &[KeyBinding]) -> Result<(), SchemaError> {
    if keys.is_empty() {
        return Err(SchemaError::EmptyTable { table: "key" });
    }

    let mut seen_types = HashSet::new();
    for binding in keys {
        let argument = &binding.argument;
        if !is_identifier(&argument.name) {
            return Err(SchemaError::invalid_identifier("key argument", &argument.name));
        }
        if !is_type_spelling(&argument.type_name) {
            return Err(SchemaError::invalid_identifier(
                "key argument type",
                &argument.type_name,
            ));
        }
        // Overloads are told apart by argument type only.
        if !seen_types.insert(argument.type_name.as_str()) {
            return Err(SchemaError::DuplicateKey {
                type_name: argument.type_name.clone(),
            });
        }
        if let Some(&(name, reason)) = RESERVED_ARGUMENTS
            .iter()
            .find(|(name, _)| *name == argument.name)
        {
            return Err(SchemaError::ReservedArgument {
                name: name.to_string(),
                reason,
            });
        }
        if binding.is_indirect && argument.name == "key" {
            return Err(SchemaError::ReservedArgument {
                name: argument.name.clone(),
                reason: "holds the resolved key",
            });
        }
    }

    Ok(())
}

/// Java keywords and literals that cannot name a class or package.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// Checks that `value` can name a Java class.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if `value` is not an identifier
/// or is a Java keyword.
pub fn validate_class_name(value: &str) -> Result<(), SchemaError> {
    if !is_identifier(value) || JAVA_KEYWORDS.contains(&value) {
        return Err(SchemaError::invalid_identifier("class name", value));
    }
    Ok(())
}

/// Checks that `value` is a dotted Java package name.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` if any segment is not an
/// identifier or is a Java keyword.
pub fn validate_package(value: &str) -> Result<(), SchemaError> {
    let valid = value
        .split('.')
        .all(|segment| is_identifier(segment) && !JAVA_KEYWORDS.contains(&segment));
    if !valid {
        return Err(SchemaError::invalid_identifier("package", value));
    }
    Ok(())
}

/// Returns true for `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true for an identifier optionally followed by `[]` pairs,
/// with dots allowed for qualified names.
fn is_type_spelling(s: &str) -> bool {
    let base = s.trim_end_matches("[]");
    !base.is_empty() && base.split('.').all(is_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArgumentSpec;

    fn tables() -> DescriptorTables {
        DescriptorTables::builtin("DataManager")
    }

    #[test]
    fn test_builtin_tables_are_valid() {
        assert!(validate_tables(&tables()).is_ok());
    }

    #[test]
    fn test_empty_tables() {
        let mut t = tables();
        t.types.clear();
        assert!(matches!(
            validate_tables(&t),
            Err(SchemaError::EmptyTable { table: "type" })
        ));

        let mut t = tables();
        t.keys.clear();
        assert!(matches!(
            validate_tables(&t),
            Err(SchemaError::EmptyTable { table: "key" })
        ));
    }

    #[test]
    fn test_duplicate_type_name() {
        let mut t = tables();
        t.types
            .push(TypeBinding::new("Integer", "long", "Long", "LONG"));
        let err = validate_tables(&t).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType { ref name } if name == "Integer"));
    }

    #[test]
    fn test_invalid_type_name() {
        let mut t = tables();
        t.types[0].name = "Big Integer".to_string();
        assert!(matches!(
            validate_tables(&t),
            Err(SchemaError::InvalidIdentifier { what: "type name", .. })
        ));
    }

    #[test]
    fn test_invalid_storage_constant() {
        let mut t = tables();
        t.types[0].storage_constant = String::new();
        assert!(matches!(
            validate_tables(&t),
            Err(SchemaError::InvalidIdentifier {
                what: "storage constant",
                ..
            })
        ));
    }

    #[test]
    fn test_array_and_qualified_type_spellings() {
        assert!(is_type_spelling("byte[]"));
        assert!(is_type_spelling("int[][]"));
        assert!(is_type_spelling("java.util.UUID"));
        assert!(!is_type_spelling("[]"));
        assert!(!is_type_spelling(""));
        assert!(!is_type_spelling("java..UUID"));
    }

    #[test]
    fn test_duplicate_key_type() {
        let mut t = tables();
        t.keys.push(KeyBinding::indirect(ArgumentSpec::new(
            "String",
            "otherKey",
        )));
        let err = validate_tables(&t).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateKey { ref type_name } if type_name == "String"));
    }

    #[test]
    fn test_reserved_key_argument() {
        let mut t = tables();
        t.keys[1].argument.name = "value".to_string();
        assert!(matches!(
            validate_tables(&t),
            Err(SchemaError::ReservedArgument { .. })
        ));
    }

    #[test]
    fn test_indirect_key_cannot_be_named_key() {
        let mut t = tables();
        t.keys[1].argument.name = "key".to_string();
        let err = validate_tables(&t).unwrap_err();
        assert!(err.to_string().contains("holds the resolved key"));
    }

    #[test]
    fn test_class_name() {
        assert!(validate_class_name("DataManager").is_ok());
        assert!(validate_class_name("Store_2").is_ok());
        assert!(matches!(
            validate_class_name("My Class"),
            Err(SchemaError::InvalidIdentifier { what: "class name", .. })
        ));
        assert!(validate_class_name("").is_err());
        assert!(validate_class_name("2Store").is_err());
        assert!(validate_class_name("class").is_err());
    }

    #[test]
    fn test_package() {
        assert!(validate_package("ru.vladislav117.mcdata").is_ok());
        assert!(validate_package("com").is_ok());
        assert!(validate_package("com..example").is_err());
        assert!(validate_package("com.example.").is_err());
        assert!(validate_package("com.new.api").is_err());
        assert!(matches!(
            validate_package("com.my-plugin"),
            Err(SchemaError::InvalidIdentifier { what: "package", .. })
        ));
    }

    #[test]
    fn test_direct_key_may_use_any_free_name() {
        let mut t = tables();
        t.keys[0].argument.name = "namespacedKey".to_string();
        assert!(validate_tables(&t).is_ok());
    }
}
