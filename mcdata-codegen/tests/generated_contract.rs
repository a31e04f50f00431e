//! Checks the generated source against the reference runtime.

use mcdata_codegen::Generator;
use mcdata_core::PersistentDataType;
use mcdata_schema::DescriptorTables;

#[test]
fn test_every_storage_constant_is_a_runtime_type() {
    let tables = DescriptorTables::builtin("DataManager");
    for binding in &tables.types {
        assert!(
            PersistentDataType::from_token(&binding.storage_constant).is_some(),
            "unknown storage constant {}",
            binding.storage_constant
        );
    }
}

#[test]
fn test_every_runtime_type_is_generated() {
    let source = Generator::default().generate().expect("generate");
    for data_type in PersistentDataType::ALL {
        let token = format!("PersistentDataType.{}", data_type.token());
        assert!(source.contains(&token), "no accessor uses {token}");
    }
}

#[test]
fn test_custom_type_maps_to_nested_container() {
    let tables = DescriptorTables::builtin("DataManager");
    for binding in tables.types.iter().filter(|t| t.is_custom) {
        assert_eq!(
            PersistentDataType::from_token(&binding.storage_constant),
            Some(PersistentDataType::TagContainer)
        );
    }
}

#[test]
fn test_accessor_counts() {
    let source = Generator::default().generate().expect("generate");
    let tables = DescriptorTables::builtin("DataManager");

    for binding in &tables.types {
        let getter = format!(" get{}(", binding.name);
        let setter = format!(" set{}(", binding.name);
        assert_eq!(source.matches(&getter).count(), tables.keys.len(), "{getter}");
        assert_eq!(source.matches(&setter).count(), tables.keys.len(), "{setter}");
    }
    assert_eq!(source.matches("throw new DataManagerKeyError(key);").count(), 24);
    assert_eq!(source.matches("throw new DataManagerTypeError(").count(), 24);
}
