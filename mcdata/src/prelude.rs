//! Prelude module for convenient imports.
//!
//! ```
//! use mcdata::prelude::*;
//! ```

// Runtime types
pub use mcdata_core::{
    DataManager, DataManagerError, DataType, KeyArgument, MemoryContainer, NamespacedKey,
    PersistentDataContainer, PersistentDataType, Value,
};

// Schema types
pub use mcdata_schema::{ClassModel, DescriptorTables, KeyBinding, TypeBinding};

// Generator types
pub use mcdata_codegen::{CodegenError, DescriptorSource, Generator, GeneratorConfig};
