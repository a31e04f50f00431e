//! # MCData
//!
//! Generates a typed Java `DataManager` wrapper over Bukkit's
//! `PersistentDataContainer`, and ships a Rust reference runtime with the
//! same accessor contract.
//!
//! ## Quick Start
//!
//! ```
//! use mcdata::prelude::*;
//!
//! let source = Generator::default().generate().expect("generation");
//! assert!(source.contains("public class DataManager {"));
//!
//! let mut manager = DataManager::with_namespace(MemoryContainer::new(), "plugin");
//! manager.set("score", 42_i32);
//! assert_eq!(manager.get::<i32>("score").ok(), Some(42));
//! assert!(!manager.is::<String>("score"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Reference runtime: keys, containers, the data manager
//! - [`schema`] - Descriptor tables, XML loading and the class model
//! - [`codegen`] - Accessor synthesis, Java emission and output

pub mod prelude;

/// Reference runtime.
pub mod core {
    pub use mcdata_core::*;
}

/// Descriptor tables and class model.
pub mod schema {
    pub use mcdata_schema::*;
}

/// Java source generation.
pub mod codegen {
    pub use mcdata_codegen::*;
}

pub use mcdata_codegen::{CodegenError, Generator, GeneratorConfig};
pub use mcdata_core::{DataManager, DataManagerError, MemoryContainer, NamespacedKey};
