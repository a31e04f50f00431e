//! # MCData Schema
//!
//! Descriptor tables and the class model for code generation.
//!
//! This crate provides:
//! - Type and key descriptor tables, with the built-in defaults
//! - XML descriptor parsing
//! - Descriptor validation
//! - The in-memory class model the generator renders

pub mod error;
pub mod model;
pub mod parser;
pub mod tables;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use model::{
    AccessModifier, ArgumentSpec, ClassModel, FieldModel, MethodDocumentation, MethodModel,
    ReturnSpec, Statement, ThrowsEntry,
};
pub use parser::{parse_descriptors, parse_descriptors_file};
pub use tables::{DescriptorTables, KeyBinding, TypeBinding};
pub use validation::{validate_class_name, validate_package, validate_tables};
