//! # MCData Codegen
//!
//! Generation of the Java `DataManager` wrapper over Bukkit's
//! `PersistentDataContainer`.
//!
//! This crate provides:
//! - Accessor synthesis from the type and key descriptor tables
//! - Java source emission from the class model
//! - Generator configuration and atomic output writing

pub mod config;
pub mod error;
pub mod generator;
pub mod java;
pub mod output;
pub mod synthesizer;

pub use config::{DescriptorSource, GeneratorConfig};
pub use error::CodegenError;
pub use generator::Generator;
pub use synthesizer::Synthesizer;

/// Generates the wrapper source with the default configuration.
///
/// # Returns
/// Generated Java code as a string.
///
/// # Errors
/// Returns `CodegenError` if generation fails.
pub fn generate_default() -> Result<String, CodegenError> {
    Generator::default().generate()
}

/// Generates the wrapper source from an XML descriptor file.
///
/// # Arguments
/// * `path` - Path to the descriptor file
///
/// # Returns
/// Generated Java code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation
/// fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let config = GeneratorConfig::new().source(DescriptorSource::File(path.to_path_buf()));
    Generator::new(config).generate()
}
