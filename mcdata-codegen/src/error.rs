//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Descriptor parsing error.
    #[error("descriptor parse error: {0}")]
    Parse(#[from] mcdata_schema::ParseError),

    /// Descriptor or model validation error.
    #[error("schema error: {0}")]
    Schema(#[from] mcdata_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write the output file.
    #[error("failed to write '{path}': {source}")]
    Write {
        /// Path being written.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid generator configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The class model cannot be rendered.
    #[error("emission error: {message}")]
    Emit {
        /// Error message.
        message: String,
    },

    /// A custom type binding does not name the generated class.
    #[error("custom type '{name}' must be spelled '{expected}', found '{found}'")]
    UnsupportedCustomType {
        /// Type binding name.
        name: String,
        /// Generated class name.
        expected: String,
        /// Spelling found in the binding.
        found: String,
    },
}

impl CodegenError {
    /// Creates an emission error with the given message.
    pub fn emit(message: impl Into<String>) -> Self {
        Self::Emit {
            message: message.into(),
        }
    }

    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a write error for `path`.
    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }
}
