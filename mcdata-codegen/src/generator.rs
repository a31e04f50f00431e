//! Generation pipeline.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::java::JavaEmitter;
use crate::output::write_atomic;
use crate::synthesizer::Synthesizer;
use mcdata_schema::ClassModel;
use std::path::{Path, PathBuf};

/// Runs descriptor loading, synthesis, emission and output.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the class model without rendering it.
    ///
    /// # Errors
    /// Returns `CodegenError` if the configuration is invalid, the tables
    /// cannot be loaded or are invalid, or synthesis fails.
    pub fn model(&self) -> Result<ClassModel, CodegenError> {
        self.config.validate()?;
        let tables = self.config.load_tables()?;
        Synthesizer::new(&tables, &self.config).synthesize()
    }

    /// Generates the source text.
    ///
    /// # Returns
    /// The complete compilation unit. Unchanged tables and configuration
    /// always produce identical text.
    ///
    /// # Errors
    /// Returns `CodegenError` if any stage fails.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let class = self.model()?;
        JavaEmitter::new(&class).emit()
    }

    /// Generates the source text and writes it under `project_dir`.
    ///
    /// # Arguments
    /// * `project_dir` - Root of the project receiving the file
    ///
    /// # Returns
    /// The path written.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or the write fails. Nothing is
    /// written when generation fails.
    pub fn write_to(&self, project_dir: &Path) -> Result<PathBuf, CodegenError> {
        let source = self.generate()?;
        let path = project_dir.join(self.config.get_output_path());
        write_atomic(&path, &source)?;
        tracing::info!(path = %path.display(), bytes = source.len(), "generated source written");
        Ok(path)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
