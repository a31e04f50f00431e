//! Generator configuration.

use crate::error::CodegenError;
use mcdata_schema::{
    DescriptorTables, parse_descriptors_file, validate_class_name, validate_package,
    validate_tables,
};
use std::path::PathBuf;

/// Default generated class name.
pub const DEFAULT_CLASS_NAME: &str = "DataManager";

/// Default package of the generated class.
pub const DEFAULT_PACKAGE: &str = "ru.vladislav117.mcdata";

/// Default process-wide namespace baked into the generated class.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Java source root, relative to the project directory.
const SOURCE_ROOT: &str = "src/main/java";

/// Host API classes every generated class uses.
const HOST_IMPORTS: &[&str] = &[
    "org.bukkit.NamespacedKey",
    "org.bukkit.persistence.PersistentDataContainer",
    "org.bukkit.persistence.PersistentDataType",
    "org.jetbrains.annotations.Nullable",
];

/// Error classes, imported from the `error` subpackage.
const ERROR_CLASSES: &[&str] = &["DataManagerKeyError", "DataManagerTypeError"];

/// Where the descriptor tables come from.
#[derive(Debug, Clone, Default)]
pub enum DescriptorSource {
    /// The built-in tables.
    #[default]
    Builtin,
    /// An XML descriptor file.
    File(PathBuf),
    /// Tables supplied by the caller.
    Tables(DescriptorTables),
}

/// Configuration for a generation run.
///
/// The output path and imports follow the class name and package unless set
/// explicitly.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    class_name: String,
    package: Option<String>,
    imports: Option<Vec<String>>,
    output_path: Option<PathBuf>,
    default_namespace: String,
    source: DescriptorSource,
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generated class name.
    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Sets the package, or `None` for the default package.
    #[must_use]
    pub fn package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    /// Replaces the import list.
    #[must_use]
    pub fn imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = Some(imports.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the output path, relative to the project directory.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Sets the default namespace baked into the generated class.
    #[must_use]
    pub fn default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    /// Sets the descriptor source.
    #[must_use]
    pub fn source(mut self, source: DescriptorSource) -> Self {
        self.source = source;
        self
    }

    /// Returns the generated class name.
    #[must_use]
    pub fn get_class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the package.
    #[must_use]
    pub fn get_package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Returns the imports.
    ///
    /// Unless replaced, these are the host API imports plus the two error
    /// classes from the `error` subpackage of the configured package.
    #[must_use]
    pub fn get_imports(&self) -> Vec<String> {
        if let Some(imports) = &self.imports {
            return imports.clone();
        }

        let mut imports: Vec<String> = HOST_IMPORTS.iter().map(ToString::to_string).collect();
        // Classes in the default package cannot be imported.
        if let Some(package) = &self.package {
            imports.extend(
                ERROR_CLASSES
                    .iter()
                    .map(|class| format!("{package}.error.{class}")),
            );
        }
        imports
    }

    /// Returns the output path, relative to the project directory.
    ///
    /// Unless set, this is `src/main/java/<package path>/<class>.java`.
    #[must_use]
    pub fn get_output_path(&self) -> PathBuf {
        if let Some(path) = &self.output_path {
            return path.clone();
        }

        let mut path = PathBuf::from(SOURCE_ROOT);
        if let Some(package) = &self.package {
            path.extend(package.split('.'));
        }
        path.push(format!("{}.java", self.class_name));
        path
    }

    /// Returns the default namespace.
    #[must_use]
    pub fn get_default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// Checks the class name, package and default namespace.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if the class name or package is not a
    /// Java name, or `CodegenError::Config` if the default namespace is not a
    /// valid Bukkit namespace.
    pub fn validate(&self) -> Result<(), CodegenError> {
        validate_class_name(&self.class_name)?;
        if let Some(package) = &self.package {
            validate_package(package)?;
        }
        if !is_valid_namespace(&self.default_namespace) {
            return Err(CodegenError::config(format!(
                "default namespace '{}' must be non-empty and use only [a-z0-9._-]",
                self.default_namespace
            )));
        }
        Ok(())
    }

    /// Loads and validates the descriptor tables.
    ///
    /// # Errors
    /// Returns `CodegenError` if the descriptor file cannot be read or
    /// parsed, or if the tables are invalid.
    pub fn load_tables(&self) -> Result<DescriptorTables, CodegenError> {
        let tables = match &self.source {
            DescriptorSource::Builtin => DescriptorTables::builtin(&self.class_name),
            DescriptorSource::File(path) => parse_descriptors_file(path)?,
            DescriptorSource::Tables(tables) => tables.clone(),
        };
        validate_tables(&tables)?;
        tracing::debug!(
            types = tables.types.len(),
            keys = tables.keys.len(),
            "descriptor tables loaded"
        );
        Ok(tables)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            package: Some(DEFAULT_PACKAGE.to_string()),
            imports: None,
            output_path: None,
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            source: DescriptorSource::Builtin,
        }
    }
}

/// Bukkit namespaces are lowercase `[a-z0-9._-]+`.
fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-'))
}
