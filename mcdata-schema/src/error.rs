//! Error types for descriptor parsing and validation.

use thiserror::Error;

/// Error type for descriptor parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Invalid document structure.
    #[error("invalid descriptor structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }
}

/// Error type for descriptor and model validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A descriptor table has no entries.
    #[error("{table} table is empty")]
    EmptyTable {
        /// Table name.
        table: &'static str,
    },

    /// Two type bindings share a name.
    #[error("duplicate type binding '{name}'")]
    DuplicateType {
        /// Duplicated name.
        name: String,
    },

    /// Two key bindings take the same argument type.
    #[error("duplicate key binding for argument type '{type_name}'")]
    DuplicateKey {
        /// Duplicated argument type.
        type_name: String,
    },

    /// Two fields share a name.
    #[error("duplicate field '{name}' in class '{class}'")]
    DuplicateField {
        /// Class name.
        class: String,
        /// Duplicated field name.
        name: String,
    },

    /// Two methods share a name and argument types.
    #[error("duplicate method signature '{signature}' in class '{class}'")]
    DuplicateMethod {
        /// Class name.
        class: String,
        /// Method name and argument types.
        signature: String,
    },

    /// A name is not usable as an identifier.
    #[error("invalid identifier '{value}' for {what}")]
    InvalidIdentifier {
        /// What the identifier names.
        what: &'static str,
        /// Offending value.
        value: String,
    },

    /// A key argument uses a name the generated bodies already use.
    #[error("key argument name '{name}' is reserved: {reason}")]
    ReservedArgument {
        /// Argument name.
        name: String,
        /// Why the name is reserved.
        reason: &'static str,
    },
}

impl SchemaError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(what: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            what,
            value: value.into(),
        }
    }
}
