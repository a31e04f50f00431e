//! In-memory class model used as the code generation target.
//!
//! A [`ClassModel`] describes one Java class: its compilation-unit header,
//! documentation, fields and methods. Members are built with consuming
//! `with_*` methods and appended to the class once fully populated.
//! Methods may share a name as long as their argument types differ.

use crate::error::SchemaError;
use std::collections::HashSet;

/// Member access modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessModifier {
    /// `public`.
    #[default]
    Public,
    /// `protected`.
    Protected,
    /// `private`.
    Private,
    /// Package-private (no keyword).
    PackagePrivate,
}

impl AccessModifier {
    /// Returns the Java keyword, or `None` for package-private access.
    #[must_use]
    pub const fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Public => Some("public"),
            Self::Protected => Some("protected"),
            Self::Private => Some("private"),
            Self::PackagePrivate => None,
        }
    }
}

/// A method argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    /// Argument type.
    pub type_name: String,
    /// Argument name.
    pub name: String,
    /// Description used in `@param`.
    pub description: String,
}

impl ArgumentSpec {
    /// Creates an argument without a description.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A method return specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnSpec {
    /// Return type.
    pub type_name: String,
    /// Description used in `@return`.
    pub description: String,
    /// Whether the return type is annotated as nullable.
    pub nullable: bool,
}

impl ReturnSpec {
    /// Creates a non-nullable return spec without a description.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            description: String::new(),
            nullable: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the return value as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// One statement of a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A single line of code, without the trailing semicolon.
    Raw(String),
    /// `if (condition) then;` with no else branch.
    GuardedReturn {
        /// Condition expression.
        condition: String,
        /// Single statement run when the condition holds.
        then: String,
    },
}

impl Statement {
    /// Creates a raw statement.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Creates a guarded single-statement conditional.
    #[must_use]
    pub fn guarded(condition: impl Into<String>, then: impl Into<String>) -> Self {
        Self::GuardedReturn {
            condition: condition.into(),
            then: then.into(),
        }
    }
}

/// A `@throws` documentation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowsEntry {
    /// Thrown error class.
    pub error_kind: String,
    /// When the error is thrown.
    pub description: String,
}

/// Method documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDocumentation {
    /// Description lines.
    pub lines: Vec<String>,
    /// Throw entries, in order.
    pub throws: Vec<ThrowsEntry>,
}

impl MethodDocumentation {
    /// Creates empty documentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a description line.
    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Appends a throw entry.
    #[must_use]
    pub fn throws(mut self, error_kind: impl Into<String>, description: impl Into<String>) -> Self {
        self.throws.push(ThrowsEntry {
            error_kind: error_kind.into(),
            description: description.into(),
        });
        self
    }

    /// Returns true if there is nothing to document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.throws.is_empty()
    }
}

/// A class field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldModel {
    /// Field type.
    pub type_name: String,
    /// Field name.
    pub name: String,
    /// Access modifier, `protected` unless set.
    pub access: AccessModifier,
    /// Whether the field is static.
    pub is_static: bool,
    /// Initializer expression.
    pub initializer: Option<String>,
}

impl FieldModel {
    /// Creates a protected instance field.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            access: AccessModifier::Protected,
            is_static: false,
            initializer: None,
        }
    }

    /// Sets the access modifier.
    #[must_use]
    pub fn with_access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// Makes the field static.
    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Sets the initializer expression.
    #[must_use]
    pub fn with_initializer(mut self, expression: impl Into<String>) -> Self {
        self.initializer = Some(expression.into());
        self
    }
}

/// A class method or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodModel {
    /// Method name (the class name for constructors).
    pub name: String,
    /// Documentation.
    pub documentation: MethodDocumentation,
    /// Whether this is a constructor.
    pub is_constructor: bool,
    /// Whether the method is static.
    pub is_static: bool,
    /// Access modifier, `public` unless set.
    pub access: AccessModifier,
    /// Return spec, `None` for constructors and void methods.
    pub return_spec: Option<ReturnSpec>,
    /// Arguments in order.
    pub arguments: Vec<ArgumentSpec>,
    /// Body statements in order.
    pub body: Vec<Statement>,
}

impl MethodModel {
    /// Creates a public void method.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: MethodDocumentation::default(),
            is_constructor: false,
            is_static: false,
            access: AccessModifier::Public,
            return_spec: None,
            arguments: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Creates a public constructor for `class_name`.
    #[must_use]
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self {
            is_constructor: true,
            ..Self::new(class_name)
        }
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, documentation: MethodDocumentation) -> Self {
        self.documentation = documentation;
        self
    }

    /// Makes the method static.
    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Sets the access modifier.
    #[must_use]
    pub fn with_access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// Sets the return spec.
    #[must_use]
    pub fn with_return(mut self, return_spec: ReturnSpec) -> Self {
        self.return_spec = Some(return_spec);
        self
    }

    /// Appends an argument.
    #[must_use]
    pub fn with_argument(mut self, argument: ArgumentSpec) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Appends a body statement.
    #[must_use]
    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    /// Appends body statements.
    #[must_use]
    pub fn with_statements(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(statements);
        self
    }

    /// Returns the overload signature, e.g. `getInteger(String)`.
    #[must_use]
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self
            .arguments
            .iter()
            .map(|a| a.type_name.as_str())
            .collect();
        format!("{}({})", self.name, types.join(", "))
    }
}

/// A class awaiting emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassModel {
    /// Class name.
    pub name: String,
    /// Access modifier.
    pub access: AccessModifier,
    /// Package the compilation unit belongs to.
    pub package: Option<String>,
    /// Fully qualified imports, in order.
    pub imports: Vec<String>,
    /// Class documentation lines.
    pub documentation: Vec<String>,
    /// Fields, unique by name.
    pub fields: Vec<FieldModel>,
    /// Methods, unique by signature.
    pub methods: Vec<MethodModel>,
}

impl ClassModel {
    /// Creates an empty public class.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessModifier::Public,
            package: None,
            imports: Vec::new(),
            documentation: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Sets the package.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Appends imports.
    #[must_use]
    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    /// Appends a documentation line.
    #[must_use]
    pub fn with_doc_line(mut self, line: impl Into<String>) -> Self {
        self.documentation.push(line.into());
        self
    }

    /// Sets the access modifier.
    #[must_use]
    pub fn with_access(mut self, access: AccessModifier) -> Self {
        self.access = access;
        self
    }

    /// Appends a field.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateField` if a field with the same name
    /// already exists.
    pub fn add_field(&mut self, field: FieldModel) -> Result<(), SchemaError> {
        if self.field(&field.name).is_some() {
            return Err(SchemaError::DuplicateField {
                class: self.name.clone(),
                name: field.name,
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Appends a method.
    pub fn add_method(&mut self, method: MethodModel) {
        self.methods.push(method);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterates over the methods (or constructors) with the given name.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodModel> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// Checks that no two methods share a signature.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateMethod` naming the first clash.
    pub fn check_overloads(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for method in &self.methods {
            let signature = method.signature();
            if !seen.insert(signature.clone()) {
                return Err(SchemaError::DuplicateMethod {
                    class: self.name.clone(),
                    signature,
                });
            }
        }
        Ok(())
    }
}
