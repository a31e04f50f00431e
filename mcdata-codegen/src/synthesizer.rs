//! Accessor method synthesis.
//!
//! Populates a [`ClassModel`] with the fixed wrapper members and, for every
//! `(type, key)` pair of the descriptor tables, the five accessors
//! `is<Name>`, `get<Name>`, `get<Name>OrNull`, `get<Name>OrDefault` and
//! `set<Name>`.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use mcdata_schema::{
    AccessModifier, ArgumentSpec, ClassModel, DescriptorTables, FieldModel, KeyBinding,
    MethodDocumentation, MethodModel, ReturnSpec, Statement, TypeBinding,
};

/// Host container type.
const CONTAINER_TYPE: &str = "PersistentDataContainer";
/// Host qualified key type.
const KEY_TYPE: &str = "NamespacedKey";
/// Host storage type token class.
const DATA_TYPE_CLASS: &str = "PersistentDataType";
/// Error raised when a key is absent.
const KEY_ERROR: &str = "DataManagerKeyError";
/// Error raised when a value has another type.
const TYPE_ERROR: &str = "DataManagerTypeError";
/// Name of the resolved key local in indirect accessors.
const RESOLVED_KEY: &str = "key";

/// What a read accessor does when a guard fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    /// Throw the guard's error.
    Raise,
    /// Return `null`.
    Null,
    /// Return the caller's `defaultValue`.
    Default,
}

impl Fallback {
    fn on_absent(self, key: &str) -> String {
        match self {
            Self::Raise => format!("throw new {KEY_ERROR}({key})"),
            Self::Null => "return null".to_string(),
            Self::Default => "return defaultValue".to_string(),
        }
    }

    fn on_mismatch(self, token: &str) -> String {
        match self {
            Self::Raise => format!("throw new {TYPE_ERROR}({token})"),
            Self::Null => "return null".to_string(),
            Self::Default => "return defaultValue".to_string(),
        }
    }
}

/// Builds the class model for the generated wrapper.
pub struct Synthesizer<'a> {
    tables: &'a DescriptorTables,
    config: &'a GeneratorConfig,
}

impl<'a> Synthesizer<'a> {
    /// Creates a new synthesizer over validated tables.
    #[must_use]
    pub fn new(tables: &'a DescriptorTables, config: &'a GeneratorConfig) -> Self {
        Self { tables, config }
    }

    /// Synthesizes the complete class model.
    ///
    /// # Returns
    /// The populated class, fixed members first, then five accessors per
    /// `(type, key)` pair with types as the outer loop.
    ///
    /// # Errors
    /// Returns `CodegenError::UnsupportedCustomType` if a custom binding does
    /// not name the generated class, or a schema error if two members clash.
    pub fn synthesize(&self) -> Result<ClassModel, CodegenError> {
        self.check_custom_types()?;

        let class_name = self.config.get_class_name();
        let mut class = ClassModel::new(class_name)
            .with_imports(self.config.get_imports())
            .with_doc_line(format!("Data manager for {CONTAINER_TYPE}."));
        if let Some(package) = self.config.get_package() {
            class = class.with_package(package);
        }

        for field in self.fields() {
            class.add_field(field)?;
        }
        for method in self.fixed_methods() {
            class.add_method(method);
        }
        for (binding, key) in self.tables.pairs() {
            class.add_method(self.is_method(binding, key));
            class.add_method(self.get_method(binding, key, Fallback::Raise));
            class.add_method(self.get_method(binding, key, Fallback::Null));
            class.add_method(self.get_method(binding, key, Fallback::Default));
            class.add_method(self.set_method(binding, key));
        }

        class.check_overloads()?;
        tracing::debug!(
            class = %class.name,
            fields = class.fields.len(),
            methods = class.methods.len(),
            "class model synthesized"
        );
        Ok(class)
    }

    /// Custom bindings wrap and unwrap instances of the generated class, so
    /// both spellings must be the class name.
    fn check_custom_types(&self) -> Result<(), CodegenError> {
        let class_name = self.config.get_class_name();
        for binding in self.tables.types.iter().filter(|t| t.is_custom) {
            for found in [&binding.primitive_type, &binding.boxed_type] {
                if found != class_name {
                    return Err(CodegenError::UnsupportedCustomType {
                        name: binding.name.clone(),
                        expected: class_name.to_string(),
                        found: found.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn fields(&self) -> Vec<FieldModel> {
        vec![
            FieldModel::new("String", "defaultNamespace")
                .with_access(AccessModifier::PackagePrivate)
                .with_static()
                .with_initializer(java_string(self.config.get_default_namespace())),
            FieldModel::new("String", "namespace"),
            FieldModel::new(CONTAINER_TYPE, "container"),
        ]
    }

    fn fixed_methods(&self) -> Vec<MethodModel> {
        let class_name = self.config.get_class_name();
        let container_arg = ArgumentSpec::new(CONTAINER_TYPE, "container").with_description("Container");

        let mut methods = vec![
            MethodModel::constructor(class_name)
                .with_doc(MethodDocumentation::new().line("Creates a data manager."))
                .with_argument(container_arg.clone())
                .with_argument(ArgumentSpec::new("String", "namespace").with_description("Namespace"))
                .with_statement(Statement::raw("this.container = container"))
                .with_statement(Statement::raw("this.namespace = namespace")),
            MethodModel::constructor(class_name)
                .with_doc(
                    MethodDocumentation::new()
                        .line("Creates a data manager.")
                        .line("The namespace is the default namespace at the time of creation."),
                )
                .with_argument(container_arg)
                .with_statement(Statement::raw("this.container = container"))
                .with_statement(Statement::raw("this.namespace = defaultNamespace")),
            MethodModel::new("getDefaultNamespace")
                .with_static()
                .with_doc(MethodDocumentation::new().line("Gets the default namespace."))
                .with_return(ReturnSpec::new("String").with_description("Default namespace."))
                .with_statement(Statement::raw("return defaultNamespace")),
            MethodModel::new("setDefaultNamespace")
                .with_static()
                .with_doc(MethodDocumentation::new().line("Sets the default namespace."))
                .with_argument(
                    ArgumentSpec::new("String", "defaultNamespace")
                        .with_description("Default namespace"),
                )
                .with_statement(Statement::raw(format!(
                    "{class_name}.defaultNamespace = defaultNamespace"
                ))),
        ];

        for key in &self.tables.keys {
            methods.push(
                MethodModel::new("contains")
                    .with_doc(
                        MethodDocumentation::new()
                            .line("Checks whether the container has a value under the key."),
                    )
                    .with_argument(key.argument.clone())
                    .with_return(
                        ReturnSpec::new("boolean")
                            .with_description("Whether the container has the key."),
                    )
                    .with_statements(resolve_key(key))
                    .with_statement(Statement::raw(format!(
                        "return container.has({})",
                        key_expr(key)
                    ))),
            );
        }

        methods
    }

    fn is_method(&self, binding: &TypeBinding, key: &KeyBinding) -> MethodModel {
        MethodModel::new(format!("is{}", binding.name))
            .with_doc(
                MethodDocumentation::new()
                    .line(format!("Checks whether the value under the key is {}.", binding.name))
                    .line("Returns false if the container has no such key."),
            )
            .with_argument(key.argument.clone())
            .with_return(
                ReturnSpec::new("boolean")
                    .with_description(format!("Whether the value is {}.", binding.name)),
            )
            .with_statements(resolve_key(key))
            .with_statement(Statement::raw(format!(
                "return container.has({}, {})",
                key_expr(key),
                storage_token(binding)
            )))
    }

    fn get_method(
        &self,
        binding: &TypeBinding,
        key: &KeyBinding,
        fallback: Fallback,
    ) -> MethodModel {
        let name = &binding.name;
        let (method_name, documentation, return_spec) = match fallback {
            Fallback::Raise => (
                format!("get{name}"),
                MethodDocumentation::new()
                    .line(format!("Gets the {name} value under the key."))
                    .line("Throws if the container has no such key.")
                    .line("Throws if the value under the key has another type.")
                    .throws(KEY_ERROR, "If the container has no such key.")
                    .throws(TYPE_ERROR, "If the value under the key has another type."),
                ReturnSpec::new(&binding.primitive_type).with_description("Value under the key."),
            ),
            Fallback::Null => (
                format!("get{name}OrNull"),
                MethodDocumentation::new()
                    .line(format!("Gets the {name} value under the key."))
                    .line("Returns null if there is no such key or the value has another type."),
                ReturnSpec::new(&binding.boxed_type)
                    .with_description("Value under the key or null.")
                    .nullable(),
            ),
            Fallback::Default => (
                format!("get{name}OrDefault"),
                MethodDocumentation::new()
                    .line(format!("Gets the {name} value under the key."))
                    .line(
                        "Returns the default value if there is no such key or the value has another type.",
                    ),
                ReturnSpec::new(&binding.boxed_type)
                    .with_description("Value under the key or the default value."),
            ),
        };

        let mut method = MethodModel::new(method_name)
            .with_doc(documentation)
            .with_argument(key.argument.clone());
        if fallback == Fallback::Default {
            method = method.with_argument(
                ArgumentSpec::new(&binding.boxed_type, "defaultValue")
                    .with_description("Default value"),
            );
        }

        let resolved = key_expr(key);
        let token = storage_token(binding);
        method
            .with_return(return_spec)
            .with_statements(resolve_key(key))
            .with_statement(Statement::guarded(
                format!("!container.has({resolved})"),
                fallback.on_absent(resolved),
            ))
            .with_statement(Statement::guarded(
                format!("!container.has({resolved}, {token})"),
                fallback.on_mismatch(&token),
            ))
            .with_statement(Statement::raw(format!(
                "return {}",
                self.read_expr(binding, resolved)
            )))
    }

    fn set_method(&self, binding: &TypeBinding, key: &KeyBinding) -> MethodModel {
        let class_name = self.config.get_class_name();
        let value = if binding.is_custom {
            "value.container"
        } else {
            "value"
        };

        MethodModel::new(format!("set{}", binding.name))
            .with_doc(
                MethodDocumentation::new().line(format!("Sets the {} value under the key.", binding.name)),
            )
            .with_argument(key.argument.clone())
            .with_argument(ArgumentSpec::new(&binding.primitive_type, "value").with_description("Value"))
            .with_return(ReturnSpec::new(class_name).with_description("This data manager."))
            .with_statements(resolve_key(key))
            .with_statement(Statement::raw(format!(
                "container.set({}, {}, {value})",
                key_expr(key),
                storage_token(binding)
            )))
            .with_statement(Statement::raw("return this"))
    }

    /// Typed read, wrapped in a new instance for custom bindings.
    fn read_expr(&self, binding: &TypeBinding, key: &str) -> String {
        let read = format!("container.get({key}, {})", storage_token(binding));
        if binding.is_custom {
            format!("new {}({read})", self.config.get_class_name())
        } else {
            read
        }
    }
}

/// Statements that turn an indirect key argument into a qualified key.
fn resolve_key(key: &KeyBinding) -> Option<Statement> {
    key.is_indirect.then(|| {
        Statement::raw(format!(
            "{KEY_TYPE} {RESOLVED_KEY} = new {KEY_TYPE}(namespace, {})",
            key.argument.name
        ))
    })
}

/// Expression naming the qualified key inside an accessor body.
fn key_expr(key: &KeyBinding) -> &str {
    if key.is_indirect {
        RESOLVED_KEY
    } else {
        &key.argument.name
    }
}

/// Storage type token expression, e.g. `PersistentDataType.INTEGER`.
fn storage_token(binding: &TypeBinding) -> String {
    format!("{DATA_TYPE_CLASS}.{}", binding.storage_constant)
}

/// Quotes `value` as a Java string literal.
fn java_string(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", u32::from(c))),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesize(tables: &DescriptorTables) -> ClassModel {
        let config = GeneratorConfig::default();
        Synthesizer::new(tables, &config)
            .synthesize()
            .expect("synthesis failed")
    }

    fn builtin() -> ClassModel {
        synthesize(&DescriptorTables::builtin("DataManager"))
    }

    fn method<'a>(class: &'a ClassModel, signature: &str) -> &'a MethodModel {
        class
            .methods
            .iter()
            .find(|m| m.signature() == signature)
            .unwrap_or_else(|| panic!("missing method {signature}"))
    }

    #[test]
    fn test_completeness() {
        let tables = DescriptorTables::builtin("DataManager");
        let class = synthesize(&tables);

        for (binding, key) in tables.pairs() {
            let arg = &key.argument.type_name;
            let name = &binding.name;
            method(&class, &format!("is{name}({arg})"));
            method(&class, &format!("get{name}({arg})"));
            method(&class, &format!("get{name}OrNull({arg})"));
            method(
                &class,
                &format!("get{name}OrDefault({arg}, {})", binding.boxed_type),
            );
            method(
                &class,
                &format!("set{name}({arg}, {})", binding.primitive_type),
            );
        }

        // 2 constructors, 2 namespace accessors, 2 contains, 12 * 2 * 5 accessors
        assert_eq!(class.methods.len(), 6 + 120);
    }

    #[test]
    fn test_fixed_members() {
        let class = builtin();
        assert_eq!(class.fields.len(), 3);

        let default_namespace = class.field("defaultNamespace").expect("field");
        assert!(default_namespace.is_static);
        assert_eq!(default_namespace.access, AccessModifier::PackagePrivate);
        assert_eq!(default_namespace.initializer.as_deref(), Some("\"minecraft\""));
        assert_eq!(
            class.field("container").map(|f| f.access),
            Some(AccessModifier::Protected)
        );

        assert_eq!(class.methods_named("DataManager").count(), 2);
        assert!(class.methods_named("DataManager").all(|m| m.is_constructor));
        assert!(method(&class, "getDefaultNamespace()").is_static);
        let setter = method(&class, "setDefaultNamespace(String)");
        assert_eq!(
            setter.body,
            vec![Statement::raw("DataManager.defaultNamespace = defaultNamespace")]
        );
        assert_eq!(class.methods_named("contains").count(), 2);
    }

    #[test]
    fn test_method_order() {
        let class = builtin();
        let names: Vec<_> = class.methods[6..16].iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "isByte",
                "getByte",
                "getByteOrNull",
                "getByteOrDefault",
                "setByte",
                "isByte",
                "getByte",
                "getByteOrNull",
                "getByteOrDefault",
                "setByte",
            ]
        );
        assert_eq!(class.methods[6].arguments[0].type_name, "NamespacedKey");
        assert_eq!(class.methods[11].arguments[0].type_name, "String");
    }

    #[test]
    fn test_strict_getter_guard_order() {
        let class = builtin();
        for getter in class
            .methods
            .iter()
            .filter(|m| m.name.starts_with("get") && !m.name.ends_with("OrNull"))
            .filter(|m| !m.name.ends_with("OrDefault") && !m.is_static)
        {
            let guards: Vec<_> = getter
                .body
                .iter()
                .filter_map(|s| match s {
                    Statement::GuardedReturn { then, .. } => Some(then.as_str()),
                    Statement::Raw(_) => None,
                })
                .collect();
            assert_eq!(guards.len(), 2, "{}", getter.signature());
            assert!(guards[0].starts_with("throw new DataManagerKeyError("));
            assert!(guards[1].starts_with("throw new DataManagerTypeError("));
        }
    }

    #[test]
    fn test_direct_getter_body() {
        let class = builtin();
        let getter = method(&class, "getInteger(NamespacedKey)");
        assert_eq!(
            getter.body,
            vec![
                Statement::guarded("!container.has(key)", "throw new DataManagerKeyError(key)"),
                Statement::guarded(
                    "!container.has(key, PersistentDataType.INTEGER)",
                    "throw new DataManagerTypeError(PersistentDataType.INTEGER)",
                ),
                Statement::raw("return container.get(key, PersistentDataType.INTEGER)"),
            ]
        );
        assert_eq!(getter.documentation.lines.len(), 3);
        assert_eq!(getter.documentation.throws.len(), 2);
        assert_eq!(getter.return_spec.as_ref().map(|r| r.type_name.as_str()), Some("int"));
    }

    #[test]
    fn test_indirect_key_is_resolved_first() {
        let class = builtin();
        for signature in [
            "contains(String)",
            "isString(String)",
            "getString(String)",
            "getStringOrNull(String)",
            "getStringOrDefault(String, String)",
            "setString(String, String)",
        ] {
            let m = method(&class, signature);
            assert_eq!(
                m.body[0],
                Statement::raw("NamespacedKey key = new NamespacedKey(namespace, keyString)"),
                "{signature}"
            );
        }
        assert_eq!(
            method(&class, "contains(NamespacedKey)").body,
            vec![Statement::raw("return container.has(key)")]
        );
    }

    #[test]
    fn test_fallbacks() {
        let class = builtin();

        let or_null = method(&class, "getLongOrNull(NamespacedKey)");
        let ret = or_null.return_spec.as_ref().expect("return spec");
        assert!(ret.nullable);
        assert_eq!(ret.type_name, "Long");
        assert!(or_null.body.iter().all(|s| match s {
            Statement::GuardedReturn { then, .. } => then == "return null",
            Statement::Raw(_) => true,
        }));

        let or_default = method(&class, "getLongOrDefault(NamespacedKey, Long)");
        assert_eq!(or_default.arguments[1].name, "defaultValue");
        assert!(!or_default.return_spec.as_ref().expect("return spec").nullable);
        assert!(or_default.body.iter().all(|s| match s {
            Statement::GuardedReturn { then, .. } => then == "return defaultValue",
            Statement::Raw(_) => true,
        }));
        assert!(or_default.documentation.throws.is_empty());
    }

    #[test]
    fn test_setter_chains() {
        let class = builtin();
        let setter = method(&class, "setDouble(NamespacedKey, double)");
        assert_eq!(
            setter.return_spec.as_ref().map(|r| r.type_name.as_str()),
            Some("DataManager")
        );
        assert_eq!(
            setter.body,
            vec![
                Statement::raw("container.set(key, PersistentDataType.DOUBLE, value)"),
                Statement::raw("return this"),
            ]
        );
    }

    #[test]
    fn test_custom_type_wraps_and_unwraps() {
        let class = builtin();
        let getter = method(&class, "getContainer(NamespacedKey)");
        assert_eq!(
            getter.body.last(),
            Some(&Statement::raw(
                "return new DataManager(container.get(key, PersistentDataType.TAG_CONTAINER))"
            ))
        );
        let setter = method(&class, "setContainer(NamespacedKey, DataManager)");
        assert_eq!(
            setter.body[0],
            Statement::raw("container.set(key, PersistentDataType.TAG_CONTAINER, value.container)")
        );
    }

    #[test]
    fn test_multiple_custom_types() {
        let mut tables = DescriptorTables::builtin("DataManager");
        tables
            .types
            .push(TypeBinding::custom("Section", "DataManager", "TAG_CONTAINER"));
        let class = synthesize(&tables);
        let getter = method(&class, "getSectionOrNull(String)");
        assert!(matches!(
            getter.body.last(),
            Some(Statement::Raw(text)) if text.starts_with("return new DataManager(")
        ));
    }

    #[test]
    fn test_custom_type_must_name_class() {
        let mut tables = DescriptorTables::builtin("DataManager");
        tables.types.push(TypeBinding {
            name: "Location".to_string(),
            primitive_type: "Location".to_string(),
            boxed_type: "Location".to_string(),
            storage_constant: "TAG_CONTAINER".to_string(),
            is_custom: true,
        });
        let config = GeneratorConfig::default();
        let err = Synthesizer::new(&tables, &config).synthesize().unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnsupportedCustomType { ref name, ref found, .. }
                if name == "Location" && found == "Location"
        ));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(builtin(), builtin());
    }

    #[test]
    fn test_default_namespace_literal() {
        assert_eq!(java_string("minecraft"), "\"minecraft\"");
        assert_eq!(java_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(java_string("a\r\tb"), "\"a\\r\\tb\"");
        assert_eq!(java_string("a\u{0}b\u{1b}"), "\"a\\u0000b\\u001b\"");
    }
}
