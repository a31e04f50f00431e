//! Java class emission.

use super::writer::SourceWriter;
use crate::error::CodegenError;
use mcdata_schema::{AccessModifier, ClassModel, FieldModel, MethodModel, Statement};

/// Annotation placed before nullable return types.
const NULLABLE: &str = "@Nullable";

/// Renders a [`ClassModel`] as a Java compilation unit.
pub struct JavaEmitter<'a> {
    class: &'a ClassModel,
}

impl<'a> JavaEmitter<'a> {
    /// Creates a new emitter for `class`.
    #[must_use]
    pub fn new(class: &'a ClassModel) -> Self {
        Self { class }
    }

    /// Renders the class.
    ///
    /// # Returns
    /// The compilation unit text, ending with a newline.
    ///
    /// # Errors
    /// Returns `CodegenError::Emit` if a member has an empty name or type.
    pub fn emit(&self) -> Result<String, CodegenError> {
        let class = self.class;
        require("class name", &class.name, "class")?;

        let mut w = SourceWriter::new();

        if let Some(package) = &class.package {
            w.line(&format!("package {package};"));
            w.blank();
        }
        if !class.imports.is_empty() {
            for import in &class.imports {
                w.line(&format!("import {import};"));
            }
            w.blank();
        }

        emit_doc_block(&mut w, &class.documentation);
        w.line(&format!(
            "{}class {} {{",
            modifiers(class.access, false),
            class.name
        ));
        w.indent();

        for field in &class.fields {
            w.line(&self.field(field)?);
        }

        for (index, method) in class.methods.iter().enumerate() {
            if index > 0 || !class.fields.is_empty() {
                w.blank();
            }
            self.emit_method(&mut w, method)?;
        }

        w.dedent();
        w.line("}");
        Ok(w.finish())
    }

    fn field(&self, field: &FieldModel) -> Result<String, CodegenError> {
        let context = format!("field '{}'", field.name);
        require("field name", &field.name, &context)?;
        require("field type", &field.type_name, &context)?;

        let mut line = format!(
            "{}{} {}",
            modifiers(field.access, field.is_static),
            field.type_name,
            field.name
        );
        if let Some(initializer) = &field.initializer {
            line.push_str(&format!(" = {initializer}"));
        }
        line.push(';');
        Ok(line)
    }

    fn emit_method(&self, w: &mut SourceWriter, method: &MethodModel) -> Result<(), CodegenError> {
        let signature = self.signature(method)?;
        emit_method_doc(w, method);

        w.line(&format!("{signature} {{"));
        w.indent();
        for statement in &method.body {
            w.line(&statement_line(statement, &method.name)?);
        }
        w.dedent();
        w.line("}");
        Ok(())
    }

    fn signature(&self, method: &MethodModel) -> Result<String, CodegenError> {
        let context = format!("method '{}' of class '{}'", method.name, self.class.name);
        require("method name", &method.name, &context)?;

        let mut signature = modifiers(method.access, method.is_static);
        if !method.is_constructor {
            match &method.return_spec {
                Some(ret) => {
                    require("return type", &ret.type_name, &context)?;
                    if ret.nullable {
                        signature.push_str(NULLABLE);
                        signature.push(' ');
                    }
                    signature.push_str(&ret.type_name);
                }
                None => signature.push_str("void"),
            }
            signature.push(' ');
        }

        let mut arguments = Vec::with_capacity(method.arguments.len());
        for argument in &method.arguments {
            require("argument name", &argument.name, &context)?;
            require("argument type", &argument.type_name, &context)?;
            arguments.push(format!("{} {}", argument.type_name, argument.name));
        }

        signature.push_str(&format!("{}({})", method.name, arguments.join(", ")));
        Ok(signature)
    }
}

/// Leading modifiers, each followed by a space.
fn modifiers(access: AccessModifier, is_static: bool) -> String {
    let mut out = String::new();
    if let Some(keyword) = access.keyword() {
        out.push_str(keyword);
        out.push(' ');
    }
    if is_static {
        out.push_str("static ");
    }
    out
}

fn statement_line(statement: &Statement, method: &str) -> Result<String, CodegenError> {
    match statement {
        Statement::Raw(text) => {
            require("statement", text, method)?;
            Ok(format!("{text};"))
        }
        Statement::GuardedReturn { condition, then } => {
            require("guard condition", condition, method)?;
            require("guard statement", then, method)?;
            Ok(format!("if ({condition}) {then};"))
        }
    }
}

fn emit_doc_block(w: &mut SourceWriter, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    w.line("/**");
    for line in lines {
        w.line(&doc_line(line));
    }
    w.line(" */");
}

/// Description lines, then `@param`, `@return` and `@throws` tags.
fn emit_method_doc(w: &mut SourceWriter, method: &MethodModel) {
    let doc = &method.documentation;

    let mut tags = Vec::new();
    for argument in &method.arguments {
        tags.push(tag("@param", &argument.name, &argument.description));
    }
    if let Some(ret) = method.return_spec.as_ref().filter(|_| !method.is_constructor) {
        tags.push(tag("@return", &ret.description, ""));
    }
    for entry in &doc.throws {
        tags.push(tag("@throws", &entry.error_kind, &entry.description));
    }

    if doc.lines.is_empty() && tags.is_empty() {
        return;
    }

    w.line("/**");
    for line in &doc.lines {
        w.line(&doc_line(line));
    }
    if !doc.lines.is_empty() && !tags.is_empty() {
        w.line(" *");
    }
    for tag in &tags {
        w.line(&doc_line(tag));
    }
    w.line(" */");
}

fn doc_line(text: &str) -> String {
    if text.is_empty() {
        " *".to_string()
    } else {
        format!(" * {text}")
    }
}

fn tag(name: &str, subject: &str, description: &str) -> String {
    [name, subject, description]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn require(what: &str, value: &str, context: &str) -> Result<(), CodegenError> {
    if value.trim().is_empty() {
        return Err(CodegenError::emit(format!("empty {what} in {context}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcdata_schema::{ArgumentSpec, MethodDocumentation, ReturnSpec};

    fn emit(class: &ClassModel) -> String {
        JavaEmitter::new(class).emit().expect("emission failed")
    }

    #[test]
    fn test_empty_class() {
        let class = ClassModel::new("Empty");
        assert_eq!(emit(&class), "public class Empty {\n}\n");
    }

    #[test]
    fn test_header_and_fields() {
        let mut class = ClassModel::new("DataManager")
            .with_package("ru.vladislav117.mcdata")
            .with_imports(["org.bukkit.NamespacedKey", "org.jetbrains.annotations.Nullable"])
            .with_doc_line("Data manager.");
        class
            .add_field(
                FieldModel::new("String", "defaultNamespace")
                    .with_access(AccessModifier::PackagePrivate)
                    .with_static()
                    .with_initializer("\"minecraft\""),
            )
            .expect("field");
        class
            .add_field(FieldModel::new("String", "namespace"))
            .expect("field");

        let expected = "\
package ru.vladislav117.mcdata;

import org.bukkit.NamespacedKey;
import org.jetbrains.annotations.Nullable;

/**
 * Data manager.
 */
public class DataManager {
    static String defaultNamespace = \"minecraft\";
    protected String namespace;
}
";
        assert_eq!(emit(&class), expected);
    }

    #[test]
    fn test_method_rendering() {
        let mut class = ClassModel::new("DataManager");
        class.add_method(
            MethodModel::new("getIntegerOrNull")
                .with_doc(MethodDocumentation::new().line("Gets the Integer value under the key."))
                .with_argument(ArgumentSpec::new("String", "keyString").with_description("Key"))
                .with_return(
                    ReturnSpec::new("Integer")
                        .with_description("Value under the key or null.")
                        .nullable(),
                )
                .with_statement(Statement::raw(
                    "NamespacedKey key = new NamespacedKey(namespace, keyString)",
                ))
                .with_statement(Statement::guarded("!container.has(key)", "return null"))
                .with_statement(Statement::raw(
                    "return container.get(key, PersistentDataType.INTEGER)",
                )),
        );

        let expected = "\
public class DataManager {
    /**
     * Gets the Integer value under the key.
     *
     * @param keyString Key
     * @return Value under the key or null.
     */
    public @Nullable Integer getIntegerOrNull(String keyString) {
        NamespacedKey key = new NamespacedKey(namespace, keyString);
        if (!container.has(key)) return null;
        return container.get(key, PersistentDataType.INTEGER);
    }
}
";
        assert_eq!(emit(&class), expected);
    }

    #[test]
    fn test_throws_and_static() {
        let mut class = ClassModel::new("DataManager");
        class.add_method(
            MethodModel::new("getByte")
                .with_doc(
                    MethodDocumentation::new()
                        .throws("DataManagerKeyError", "If the key is absent."),
                )
                .with_argument(ArgumentSpec::new("NamespacedKey", "key"))
                .with_return(ReturnSpec::new("byte")),
        );
        class.add_method(
            MethodModel::new("reset")
                .with_static()
                .with_access(AccessModifier::PackagePrivate),
        );

        let text = emit(&class);
        assert!(text.contains(
            "    /**\n     * @param key\n     * @return\n     * @throws DataManagerKeyError If the key is absent.\n     */\n"
        ));
        assert!(text.contains("    public byte getByte(NamespacedKey key) {\n    }\n\n"));
        assert!(text.contains("    static void reset() {\n    }\n}\n"));
    }

    #[test]
    fn test_constructor_has_no_return_type() {
        let mut class = ClassModel::new("DataManager");
        class.add_method(
            MethodModel::constructor("DataManager")
                .with_argument(ArgumentSpec::new("PersistentDataContainer", "container"))
                .with_statement(Statement::raw("this.container = container")),
        );
        let text = emit(&class);
        assert!(text.contains("    public DataManager(PersistentDataContainer container) {\n"));
        assert!(text.contains("        this.container = container;\n"));
    }

    #[test]
    fn test_empty_argument_type_is_fault() {
        let mut class = ClassModel::new("DataManager");
        class.add_method(MethodModel::new("broken").with_argument(ArgumentSpec::new("", "key")));
        let err = JavaEmitter::new(&class).emit().unwrap_err();
        assert!(matches!(err, CodegenError::Emit { ref message } if message.contains("argument type")));
    }

    #[test]
    fn test_empty_names_are_faults() {
        let class = ClassModel::new("");
        assert!(JavaEmitter::new(&class).emit().is_err());

        let mut class = ClassModel::new("DataManager");
        class.add_method(MethodModel::new(""));
        assert!(JavaEmitter::new(&class).emit().is_err());

        let mut class = ClassModel::new("DataManager");
        class.add_method(MethodModel::new("get").with_return(ReturnSpec::new(" ")));
        assert!(JavaEmitter::new(&class).emit().is_err());

        let mut class = ClassModel::new("DataManager");
        class.add_method(MethodModel::new("run").with_statement(Statement::raw("")));
        assert!(JavaEmitter::new(&class).emit().is_err());
    }
}
