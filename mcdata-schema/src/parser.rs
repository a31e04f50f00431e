//! XML descriptor parser.
//!
//! Reads the type and key tables from a document of the form:
//!
//! ```xml
//! <descriptors>
//!     <types>
//!         <type name="Integer" primitive="int" boxed="Integer" storage="INTEGER"/>
//!         <type name="Container" primitive="DataManager" storage="TAG_CONTAINER" custom="true"/>
//!     </types>
//!     <keys>
//!         <key type="NamespacedKey" name="key" description="Key"/>
//!         <key type="String" name="keyString" description="Key" indirect="true"/>
//!     </keys>
//! </descriptors>
//! ```
//!
//! Table order is document order. `boxed` defaults to `primitive`;
//! `custom` and `indirect` default to `false`.

use crate::error::ParseError;
use crate::model::ArgumentSpec;
use crate::tables::{DescriptorTables, KeyBinding, TypeBinding};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Section of the document currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Types,
    Keys,
}

/// Parses descriptor tables from an XML string.
///
/// # Arguments
/// * `xml` - Descriptor document content
///
/// # Returns
/// Parsed tables or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or contains invalid
/// descriptor elements.
pub fn parse_descriptors(xml: &str) -> Result<DescriptorTables, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut tables: Option<DescriptorTables> = None;
    let mut section: Option<Section> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                section = Some(open_element(name, e, section, &mut tables)?);
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                open_element(name, e, section, &mut tables)?;
            }
            Ok(Event::End(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                section = match name {
                    "types" | "keys" => Some(Section::Root),
                    "descriptors" => None,
                    _ => section,
                };
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    tables.ok_or_else(|| ParseError::InvalidStructure {
        message: "No descriptors element found".to_string(),
    })
}

/// Parses descriptor tables from an XML file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_descriptors_file(path: &Path) -> Result<DescriptorTables, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_descriptors(&xml)
}

/// Handles an opening (or self-closing) element, returning the section it
/// opens.
fn open_element(
    name: &str,
    e: &BytesStart<'_>,
    section: Option<Section>,
    tables: &mut Option<DescriptorTables>,
) -> Result<Section, ParseError> {
    match (section, name) {
        (None, "descriptors") => {
            if tables.is_some() {
                return Err(ParseError::InvalidStructure {
                    message: "more than one descriptors element".to_string(),
                });
            }
            *tables = Some(DescriptorTables::default());
            Ok(Section::Root)
        }
        (Some(Section::Root), "types") => Ok(Section::Types),
        (Some(Section::Root), "keys") => Ok(Section::Keys),
        (Some(Section::Types), "type") => {
            let binding = parse_type(e)?;
            tables_mut(tables)?.types.push(binding);
            Ok(Section::Types)
        }
        (Some(Section::Keys), "key") => {
            let binding = parse_key(e)?;
            tables_mut(tables)?.keys.push(binding);
            Ok(Section::Keys)
        }
        (None, other) => Err(ParseError::unknown_element(other, "document")),
        (Some(context), other) => Err(ParseError::unknown_element(
            other,
            format!("{context:?}").to_lowercase(),
        )),
    }
}

fn tables_mut(tables: &mut Option<DescriptorTables>) -> Result<&mut DescriptorTables, ParseError> {
    tables.as_mut().ok_or_else(|| ParseError::InvalidStructure {
        message: "binding outside of descriptors element".to_string(),
    })
}

/// Parses a `type` element.
fn parse_type(e: &BytesStart<'_>) -> Result<TypeBinding, ParseError> {
    let mut name = None;
    let mut primitive = None;
    let mut boxed = None;
    let mut storage = None;
    let mut custom = false;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        let value = value.as_ref();

        match key {
            "name" => name = Some(value.to_string()),
            "primitive" => primitive = Some(value.to_string()),
            "boxed" => boxed = Some(value.to_string()),
            "storage" => storage = Some(value.to_string()),
            "custom" => custom = parse_bool("type", "custom", value)?,
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("type", "name"))?;
    let primitive = primitive.ok_or_else(|| ParseError::missing_attr("type", "primitive"))?;
    let storage = storage.ok_or_else(|| ParseError::missing_attr("type", "storage"))?;
    let boxed = boxed.unwrap_or_else(|| primitive.clone());

    Ok(TypeBinding {
        name,
        primitive_type: primitive,
        boxed_type: boxed,
        storage_constant: storage,
        is_custom: custom,
    })
}

/// Parses a `key` element.
fn parse_key(e: &BytesStart<'_>) -> Result<KeyBinding, ParseError> {
    let mut type_name = None;
    let mut name = None;
    let mut description = String::new();
    let mut indirect = false;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        let value = value.as_ref();

        match key {
            "type" => type_name = Some(value.to_string()),
            "name" => name = Some(value.to_string()),
            "description" => description = value.to_string(),
            "indirect" => indirect = parse_bool("key", "indirect", value)?,
            _ => {}
        }
    }

    let type_name = type_name.ok_or_else(|| ParseError::missing_attr("key", "type"))?;
    let name = name.ok_or_else(|| ParseError::missing_attr("key", "name"))?;

    Ok(KeyBinding {
        argument: ArgumentSpec::new(type_name, name).with_description(description),
        is_indirect: indirect,
    })
}

fn parse_bool(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}
