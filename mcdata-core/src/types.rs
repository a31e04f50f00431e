//! Storage type tokens and stored values.
//!
//! This module maps the host's persistent data types to Rust types. The
//! tokens returned by [`PersistentDataType::token`] are the same identifiers
//! the code generator emits as `PersistentDataType.<TOKEN>`.

use crate::container::MemoryContainer;
use std::fmt;

/// Persistent data type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistentDataType {
    /// Signed 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Short,
    /// Signed 32-bit integer.
    Integer,
    /// Signed 64-bit integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Boolean.
    Boolean,
    /// UTF-8 string.
    String,
    /// Array of signed bytes.
    ByteArray,
    /// Array of 32-bit integers.
    IntegerArray,
    /// Array of 64-bit integers.
    LongArray,
    /// Nested container.
    TagContainer,
}

impl PersistentDataType {
    /// All data types in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Byte,
        Self::Short,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::String,
        Self::ByteArray,
        Self::IntegerArray,
        Self::LongArray,
        Self::TagContainer,
    ];

    /// Returns the host token for this type.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Byte => "BYTE",
            Self::Short => "SHORT",
            Self::Integer => "INTEGER",
            Self::Long => "LONG",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::ByteArray => "BYTE_ARRAY",
            Self::IntegerArray => "INTEGER_ARRAY",
            Self::LongArray => "LONG_ARRAY",
            Self::TagContainer => "TAG_CONTAINER",
        }
    }

    /// Parses a data type from its host token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }
}

impl fmt::Display for PersistentDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A value stored in a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Byte value.
    Byte(i8),
    /// Short value.
    Short(i16),
    /// Integer value.
    Integer(i32),
    /// Long value.
    Long(i64),
    /// Float value.
    Float(f32),
    /// Double value.
    Double(f64),
    /// Boolean value.
    Boolean(bool),
    /// String value.
    String(String),
    /// Byte array value.
    ByteArray(Vec<i8>),
    /// Integer array value.
    IntegerArray(Vec<i32>),
    /// Long array value.
    LongArray(Vec<i64>),
    /// Nested container, owned by the parent entry.
    TagContainer(MemoryContainer),
}

impl Value {
    /// Returns the data type this value is stored under.
    #[must_use]
    pub const fn data_type(&self) -> PersistentDataType {
        match self {
            Self::Byte(_) => PersistentDataType::Byte,
            Self::Short(_) => PersistentDataType::Short,
            Self::Integer(_) => PersistentDataType::Integer,
            Self::Long(_) => PersistentDataType::Long,
            Self::Float(_) => PersistentDataType::Float,
            Self::Double(_) => PersistentDataType::Double,
            Self::Boolean(_) => PersistentDataType::Boolean,
            Self::String(_) => PersistentDataType::String,
            Self::ByteArray(_) => PersistentDataType::ByteArray,
            Self::IntegerArray(_) => PersistentDataType::IntegerArray,
            Self::LongArray(_) => PersistentDataType::LongArray,
            Self::TagContainer(_) => PersistentDataType::TagContainer,
        }
    }
}

/// A Rust type that can be stored under a fixed [`PersistentDataType`].
pub trait DataType: Sized {
    /// Storage token for this type.
    const TYPE: PersistentDataType;

    /// Converts the value into its stored form.
    fn into_value(self) -> Value;

    /// Extracts the value from its stored form.
    ///
    /// Returns `None` if the stored value has another type.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_data_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl DataType for $ty {
                const TYPE: PersistentDataType = PersistentDataType::$variant;

                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                #[inline]
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_data_type! {
    i8 => Byte,
    i16 => Short,
    i32 => Integer,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    String => String,
    Vec<i8> => ByteArray,
    Vec<i32> => IntegerArray,
    Vec<i64> => LongArray,
    MemoryContainer => TagContainer,
}
