//! Language-neutral column description.
//!
//! A column is described by a primitive type tag, a maximum size and a single
//! [`ColumnOption`]. Dialects turn that triple into a [`ColumnMapping`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DialectError;

/// Largest size that still produces a sized (`TYPE(n)`) column type.
pub const MAX_SIZED_LENGTH: usize = 255;

/// Primitive type tag of a column.
///
/// Unrecognized tags are kept in [`ColumnType::Other`] and mapped like
/// strings, which covers interface, JSON and XML payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    /// `bool`
    Bool,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `int`, native width.
    Int,
    /// `uint8`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `uint`, native width.
    Uint,
    /// `float32`
    Float32,
    /// `float64`
    Float64,
    /// `time`
    Time,
    /// `bytes`, raw binary.
    Bytes,
    /// `gob`, opaque binary-encoded value.
    Gob,
    /// `string`
    String,
    /// Any other tag.
    Other(String),
}

impl ColumnType {
    /// Parses a type tag. Never fails: unknown tags become [`ColumnType::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bool" => Self::Bool,
            "int8" => Self::Int8,
            "int16" => Self::Int16,
            "int32" => Self::Int32,
            "int64" => Self::Int64,
            "int" => Self::Int,
            "uint8" => Self::Uint8,
            "uint16" => Self::Uint16,
            "uint32" => Self::Uint32,
            "uint64" => Self::Uint64,
            "uint" => Self::Uint,
            "float32" => Self::Float32,
            "float64" => Self::Float64,
            "time" => Self::Time,
            "bytes" => Self::Bytes,
            "gob" => Self::Gob,
            "string" => Self::String,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the type tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int => "int",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uint => "uint",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Time => "time",
            Self::Bytes => "bytes",
            Self::Gob => "gob",
            Self::String => "string",
            Self::Other(tag) => tag,
        }
    }

    /// 8 and 16-bit integers, signed or unsigned.
    #[must_use]
    pub const fn is_small_integer(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Uint8 | Self::Uint16)
    }

    /// 32-bit, 64-bit and native-width integers, signed or unsigned.
    #[must_use]
    pub const fn is_standard_integer(&self) -> bool {
        matches!(
            self,
            Self::Int32 | Self::Int64 | Self::Int | Self::Uint32 | Self::Uint64 | Self::Uint
        )
    }

    /// Integers whose range does not fit a signed 32-bit column.
    #[must_use]
    pub const fn is_wide_integer(&self) -> bool {
        matches!(
            self,
            Self::Int64 | Self::Int | Self::Uint32 | Self::Uint64 | Self::Uint
        )
    }

    /// Raw bytes or an opaque binary encoding.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Bytes | Self::Gob)
    }

    /// Whether this is the timestamp type.
    #[must_use]
    pub const fn is_time(&self) -> bool {
        matches!(self, Self::Time)
    }
}

impl From<&str> for ColumnType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for ColumnType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ColumnType> for String {
    fn from(ty: ColumnType) -> Self {
        match ty {
            ColumnType::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Semantic option attached to a column.
///
/// Exactly one option applies per mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOption {
    /// No special behavior; the default is the type's zero value.
    #[default]
    ZeroValue,
    /// Identity or sequence generated value.
    AutoIncrement,
    /// Timestamp set on every write.
    AutoNow,
    /// Timestamp set on insert.
    AutoNowAdd,
    /// Optimistic-concurrency version counter.
    Version,
}

impl ColumnOption {
    /// All options, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::ZeroValue,
        Self::AutoIncrement,
        Self::AutoNow,
        Self::AutoNowAdd,
        Self::Version,
    ];

    /// Returns the snake_case name of the option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroValue => "zero_value",
            Self::AutoIncrement => "auto_increment",
            Self::AutoNow => "auto_now",
            Self::AutoNowAdd => "auto_now_add",
            Self::Version => "version",
        }
    }

    /// Whether the option populates a timestamp automatically.
    #[must_use]
    pub const fn is_auto_timestamp(self) -> bool {
        matches!(self, Self::AutoNow | Self::AutoNowAdd)
    }
}

impl FromStr for ColumnOption {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| DialectError::UnknownOption(s.to_string()))
    }
}

impl fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size bucket of a column's maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// No size given (`0`).
    Unspecified,
    /// `1..=MAX_SIZED_LENGTH`.
    Sized(usize),
    /// Above [`MAX_SIZED_LENGTH`]; maps to a large-object type.
    Large,
}

impl SizeClass {
    /// Buckets a maximum size.
    #[must_use]
    pub const fn of(max_size: usize) -> Self {
        match max_size {
            0 => Self::Unspecified,
            n if n <= MAX_SIZED_LENGTH => Self::Sized(n),
            _ => Self::Large,
        }
    }
}

/// Dialect-specific column type and default clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// SQL type expression, e.g. `CHARACTER VARYING(64)`.
    pub sql_type: String,
    /// Default or generation clause; `None` when the column has none.
    pub default: Option<String>,
}

impl ColumnMapping {
    /// Creates a mapping.
    #[must_use]
    pub fn new(sql_type: impl Into<String>, default: Option<String>) -> Self {
        Self {
            sql_type: sql_type.into(),
            default,
        }
    }

    /// Returns the default clause, or `""` when there is none.
    #[must_use]
    pub fn default_or_empty(&self) -> &str {
        self.default.as_deref().unwrap_or_default()
    }
}
