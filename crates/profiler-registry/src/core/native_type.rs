//! Driver-native column types and their capability families.
//!
//! A database driver describes a fetched column with its own type class
//! (`Integer`, `Varchar`, `JSON`, ...). Drivers organise those classes in a
//! hierarchy and the profiler only cares which branch a class belongs to.
//! Instead of walking a class hierarchy at runtime, each [`NativeType`]
//! carries a fixed list of [`TypeFamily`] tags that answer "does this type
//! belong to category X?".
//!
//! # Architecture
//!
//! ```text
//! NativeType::BigInteger  →  [Integer]
//! NativeType::Float       →  [Numeric]
//! NativeType::Timestamp   →  [DateTime]
//! NativeType::Array       →  [Concatenable, Indexable]
//! ```
//!
//! [`ColumnType`] is the seam shared by every type system the profiler can
//! see: driver descriptors before a query runs and in-memory frame columns
//! after data has been materialized (see [`crate::core::frame`]).

use std::fmt;
use std::str::FromStr;

use polars::prelude::DataType as FrameDtype;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RegistryError;
use crate::registry::CustomType;

/// Capability category a driver type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeFamily {
    /// Whole-number types.
    Integer,
    /// Fixed and floating point types.
    Numeric,
    /// Calendar date without a time of day.
    Date,
    /// Time of day without a date.
    Time,
    /// Date and time of day.
    DateTime,
    /// Types supporting concatenation (strings, text, arrays).
    Concatenable,
    /// Types supporting index access (arrays, JSON).
    Indexable,
}

/// Driver-native type class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    /// Type the driver could not map. Unmapped catalog types end up here.
    NullType,

    // ===== Integer =====
    SmallInteger,
    Integer,
    BigInteger,

    // ===== Numeric =====
    Numeric,
    Float,
    Decimal,

    // ===== Temporal =====
    Date,
    Time,
    DateTime,
    Timestamp,
    Interval,

    // ===== Character =====
    String,
    Text,
    Char,
    Varchar,
    Enum,

    Boolean,

    // ===== Binary =====
    LargeBinary,
    VarBinary,
    Blob,

    // ===== Structured =====
    Array,
    Json,
    /// String-backed map column.
    Map,
    /// String-backed struct column.
    Struct,
    /// Array-backed set column.
    Set,
    /// String-backed union column.
    Union,
    /// String-backed geography column.
    Geography,

    /// Column read through one of the registered scalar converters.
    Custom(CustomType),
}

impl NativeType {
    /// Every driver type class, custom converter types included.
    pub const ALL: [NativeType; 31] = [
        NativeType::NullType,
        NativeType::SmallInteger,
        NativeType::Integer,
        NativeType::BigInteger,
        NativeType::Numeric,
        NativeType::Float,
        NativeType::Decimal,
        NativeType::Date,
        NativeType::Time,
        NativeType::DateTime,
        NativeType::Timestamp,
        NativeType::Interval,
        NativeType::String,
        NativeType::Text,
        NativeType::Char,
        NativeType::Varchar,
        NativeType::Enum,
        NativeType::Boolean,
        NativeType::LargeBinary,
        NativeType::VarBinary,
        NativeType::Blob,
        NativeType::Array,
        NativeType::Json,
        NativeType::Map,
        NativeType::Struct,
        NativeType::Set,
        NativeType::Union,
        NativeType::Geography,
        NativeType::Custom(CustomType::Bytes),
        NativeType::Custom(CustomType::Uuid),
        NativeType::Custom(CustomType::Bytea),
    ];

    /// Capability families of this type class.
    ///
    /// Custom converter types decorate another driver type without
    /// inheriting from it, so they belong to no family.
    pub fn families(&self) -> &'static [TypeFamily] {
        use TypeFamily as F;

        match self {
            NativeType::SmallInteger | NativeType::Integer | NativeType::BigInteger => {
                &[F::Integer]
            }
            NativeType::Numeric | NativeType::Float | NativeType::Decimal => &[F::Numeric],
            NativeType::Date => &[F::Date],
            NativeType::Time => &[F::Time],
            NativeType::DateTime | NativeType::Timestamp => &[F::DateTime],
            NativeType::String
            | NativeType::Text
            | NativeType::Char
            | NativeType::Varchar
            | NativeType::Enum => &[F::Concatenable],
            NativeType::Map | NativeType::Struct | NativeType::Union | NativeType::Geography => {
                &[F::Concatenable]
            }
            NativeType::Array | NativeType::Set => &[F::Concatenable, F::Indexable],
            NativeType::Json => &[F::Indexable],
            NativeType::NullType
            | NativeType::Interval
            | NativeType::Boolean
            | NativeType::LargeBinary
            | NativeType::VarBinary
            | NativeType::Blob
            | NativeType::Custom(_) => &[],
        }
    }

    /// Whether this type class belongs to `family`.
    pub fn is_a(&self, family: TypeFamily) -> bool {
        self.families().contains(&family)
    }

    /// Driver class name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            NativeType::NullType => "NullType",
            NativeType::SmallInteger => "SmallInteger",
            NativeType::Integer => "Integer",
            NativeType::BigInteger => "BigInteger",
            NativeType::Numeric => "Numeric",
            NativeType::Float => "Float",
            NativeType::Decimal => "Decimal",
            NativeType::Date => "Date",
            NativeType::Time => "Time",
            NativeType::DateTime => "DateTime",
            NativeType::Timestamp => "Timestamp",
            NativeType::Interval => "Interval",
            NativeType::String => "String",
            NativeType::Text => "Text",
            NativeType::Char => "Char",
            NativeType::Varchar => "Varchar",
            NativeType::Enum => "Enum",
            NativeType::Boolean => "Boolean",
            NativeType::LargeBinary => "LargeBinary",
            NativeType::VarBinary => "VarBinary",
            NativeType::Blob => "Blob",
            NativeType::Array => "Array",
            NativeType::Json => "Json",
            NativeType::Map => "Map",
            NativeType::Struct => "Struct",
            NativeType::Set => "Set",
            NativeType::Union => "Union",
            NativeType::Geography => "Geography",
            NativeType::Custom(custom) => custom.converter().name(),
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NativeType {
    type Err = RegistryError;

    /// Parse a driver class name (or converter name), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        NativeType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| RegistryError::unknown_type("native", name))
    }
}

impl Serialize for NativeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NativeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A column type the classification predicates can inspect.
///
/// Each method answers one tier of the classification check. Type systems
/// override only the tiers they can answer; the defaults report nothing.
pub trait ColumnType {
    /// Capability families from the driver's type system.
    fn families(&self) -> &[TypeFamily] {
        &[]
    }

    /// In-memory dtype when the column has already been materialized.
    fn frame_dtype(&self) -> Option<&FrameDtype> {
        None
    }

    /// Driver type class, used to gate metric computation.
    fn native_type(&self) -> Option<NativeType> {
        None
    }
}

impl ColumnType for NativeType {
    fn families(&self) -> &[TypeFamily] {
        NativeType::families(self)
    }

    fn native_type(&self) -> Option<NativeType> {
        Some(*self)
    }
}
