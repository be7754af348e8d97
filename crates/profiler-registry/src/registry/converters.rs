//! Registry of custom scalar converters.
//!
//! Some column types cannot be profiled as the driver returns them: raw
//! bytes, driver UUID objects and PostgreSQL `bytea`. Column readers wrap
//! those columns in one of three converters, looked up by name:
//!
//! | Name    | Converter       | Decorates     |
//! |---------|-----------------|---------------|
//! | `BYTES` | `HexByteString` | `LargeBinary` |
//! | `UUID`  | `UuidString`    | `String`      |
//! | `BYTEA` | `ByteaToHex`    | `LargeBinary` |
//!
//! The registry is closed: there is no runtime registration.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{NativeType, SqlValue};
use crate::error::{RegistryError, Result};

/// Encode or decode one scalar kind on read.
pub trait ScalarConverter: Send + Sync {
    /// Converter name (e.g., "HexByteString").
    fn name(&self) -> &'static str;

    /// Driver type this converter decorates.
    fn impl_type(&self) -> NativeType;

    /// Convert a value fetched from the column.
    ///
    /// NULL passes through unchanged.
    fn process_result<'a>(&self, value: SqlValue<'a>) -> Result<SqlValue<'a>>;

    /// SQL expression to select the column with, if the conversion happens
    /// on the database side.
    fn column_expression(&self, _column: &str) -> Option<String> {
        None
    }
}

/// Renders binary values as lower-case hex text.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexByteString;

impl ScalarConverter for HexByteString {
    fn name(&self) -> &'static str {
        "HexByteString"
    }

    fn impl_type(&self) -> NativeType {
        NativeType::LargeBinary
    }

    fn process_result<'a>(&self, value: SqlValue<'a>) -> Result<SqlValue<'a>> {
        match value {
            SqlValue::Null | SqlValue::Text(_) => Ok(value),
            SqlValue::Bytes(b) => Ok(SqlValue::Text(Cow::Owned(hex::encode(b.as_ref())))),
            other => Err(RegistryError::conversion(
                self.name(),
                format!("expected bytes, got {}", other.kind()),
            )),
        }
    }
}

/// Renders UUIDs as hyphenated lower-case text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidString;

impl ScalarConverter for UuidString {
    fn name(&self) -> &'static str {
        "UuidString"
    }

    fn impl_type(&self) -> NativeType {
        NativeType::String
    }

    fn process_result<'a>(&self, value: SqlValue<'a>) -> Result<SqlValue<'a>> {
        let uuid = match value {
            SqlValue::Null => return Ok(SqlValue::Null),
            SqlValue::Uuid(u) => u,
            SqlValue::Bytes(ref b) => Uuid::from_slice(b).map_err(|e| {
                RegistryError::conversion(self.name(), format!("invalid UUID bytes: {}", e))
            })?,
            SqlValue::Text(ref s) => Uuid::parse_str(s.trim()).map_err(|e| {
                RegistryError::conversion(self.name(), format!("invalid UUID text '{}': {}", s, e))
            })?,
            other => {
                return Err(RegistryError::conversion(
                    self.name(),
                    format!("expected a UUID, got {}", other.kind()),
                ))
            }
        };
        Ok(SqlValue::text_owned(uuid.hyphenated().to_string()))
    }
}

/// Reads PostgreSQL `bytea` columns as hex text.
///
/// The encoding is pushed into the query through [`column_expression`];
/// raw bytes that still reach the converter are encoded locally.
///
/// [`column_expression`]: ScalarConverter::column_expression
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteaToHex;

impl ScalarConverter for ByteaToHex {
    fn name(&self) -> &'static str {
        "ByteaToHex"
    }

    fn impl_type(&self) -> NativeType {
        NativeType::LargeBinary
    }

    fn process_result<'a>(&self, value: SqlValue<'a>) -> Result<SqlValue<'a>> {
        match value {
            SqlValue::Null | SqlValue::Text(_) => Ok(value),
            SqlValue::Bytes(b) => Ok(SqlValue::Text(Cow::Owned(hex::encode(b.as_ref())))),
            other => Err(RegistryError::conversion(
                self.name(),
                format!("expected bytea, got {}", other.kind()),
            )),
        }
    }

    fn column_expression(&self, column: &str) -> Option<String> {
        Some(format!("ENCODE({}, 'hex')", column))
    }
}

static HEX_BYTE_STRING: HexByteString = HexByteString;
static UUID_STRING: UuidString = UuidString;
static BYTEA_TO_HEX: ByteaToHex = ByteaToHex;

/// Symbolic scalar kinds with a registered converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomType {
    /// Raw bytes.
    Bytes,
    /// UUID values.
    Uuid,
    /// PostgreSQL `bytea`.
    Bytea,
}

impl CustomType {
    /// Every registered name.
    pub const ALL: [CustomType; 3] = [CustomType::Bytes, CustomType::Uuid, CustomType::Bytea];

    /// Registry name (e.g., "BYTES").
    pub fn name(&self) -> &'static str {
        match self {
            CustomType::Bytes => "BYTES",
            CustomType::Uuid => "UUID",
            CustomType::Bytea => "BYTEA",
        }
    }

    /// Converter registered under this name.
    pub fn converter(&self) -> &'static dyn ScalarConverter {
        match self {
            CustomType::Bytes => &HEX_BYTE_STRING,
            CustomType::Uuid => &UUID_STRING,
            CustomType::Bytea => &BYTEA_TO_HEX,
        }
    }
}

impl fmt::Display for CustomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CustomType {
    type Err = RegistryError;

    /// Look up a registry name. Names are matched exactly.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CustomType::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| RegistryError::UnknownConverter(s.to_string()))
    }
}
