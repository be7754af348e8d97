//! Catalog column data types.
//!
//! The metadata catalog describes every column with an abstract [`DataType`],
//! independent of the engine the column lives in. The serialized names match
//! the catalog's wire form (`INT`, `VARCHAR`, `PG_LSN`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Abstract column type as recorded in the metadata catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    // ===== Numeric =====
    Number,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    ByteInt,
    Bytes,
    Float,
    Double,
    Decimal,
    Numeric,

    // ===== Temporal =====
    Timestamp,
    Timestampz,
    Time,
    Date,
    DateTime,
    Interval,

    // ===== Character =====
    String,
    MediumText,
    Text,
    Char,
    VarChar,

    Boolean,

    // ===== Binary =====
    Binary,
    VarBinary,
    Blob,
    LongBlob,
    MediumBlob,
    Bytea,

    // ===== Structured =====
    Array,
    Map,
    Struct,
    Union,
    Set,
    Enum,
    Json,
    Variant,
    Record,
    Super,

    // ===== Spatial =====
    Geography,
    Geometry,
    Point,
    Polygon,

    // ===== Engine specific =====
    Uuid,
    AggregateFunction,
    Fixed,
    HllSketch,
    #[serde(rename = "PG_LSN")]
    PgLsn,
    #[serde(rename = "PG_SNAPSHOT")]
    PgSnapshot,
    TsQuery,
    TsVector,
    #[serde(rename = "TXID_SNAPSHOT")]
    TxidSnapshot,
    Xml,
    MacAddr,
    Cidr,
    Inet,

    Null,
    Error,
    Unknown,
}

impl DataType {
    /// Every catalog type, in declaration order.
    pub const ALL: [DataType; 59] = [
        DataType::Number,
        DataType::TinyInt,
        DataType::SmallInt,
        DataType::Int,
        DataType::BigInt,
        DataType::ByteInt,
        DataType::Bytes,
        DataType::Float,
        DataType::Double,
        DataType::Decimal,
        DataType::Numeric,
        DataType::Timestamp,
        DataType::Timestampz,
        DataType::Time,
        DataType::Date,
        DataType::DateTime,
        DataType::Interval,
        DataType::String,
        DataType::MediumText,
        DataType::Text,
        DataType::Char,
        DataType::VarChar,
        DataType::Boolean,
        DataType::Binary,
        DataType::VarBinary,
        DataType::Blob,
        DataType::LongBlob,
        DataType::MediumBlob,
        DataType::Bytea,
        DataType::Array,
        DataType::Map,
        DataType::Struct,
        DataType::Union,
        DataType::Set,
        DataType::Enum,
        DataType::Json,
        DataType::Variant,
        DataType::Record,
        DataType::Super,
        DataType::Geography,
        DataType::Geometry,
        DataType::Point,
        DataType::Polygon,
        DataType::Uuid,
        DataType::AggregateFunction,
        DataType::Fixed,
        DataType::HllSketch,
        DataType::PgLsn,
        DataType::PgSnapshot,
        DataType::TsQuery,
        DataType::TsVector,
        DataType::TxidSnapshot,
        DataType::Xml,
        DataType::MacAddr,
        DataType::Cidr,
        DataType::Inet,
        DataType::Null,
        DataType::Error,
        DataType::Unknown,
    ];

    /// Catalog name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Number => "NUMBER",
            DataType::TinyInt => "TINYINT",
            DataType::SmallInt => "SMALLINT",
            DataType::Int => "INT",
            DataType::BigInt => "BIGINT",
            DataType::ByteInt => "BYTEINT",
            DataType::Bytes => "BYTES",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Decimal => "DECIMAL",
            DataType::Numeric => "NUMERIC",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Timestampz => "TIMESTAMPZ",
            DataType::Time => "TIME",
            DataType::Date => "DATE",
            DataType::DateTime => "DATETIME",
            DataType::Interval => "INTERVAL",
            DataType::String => "STRING",
            DataType::MediumText => "MEDIUMTEXT",
            DataType::Text => "TEXT",
            DataType::Char => "CHAR",
            DataType::VarChar => "VARCHAR",
            DataType::Boolean => "BOOLEAN",
            DataType::Binary => "BINARY",
            DataType::VarBinary => "VARBINARY",
            DataType::Blob => "BLOB",
            DataType::LongBlob => "LONGBLOB",
            DataType::MediumBlob => "MEDIUMBLOB",
            DataType::Bytea => "BYTEA",
            DataType::Array => "ARRAY",
            DataType::Map => "MAP",
            DataType::Struct => "STRUCT",
            DataType::Union => "UNION",
            DataType::Set => "SET",
            DataType::Enum => "ENUM",
            DataType::Json => "JSON",
            DataType::Variant => "VARIANT",
            DataType::Record => "RECORD",
            DataType::Super => "SUPER",
            DataType::Geography => "GEOGRAPHY",
            DataType::Geometry => "GEOMETRY",
            DataType::Point => "POINT",
            DataType::Polygon => "POLYGON",
            DataType::Uuid => "UUID",
            DataType::AggregateFunction => "AGGREGATEFUNCTION",
            DataType::Fixed => "FIXED",
            DataType::HllSketch => "HLLSKETCH",
            DataType::PgLsn => "PG_LSN",
            DataType::PgSnapshot => "PG_SNAPSHOT",
            DataType::TsQuery => "TSQUERY",
            DataType::TsVector => "TSVECTOR",
            DataType::TxidSnapshot => "TXID_SNAPSHOT",
            DataType::Xml => "XML",
            DataType::MacAddr => "MACADDR",
            DataType::Cidr => "CIDR",
            DataType::Inet => "INET",
            DataType::Null => "NULL",
            DataType::Error => "ERROR",
            DataType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = RegistryError;

    /// Parse a catalog type name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        DataType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| RegistryError::unknown_type("catalog", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("int".parse::<DataType>().unwrap(), DataType::Int);
        assert_eq!("VarChar".parse::<DataType>().unwrap(), DataType::VarChar);
        assert_eq!(" pg_lsn ".parse::<DataType>().unwrap(), DataType::PgLsn);
        assert!("INTEGER".parse::<DataType>().is_err());
    }

    #[test]
    fn test_serde_uses_catalog_names() {
        let json = serde_json::to_string(&DataType::MediumText).unwrap();
        assert_eq!(json, "\"MEDIUMTEXT\"");

        let parsed: DataType = serde_json::from_str("\"TXID_SNAPSHOT\"").unwrap();
        assert_eq!(parsed, DataType::TxidSnapshot);

        let parsed: DataType = serde_json::from_str("\"AGGREGATEFUNCTION\"").unwrap();
        assert_eq!(parsed, DataType::AggregateFunction);
    }

    #[test]
    fn test_serde_and_display_agree() {
        for t in DataType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t));
        }
    }
}
