//! Catalog type → driver type mapping.
//!
//! Before profiling a table, each catalog column is given a driver type
//! class so queries can be built against it. Catalog types with no driver
//! equivalent map to [`NativeType::NullType`], which the `NOT_COMPUTE` gate
//! skips.

use crate::core::{DataType, NativeType};
use crate::registry::CustomType;

/// Driver type class used to read a catalog column.
pub fn native_type_for(data_type: DataType) -> NativeType {
    match data_type {
        // Numeric
        DataType::Number => NativeType::Numeric,
        DataType::TinyInt | DataType::SmallInt | DataType::ByteInt => NativeType::SmallInteger,
        DataType::Int => NativeType::Integer,
        DataType::BigInt => NativeType::BigInteger,
        DataType::Float => NativeType::Float,
        DataType::Double | DataType::Decimal => NativeType::Decimal,
        DataType::Numeric => NativeType::Numeric,

        // Temporal
        DataType::Timestamp => NativeType::Timestamp,
        DataType::Time => NativeType::Time,
        DataType::Date => NativeType::Date,
        DataType::DateTime => NativeType::DateTime,
        DataType::Interval => NativeType::Interval,

        // Character
        DataType::String => NativeType::String,
        DataType::MediumText | DataType::Text => NativeType::Text,
        DataType::Char => NativeType::Char,
        DataType::VarChar => NativeType::Varchar,
        DataType::Enum => NativeType::Enum,

        DataType::Boolean => NativeType::Boolean,

        // Binary
        DataType::Binary | DataType::LongBlob | DataType::MediumBlob => NativeType::LargeBinary,
        DataType::VarBinary => NativeType::VarBinary,
        DataType::Blob => NativeType::Blob,

        // Structured
        DataType::Array => NativeType::Array,
        DataType::Json => NativeType::Json,
        DataType::Map => NativeType::Map,
        DataType::Struct => NativeType::Struct,
        DataType::Union => NativeType::Union,
        DataType::Set => NativeType::Set,
        DataType::Geography => NativeType::Geography,

        // Read through a registered converter
        DataType::Bytes => NativeType::Custom(CustomType::Bytes),
        DataType::Uuid => NativeType::Custom(CustomType::Uuid),
        DataType::Bytea => NativeType::Custom(CustomType::Bytea),

        DataType::Timestampz
        | DataType::Variant
        | DataType::Record
        | DataType::Super
        | DataType::Geometry
        | DataType::Point
        | DataType::Polygon
        | DataType::AggregateFunction
        | DataType::Fixed
        | DataType::HllSketch
        | DataType::PgLsn
        | DataType::PgSnapshot
        | DataType::TsQuery
        | DataType::TsVector
        | DataType::TxidSnapshot
        | DataType::Xml
        | DataType::MacAddr
        | DataType::Cidr
        | DataType::Inet
        | DataType::Null
        | DataType::Error
        | DataType::Unknown => NativeType::NullType,
    }
}
