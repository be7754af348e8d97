//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::core::{DataType, NativeType};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database service the tables belong to.
    pub source: SourceConfig,

    /// Tables to plan profiling for.
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

/// Database service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Service type identifier (e.g., "Postgres", "Hive").
    pub service_type: String,

    /// Service name in the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

/// A table and the columns to classify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table name.
    pub name: String,

    /// Columns in ordinal order.
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

/// A single column as described by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column name.
    pub name: String,

    /// Catalog data type (e.g., "INT", "VARCHAR").
    pub data_type: DataType,

    /// Driver type class, when the reader already knows it. Overrides the
    /// catalog mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_type: Option<NativeType>,
}
