//! Profile plans: which metrics run on which columns.
//!
//! A plan resolves the configured service type to its dialect, gives every
//! configured column a driver type and converter, and records the metrics
//! the profiler may run on it.

use serde::Serialize;
use tracing::{debug, info};

use crate::classify::{classify, classify_catalog, native_type_for, ColumnClass, Metric, NOT_COMPUTE_OM};
use crate::config::{ColumnConfig, Config, TableConfig};
use crate::core::{DataType, NativeType};
use crate::error::{RegistryError, Result};
use crate::registry::{Dialect, Scheme};

/// Planned profiling for one column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnPlan {
    /// Column name.
    pub name: String,
    /// Catalog data type.
    pub data_type: DataType,
    /// Driver type the column is read as.
    pub native_type: NativeType,
    /// Converter applied on read, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converter: Option<&'static str>,
    /// Expression to select the column with, if the converter rewrites it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_expression: Option<String>,
    /// Classification of the column.
    pub class: ColumnClass,
    /// Metrics eligible to run.
    pub metrics: Vec<Metric>,
}

impl ColumnPlan {
    /// Plan a single column.
    ///
    /// The catalog-level gate applies even when the driver type is
    /// overridden. Without an override the catalog sets decide first and the
    /// mapped driver type covers the rest.
    pub fn build(column: &ColumnConfig) -> Self {
        let native_type = column
            .native_type
            .unwrap_or_else(|| native_type_for(column.data_type));

        let class = if NOT_COMPUTE_OM.contains(&column.data_type) {
            ColumnClass::NotComputable
        } else if column.native_type.is_some() {
            classify(&native_type)
        } else {
            classify_catalog(column.data_type)
        };

        let (converter, column_expression) = match native_type {
            NativeType::Custom(custom) => {
                let converter = custom.converter();
                (Some(converter.name()), converter.column_expression(&column.name))
            }
            _ => (None, None),
        };

        Self {
            name: column.name.clone(),
            data_type: column.data_type,
            native_type,
            converter,
            column_expression,
            class,
            metrics: class.metrics(),
        }
    }
}

/// Planned profiling for one table.
#[derive(Debug, Clone, Serialize)]
pub struct TablePlan {
    /// Table name.
    pub name: String,
    /// Column plans in configured order.
    pub columns: Vec<ColumnPlan>,
}

impl TablePlan {
    fn build(table: &TableConfig) -> Self {
        let columns: Vec<ColumnPlan> = table
            .columns
            .iter()
            .map(|column| {
                let plan = ColumnPlan::build(column);
                debug!(
                    table = %table.name,
                    column = %plan.name,
                    native_type = %plan.native_type,
                    class = %plan.class,
                    "Classified column"
                );
                plan
            })
            .collect();

        Self {
            name: table.name.clone(),
            columns,
        }
    }

    /// Number of columns at least one metric runs on.
    pub fn computable_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.class.is_computable()).count()
    }
}

/// Planned profiling for a whole configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePlan {
    /// Resolved dialect.
    pub dialect: Dialect,
    /// Connection scheme for the dialect.
    pub scheme: Scheme,
    /// Hash of the configuration the plan was built from.
    pub config_hash: String,
    /// Table plans in configured order.
    pub tables: Vec<TablePlan>,
}

impl ProfilePlan {
    /// Build a plan from a configuration.
    ///
    /// Fails only when the service type has no registered dialect.
    pub fn build(config: &Config) -> Result<Self> {
        let service_type = &config.source.service_type;
        let dialect = Dialect::from_service_type(service_type)
            .ok_or_else(|| RegistryError::UnknownDialect(service_type.clone()))?;

        let tables: Vec<TablePlan> = config.tables.iter().map(TablePlan::build).collect();

        let plan = Self {
            dialect,
            scheme: dialect.scheme(),
            config_hash: config.hash(),
            tables,
        };

        info!(
            "Planned {} tables ({} of {} columns computable) for {} ({})",
            plan.tables.len(),
            plan.computable_columns(),
            plan.total_columns(),
            dialect,
            plan.scheme
        );

        Ok(plan)
    }

    /// Number of configured columns.
    pub fn total_columns(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }

    /// Number of columns at least one metric runs on.
    pub fn computable_columns(&self) -> usize {
        self.tables.iter().map(TablePlan::computable_columns).sum()
    }

    /// Serialize the plan as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;

    fn column(name: &str, data_type: DataType, native_type: Option<NativeType>) -> ColumnConfig {
        ColumnConfig {
            name: name.to_string(),
            data_type,
            native_type,
        }
    }

    fn config(service_type: &str) -> Config {
        Config {
            source: SourceConfig {
                service_type: service_type.to_string(),
                service_name: None,
            },
            tables: vec![TableConfig {
                name: "events".to_string(),
                columns: vec![
                    column("id", DataType::BigInt, None),
                    column("kind", DataType::VarChar, None),
                    column("tags", DataType::Array, None),
                    column("body", DataType::Bytea, None),
                    column("created", DataType::Timestamp, None),
                ],
            }],
        }
    }

    #[test]
    fn test_plan_resolves_dialect() {
        let plan = ProfilePlan::build(&config("Hive")).unwrap();
        assert_eq!(plan.dialect, Dialect::Hive);
        assert_eq!(plan.scheme, Scheme::Bytes(b"hive"));
    }

    #[test]
    fn test_plan_rejects_unknown_service_type() {
        let err = ProfilePlan::build(&config("Teradata")).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownDialect(_)));
    }

    #[test]
    fn test_plan_classifies_columns() {
        let plan = ProfilePlan::build(&config("Postgres")).unwrap();
        let classes: Vec<_> = plan.tables[0].columns.iter().map(|c| c.class).collect();
        assert_eq!(
            classes,
            vec![
                ColumnClass::Quantifiable,
                ColumnClass::Concatenable,
                ColumnClass::NotComputable,
                ColumnClass::Other,
                ColumnClass::DateTime,
            ]
        );
        assert_eq!(plan.total_columns(), 5);
        assert_eq!(plan.computable_columns(), 4);
    }

    #[test]
    fn test_plan_records_converter() {
        let plan = ProfilePlan::build(&config("Postgres")).unwrap();
        let body = &plan.tables[0].columns[3];
        assert_eq!(body.converter, Some("ByteaToHex"));
        assert_eq!(body.column_expression.as_deref(), Some("ENCODE(body, 'hex')"));

        let id = &plan.tables[0].columns[0];
        assert!(id.converter.is_none());
    }

    #[test]
    fn test_native_override() {
        let col = column("amount", DataType::String, Some(NativeType::Decimal));
        let plan = ColumnPlan::build(&col);
        assert_eq!(plan.native_type, NativeType::Decimal);
        assert_eq!(plan.class, ColumnClass::Quantifiable);

        // The catalog gate still applies.
        let col = column("doc", DataType::Json, Some(NativeType::Text));
        assert_eq!(ColumnPlan::build(&col).class, ColumnClass::NotComputable);
    }

    #[test]
    fn test_plan_json() {
        let plan = ProfilePlan::build(&config("MySQL")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();
        assert_eq!(value["dialect"], "MySQL");
        assert_eq!(value["scheme"], "mysql");
        assert_eq!(value["tables"][0]["columns"][0]["class"], "quantifiable");
        assert_eq!(value["tables"][0]["columns"][0]["native_type"], "BigInteger");
    }
}
