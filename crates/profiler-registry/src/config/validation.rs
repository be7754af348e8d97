//! Configuration validation.

use std::collections::HashSet;

use super::Config;
use crate::error::{RegistryError, Result};
use crate::registry::Dialect;

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Source validation
    let service_type = config.source.service_type.as_str();
    if service_type.is_empty() {
        return Err(RegistryError::Config("source.service_type is required".into()));
    }
    if Dialect::from_service_type(service_type).is_none() {
        return Err(RegistryError::UnknownDialect(service_type.to_string()));
    }

    // Table validation
    if config.tables.is_empty() {
        return Err(RegistryError::Config(
            "at least one table must be configured".into(),
        ));
    }

    let mut table_names = HashSet::new();
    for table in &config.tables {
        if table.name.is_empty() {
            return Err(RegistryError::Config("tables[].name is required".into()));
        }
        if !table_names.insert(table.name.as_str()) {
            return Err(RegistryError::Config(format!(
                "table '{}' is configured more than once",
                table.name
            )));
        }
        if table.columns.is_empty() {
            return Err(RegistryError::Config(format!(
                "table '{}' has no columns",
                table.name
            )));
        }

        let mut column_names = HashSet::new();
        for column in &table.columns {
            if column.name.is_empty() {
                return Err(RegistryError::Config(format!(
                    "table '{}' has a column without a name",
                    table.name
                )));
            }
            if !column_names.insert(column.name.as_str()) {
                return Err(RegistryError::Config(format!(
                    "column '{}.{}' is configured more than once",
                    table.name, column.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnConfig, SourceConfig, TableConfig};
    use crate::core::DataType;

    fn valid_config() -> Config {
        Config {
            source: SourceConfig {
                service_type: "Postgres".to_string(),
                service_name: Some("warehouse".to_string()),
            },
            tables: vec![TableConfig {
                name: "orders".to_string(),
                columns: vec![
                    ColumnConfig {
                        name: "id".to_string(),
                        data_type: DataType::Int,
                        native_type: None,
                    },
                    ColumnConfig {
                        name: "note".to_string(),
                        data_type: DataType::Text,
                        native_type: None,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_valid_config() {
        let config = valid_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_service_type() {
        let mut config = valid_config();
        config.source.service_type = "".to_string();
        assert!(matches!(validate(&config), Err(RegistryError::Config(_))));
    }

    #[test]
    fn test_unregistered_service_type() {
        let mut config = valid_config();
        config.source.service_type = "Teradata".to_string();
        assert!(matches!(
            validate(&config),
            Err(RegistryError::UnknownDialect(name)) if name == "Teradata"
        ));
    }

    #[test]
    fn test_no_tables() {
        let mut config = valid_config();
        config.tables.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_duplicate_table() {
        let mut config = valid_config();
        let copy = config.tables[0].clone();
        config.tables.push(copy);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_table_without_columns() {
        let mut config = valid_config();
        config.tables[0].columns.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_duplicate_column() {
        let mut config = valid_config();
        config.tables[0].columns[1].name = "id".to_string();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("orders.id"));
    }
}
