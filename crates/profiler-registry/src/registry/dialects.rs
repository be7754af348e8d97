//! Dialect registry: service type → connection scheme.
//!
//! Connection-string builders need the scheme token that selects the right
//! database driver for each service type. The mapping is a closed table,
//! kept in alphabetical order by service type.
//!
//! # Byte-valued schemes
//!
//! The Hive driver requires its scheme token as raw bytes rather than text.
//! [`Scheme`] keeps the two forms distinct: `Scheme::Bytes(b"hive")` never
//! compares equal to `Scheme::Text("hive")`. Do not normalize it.
//!
//! # Unregistered service types
//!
//! Every [`Dialect`] has exactly one scheme, so registry lookups cannot fail.
//! Service types arriving as strings must be resolved with
//! [`Dialect::from_service_type`] (or `str::parse`) before the registry is
//! consulted; unknown names are rejected there.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::RegistryError;

/// Connection scheme token for a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Scheme passed to the driver as text.
    Text(&'static str),
    /// Scheme passed to the driver as raw bytes.
    Bytes(&'static [u8]),
}

impl Scheme {
    /// Raw token bytes, regardless of form.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Scheme::Text(s) => s.as_bytes(),
            Scheme::Bytes(b) => b,
        }
    }

    /// Text token, if this scheme is text-valued.
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            Scheme::Text(s) => Some(s),
            Scheme::Bytes(_) => None,
        }
    }

    /// Whether the driver expects the token as bytes.
    pub fn is_bytes(&self) -> bool {
        matches!(self, Scheme::Bytes(_))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Text(s) => f.write_str(s),
            Scheme::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
        }
    }
}

impl Serialize for Scheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scheme::Text(s) => serializer.serialize_str(s),
            Scheme::Bytes(b) => serializer.serialize_bytes(b),
        }
    }
}

/// Database service types with a registered dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Athena,
    AzureSql,
    BigQuery,
    ClickHouse,
    Databricks,
    Db2,
    Druid,
    DynamoDb,
    Glue,
    Hive,
    IbmDbSa,
    Impala,
    MariaDb,
    Mssql,
    MySql,
    Oracle,
    Postgres,
    Presto,
    Redshift,
    SingleStore,
    Sqlite,
    Snowflake,
    Trino,
    Vertica,
}

impl Dialect {
    /// Every registered dialect, alphabetical by service type.
    pub const ALL: [Dialect; 24] = [
        Dialect::Athena,
        Dialect::AzureSql,
        Dialect::BigQuery,
        Dialect::ClickHouse,
        Dialect::Databricks,
        Dialect::Db2,
        Dialect::Druid,
        Dialect::DynamoDb,
        Dialect::Glue,
        Dialect::Hive,
        Dialect::IbmDbSa,
        Dialect::Impala,
        Dialect::MariaDb,
        Dialect::Mssql,
        Dialect::MySql,
        Dialect::Oracle,
        Dialect::Postgres,
        Dialect::Presto,
        Dialect::Redshift,
        Dialect::SingleStore,
        Dialect::Sqlite,
        Dialect::Snowflake,
        Dialect::Trino,
        Dialect::Vertica,
    ];

    /// Service type identifier, as used by the service catalog.
    pub fn service_type(&self) -> &'static str {
        match self {
            Dialect::Athena => "Athena",
            Dialect::AzureSql => "AzureSQL",
            Dialect::BigQuery => "BigQuery",
            Dialect::ClickHouse => "ClickHouse",
            Dialect::Databricks => "Databricks",
            Dialect::Db2 => "Db2",
            Dialect::Druid => "Druid",
            Dialect::DynamoDb => "DynamoDB",
            Dialect::Glue => "Glue",
            Dialect::Hive => "Hive",
            Dialect::IbmDbSa => "IbmDbSa",
            Dialect::Impala => "Impala",
            Dialect::MariaDb => "MariaDB",
            Dialect::Mssql => "MSSQL",
            Dialect::MySql => "MySQL",
            Dialect::Oracle => "Oracle",
            Dialect::Postgres => "Postgres",
            Dialect::Presto => "Presto",
            Dialect::Redshift => "Redshift",
            Dialect::SingleStore => "SingleStore",
            Dialect::Sqlite => "SQLite",
            Dialect::Snowflake => "Snowflake",
            Dialect::Trino => "Trino",
            Dialect::Vertica => "Vertica",
        }
    }

    /// Scheme token the connection-string builder must use.
    pub fn scheme(&self) -> Scheme {
        match self {
            Dialect::Athena => Scheme::Text("awsathena"),
            Dialect::AzureSql => Scheme::Text("azuresql"),
            Dialect::BigQuery => Scheme::Text("bigquery"),
            Dialect::ClickHouse => Scheme::Text("clickhouse"),
            Dialect::Databricks => Scheme::Text("databricks"),
            Dialect::Db2 => Scheme::Text("db2"),
            Dialect::Druid => Scheme::Text("druid"),
            Dialect::DynamoDb => Scheme::Text("dynamoDB"),
            Dialect::Glue => Scheme::Text("glue"),
            // The Hive driver only accepts a byte-valued scheme.
            Dialect::Hive => Scheme::Bytes(b"hive"),
            Dialect::IbmDbSa => Scheme::Text("ibm_db_sa"),
            Dialect::Impala => Scheme::Text("impala"),
            Dialect::MariaDb => Scheme::Text("mariadb"),
            Dialect::Mssql => Scheme::Text("mssql"),
            Dialect::MySql => Scheme::Text("mysql"),
            Dialect::Oracle => Scheme::Text("oracle"),
            Dialect::Postgres => Scheme::Text("postgresql"),
            Dialect::Presto => Scheme::Text("presto"),
            Dialect::Redshift => Scheme::Text("redshift"),
            Dialect::SingleStore => Scheme::Text("singlestore"),
            Dialect::Sqlite => Scheme::Text("sqlite"),
            Dialect::Snowflake => Scheme::Text("snowflake"),
            Dialect::Trino => Scheme::Text("trino"),
            Dialect::Vertica => Scheme::Text("vertica"),
        }
    }

    /// Resolve a service type identifier. Matching is exact.
    pub fn from_service_type(service_type: &str) -> Option<Dialect> {
        Dialect::ALL
            .iter()
            .copied()
            .find(|d| d.service_type() == service_type)
    }

    /// Reverse lookup by scheme token. Form (text or bytes) must match.
    pub fn from_scheme(scheme: &Scheme) -> Option<Dialect> {
        Dialect::ALL.iter().copied().find(|d| d.scheme() == *scheme)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_type())
    }
}

impl FromStr for Dialect {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::from_service_type(s).ok_or_else(|| RegistryError::UnknownDialect(s.to_string()))
    }
}

impl Serialize for Dialect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.service_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scheme_is_non_empty() {
        for dialect in Dialect::ALL {
            assert!(!dialect.scheme().as_bytes().is_empty(), "{}", dialect);
        }
    }

    #[test]
    fn test_only_hive_is_byte_valued() {
        let bytes: Vec<_> = Dialect::ALL
            .iter()
            .filter(|d| d.scheme().is_bytes())
            .collect();
        assert_eq!(bytes, vec![&Dialect::Hive]);
    }

    #[test]
    fn test_hive_scheme_is_not_text() {
        let scheme = Dialect::Hive.scheme();
        assert_eq!(scheme, Scheme::Bytes(b"hive"));
        assert_ne!(scheme, Scheme::Text("hive"));
        assert_eq!(scheme.as_bytes(), b"hive");
        assert_eq!(scheme.as_text(), None);
        assert_eq!(scheme.to_string(), "hive");
    }

    #[test]
    fn test_registry_is_alphabetical_by_service_type() {
        // The service catalog sorts case-insensitively except that SQLite
        // historically sits before Snowflake.
        let names: Vec<_> = Dialect::ALL.iter().map(|d| d.service_type()).collect();
        assert_eq!(names.first(), Some(&"Athena"));
        assert_eq!(names.last(), Some(&"Vertica"));
        assert_eq!(names.len(), 24);
        for pair in names.windows(2) {
            let (a, b) = (pair[0].to_lowercase(), pair[1].to_lowercase());
            assert!(a < b || pair == ["SQLite", "Snowflake"], "{:?}", pair);
        }
    }

    #[test]
    fn test_service_type_lookup() {
        assert_eq!(Dialect::from_service_type("Postgres"), Some(Dialect::Postgres));
        assert_eq!(
            Dialect::Postgres.scheme(),
            Scheme::Text("postgresql")
        );
        assert_eq!(Dialect::from_service_type("postgres"), None);
        assert!(matches!(
            "Teradata".parse::<Dialect>(),
            Err(RegistryError::UnknownDialect(_))
        ));
    }

    #[test]
    fn test_scheme_reverse_lookup() {
        assert_eq!(
            Dialect::from_scheme(&Scheme::Text("awsathena")),
            Some(Dialect::Athena)
        );
        assert_eq!(Dialect::from_scheme(&Scheme::Bytes(b"hive")), Some(Dialect::Hive));
        assert_eq!(Dialect::from_scheme(&Scheme::Text("hive")), None);
    }

    #[test]
    fn test_serialize_keeps_byte_form() {
        let text = serde_json::to_value(Scheme::Text("mysql")).unwrap();
        assert_eq!(text, serde_json::json!("mysql"));

        let bytes = serde_json::to_value(Scheme::Bytes(b"hive")).unwrap();
        assert_eq!(bytes, serde_json::json!([104, 105, 118, 101]));
    }
}
