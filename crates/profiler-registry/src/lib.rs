//! # profiler-registry
//!
//! Type lookup layer for a data-profiling engine.
//!
//! The profiler has to reconcile three independent type universes before it
//! can decide which statistics to compute on a column:
//!
//! - **Catalog types**: the abstract [`DataType`] recorded in the metadata catalog
//! - **Driver types**: the [`NativeType`] class a database driver reads a column as
//! - **Dialects**: the connection [`Scheme`] for each supported database service
//!
//! This crate provides:
//!
//! - **Classification predicates** deciding whether a column is quantifiable,
//!   concatenable, a date/time, or not computable at all
//! - **Static gating sets** consulted before any predicate runs
//! - **A dialect registry** mapping service types to connection schemes
//! - **A converter registry** for bytes, UUID and `bytea` columns
//!
//! Nothing here connects to a database or computes a metric. Every lookup is
//! a pure function over process-wide constants.
//!
//! ## Example
//!
//! ```rust
//! use profiler_registry::{classify, is_quantifiable, ColumnClass, Dialect, NativeType, Scheme};
//!
//! assert!(is_quantifiable(&NativeType::Integer));
//! assert_eq!(classify(&NativeType::Array), ColumnClass::NotComputable);
//!
//! let dialect: Dialect = "Postgres".parse().unwrap();
//! assert_eq!(dialect.scheme(), Scheme::Text("postgresql"));
//! ```

pub mod classify;
pub mod config;
pub mod core;
pub mod error;
pub mod plan;
pub mod registry;

// Re-exports for convenient access
pub use crate::classify::{
    classify, classify_catalog, is_concatenable, is_date_time, is_integer, is_numeric,
    is_quantifiable, native_type_for, ColumnClass, Metric, CONCATENABLE_DICT, NOT_COMPUTE,
    NOT_COMPUTE_OM, QUANTIFIABLE_DICT,
};
pub use crate::config::{ColumnConfig, Config, SourceConfig, TableConfig};
pub use crate::core::{ColumnType, DataType, NativeType, SqlValue, TypeFamily};
pub use crate::error::{RegistryError, Result};
pub use crate::plan::{ColumnPlan, ProfilePlan, TablePlan};
pub use crate::registry::{CustomType, Dialect, ScalarConverter, Scheme};
