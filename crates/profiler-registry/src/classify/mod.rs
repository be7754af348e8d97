//! Column type classification.
//!
//! - [`predicates`]: `is_integer`, `is_numeric`, `is_date_time`,
//!   `is_quantifiable`, `is_concatenable`
//! - [`sets`]: static gating sets (`NOT_COMPUTE`, `NOT_COMPUTE_OM`,
//!   `QUANTIFIABLE_DICT`, `CONCATENABLE_DICT`)
//! - [`mapping`]: catalog type → driver type
//! - [`column`]: the combined per-column decision
//!
//! Everything here is a pure function over process-wide constants and may be
//! called concurrently from any number of profiling workers.

pub mod column;
pub mod mapping;
pub mod predicates;
pub mod sets;

pub use column::{classify, classify_catalog, ColumnClass, Metric};
pub use mapping::native_type_for;
pub use predicates::{is_concatenable, is_date_time, is_integer, is_numeric, is_quantifiable};
pub use sets::{CONCATENABLE_DICT, NOT_COMPUTE, NOT_COMPUTE_OM, QUANTIFIABLE_DICT};
