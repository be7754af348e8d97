//! The three type universes the profiler reconciles.
//!
//! - [`catalog_type`]: abstract column types recorded in the metadata catalog
//! - [`native_type`]: driver-native type classes and their capability families
//! - [`frame`]: dtype checks for columns already loaded into a data frame
//! - [`value`]: scalar values handed to the custom converters
//!
//! # Architecture
//!
//! Catalog types are mapped to native types before a query is built
//! (see [`crate::classify::mapping`]). Both native descriptors and frame
//! columns implement [`ColumnType`], which is all the classification
//! predicates need.

pub mod catalog_type;
pub mod frame;
pub mod native_type;
pub mod value;

pub use catalog_type::DataType;
pub use frame::{is_numeric_dtype, is_string_dtype};
pub use native_type::{ColumnType, NativeType, TypeFamily};
pub use value::SqlValue;
