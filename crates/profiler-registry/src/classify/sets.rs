//! Static type sets that gate metric computation.
//!
//! The profiler consults these sets before any predicate runs. A column
//! whose type is in [`NOT_COMPUTE`] (driver types) or [`NOT_COMPUTE_OM`]
//! (catalog types) gets no metrics at all. [`QUANTIFIABLE_DICT`] and
//! [`CONCATENABLE_DICT`] classify catalog types directly when no driver
//! type is available yet.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::core::{DataType, NativeType};

/// Driver types no metric should ever run on.
///
/// Catalog types without a driver mapping resolve to
/// [`NativeType::NullType`] and are skipped through this set.
pub static NOT_COMPUTE: Lazy<HashSet<NativeType>> = Lazy::new(|| {
    HashSet::from([
        NativeType::NullType,
        NativeType::Array,
        NativeType::Json,
        NativeType::Map,
        NativeType::Struct,
        NativeType::Set,
        NativeType::Union,
        NativeType::Geography,
    ])
});

/// Catalog types no metric should ever run on.
pub static NOT_COMPUTE_OM: Lazy<HashSet<DataType>> =
    Lazy::new(|| HashSet::from([DataType::Array, DataType::Json]));

/// Catalog types always profiled as numbers.
pub static QUANTIFIABLE_DICT: Lazy<HashSet<DataType>> = Lazy::new(|| {
    HashSet::from([
        DataType::Int,
        DataType::BigInt,
        DataType::SmallInt,
        DataType::Numeric,
        DataType::Number,
    ])
});

/// Catalog types always profiled as strings.
pub static CONCATENABLE_DICT: Lazy<HashSet<DataType>> =
    Lazy::new(|| HashSet::from([DataType::String, DataType::Text]));
