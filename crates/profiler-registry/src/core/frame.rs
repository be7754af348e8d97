//! Dtype checks for columns already materialized in memory.
//!
//! Some engines hand the profiler a data frame rather than a driver type
//! descriptor. Those columns carry no driver type class at all, so
//! classification falls back to the frame's dtype.

use polars::prelude::{DataType as FrameDtype, Series};

use super::native_type::ColumnType;

/// Whether a frame dtype holds numbers.
///
/// Booleans count as numeric, matching the dataframe convention the profiler
/// was built against.
pub fn is_numeric_dtype(dtype: &FrameDtype) -> bool {
    matches!(
        dtype,
        FrameDtype::Boolean
            | FrameDtype::Int8
            | FrameDtype::Int16
            | FrameDtype::Int32
            | FrameDtype::Int64
            | FrameDtype::UInt8
            | FrameDtype::UInt16
            | FrameDtype::UInt32
            | FrameDtype::UInt64
            | FrameDtype::Float32
            | FrameDtype::Float64
            | FrameDtype::Decimal(_, _)
    )
}

/// Whether a frame dtype holds text.
pub fn is_string_dtype(dtype: &FrameDtype) -> bool {
    matches!(dtype, FrameDtype::String)
}

impl ColumnType for FrameDtype {
    fn frame_dtype(&self) -> Option<&FrameDtype> {
        Some(self)
    }
}

impl ColumnType for Series {
    fn frame_dtype(&self) -> Option<&FrameDtype> {
        Some(self.dtype())
    }
}
