//! Boolean classification of column types.
//!
//! Each predicate checks the driver's capability families first. The
//! quantifiable and concatenable checks then fall back to the frame dtype,
//! so a column that was loaded into memory without any driver type class
//! still classifies.

use crate::core::{is_numeric_dtype, is_string_dtype, ColumnType, TypeFamily};

fn has_family<T: ColumnType + ?Sized>(column_type: &T, family: TypeFamily) -> bool {
    column_type.families().contains(&family)
}

/// Whether the type belongs to the Integer family.
pub fn is_integer<T: ColumnType + ?Sized>(column_type: &T) -> bool {
    has_family(column_type, TypeFamily::Integer)
}

/// Whether the type belongs to the Numeric family.
///
/// Integers are not Numeric; use [`is_quantifiable`] to accept both.
pub fn is_numeric<T: ColumnType + ?Sized>(column_type: &T) -> bool {
    has_family(column_type, TypeFamily::Numeric)
}

/// Whether the type belongs to the Date, Time or DateTime family.
pub fn is_date_time<T: ColumnType + ?Sized>(column_type: &T) -> bool {
    has_family(column_type, TypeFamily::Date)
        || has_family(column_type, TypeFamily::Time)
        || has_family(column_type, TypeFamily::DateTime)
}

/// Whether numeric aggregates (mean, sum, percentiles) make sense for the type.
pub fn is_quantifiable<T: ColumnType + ?Sized>(column_type: &T) -> bool {
    is_numeric(column_type)
        || is_integer(column_type)
        || column_type.frame_dtype().is_some_and(is_numeric_dtype)
}

/// Whether string metrics (length, pattern) make sense for the type.
pub fn is_concatenable<T: ColumnType + ?Sized>(column_type: &T) -> bool {
    has_family(column_type, TypeFamily::Concatenable)
        || column_type.frame_dtype().is_some_and(is_string_dtype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NativeType;
    use polars::prelude::{DataType as FrameDtype, NamedFrom, Series};

    #[test]
    fn test_integer_column() {
        let int32 = NativeType::Integer;
        assert!(is_integer(&int32));
        assert!(!is_numeric(&int32));
        assert!(is_quantifiable(&int32));
        assert!(!is_concatenable(&int32));
        assert!(!is_date_time(&int32));
    }

    #[test]
    fn test_numeric_column() {
        for t in [NativeType::Numeric, NativeType::Float, NativeType::Decimal] {
            assert!(is_numeric(&t), "{}", t);
            assert!(!is_integer(&t), "{}", t);
            assert!(is_quantifiable(&t), "{}", t);
        }
        for t in [NativeType::SmallInteger, NativeType::BigInteger] {
            assert!(is_quantifiable(&t), "{}", t);
        }
    }

    #[test]
    fn test_date_time_each_family() {
        assert!(is_date_time(&NativeType::Date));
        assert!(is_date_time(&NativeType::Time));
        assert!(is_date_time(&NativeType::DateTime));
        assert!(is_date_time(&NativeType::Timestamp));
        assert!(!is_date_time(&NativeType::Integer));
        assert!(!is_date_time(&NativeType::Interval));
    }

    #[test]
    fn test_concatenable_column() {
        for t in [
            NativeType::String,
            NativeType::Text,
            NativeType::Char,
            NativeType::Varchar,
            NativeType::Enum,
        ] {
            assert!(is_concatenable(&t), "{}", t);
            assert!(!is_quantifiable(&t), "{}", t);
        }
        assert!(!is_concatenable(&NativeType::Boolean));
        assert!(!is_concatenable(&NativeType::LargeBinary));
    }

    #[test]
    fn test_frame_fallback_numeric() {
        let ids = Series::new("id".into(), vec![1i64, 2, 3]);
        assert!(!is_integer(&ids));
        assert!(!is_numeric(&ids));
        assert!(is_quantifiable(&ids));
        assert!(!is_concatenable(&ids));

        assert!(is_quantifiable(&FrameDtype::Float32));
    }

    #[test]
    fn test_frame_fallback_string() {
        let names = Series::new("name".into(), vec!["a", "b", "c"]);
        assert!(is_concatenable(&names));
        assert!(!is_quantifiable(&names));
        assert!(!is_date_time(&names));
    }

    #[test]
    fn test_custom_converter_types_do_not_classify() {
        use crate::registry::CustomType;
        for custom in CustomType::ALL {
            let t = NativeType::Custom(custom);
            assert!(!is_quantifiable(&t));
            assert!(!is_concatenable(&t));
        }
    }

    #[test]
    fn test_works_through_trait_objects() {
        let types: Vec<Box<dyn ColumnType>> = vec![
            Box::new(NativeType::BigInteger),
            Box::new(FrameDtype::String),
        ];
        assert!(is_quantifiable(types[0].as_ref()));
        assert!(is_concatenable(types[1].as_ref()));
    }
}
