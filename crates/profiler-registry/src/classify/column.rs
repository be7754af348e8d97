//! Per-column metric eligibility.
//!
//! Combines the gating sets and the predicates into the single decision the
//! profiler makes for each column: which metrics may run on it.

use std::fmt;

use serde::Serialize;

use super::mapping::native_type_for;
use super::predicates::{is_concatenable, is_date_time, is_quantifiable};
use super::sets::{CONCATENABLE_DICT, NOT_COMPUTE, NOT_COMPUTE_OM, QUANTIFIABLE_DICT};
use crate::core::{ColumnType, DataType};

/// How the profiler treats a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnClass {
    /// No metric runs on the column.
    NotComputable,
    /// Numeric aggregates apply.
    Quantifiable,
    /// String length metrics apply.
    Concatenable,
    /// Range metrics apply.
    DateTime,
    /// Only counting metrics apply.
    Other,
}

/// A single profiler metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    ValuesCount,
    NullCount,
    NullProportion,
    DistinctCount,
    UniqueCount,
    Min,
    Max,
    Mean,
    Sum,
    StdDev,
    Median,
    FirstQuartile,
    ThirdQuartile,
    InterQuartileRange,
    Histogram,
    MinLength,
    MaxLength,
}

const STATIC_METRICS: [Metric; 5] = [
    Metric::ValuesCount,
    Metric::NullCount,
    Metric::NullProportion,
    Metric::DistinctCount,
    Metric::UniqueCount,
];

impl ColumnClass {
    /// Metrics eligible to run on a column of this class.
    pub fn metrics(&self) -> Vec<Metric> {
        let extra: &[Metric] = match self {
            ColumnClass::NotComputable => return Vec::new(),
            ColumnClass::Other => &[],
            ColumnClass::DateTime => &[Metric::Min, Metric::Max],
            ColumnClass::Concatenable => &[Metric::MinLength, Metric::MaxLength, Metric::Mean],
            ColumnClass::Quantifiable => &[
                Metric::Min,
                Metric::Max,
                Metric::Mean,
                Metric::Sum,
                Metric::StdDev,
                Metric::Median,
                Metric::FirstQuartile,
                Metric::ThirdQuartile,
                Metric::InterQuartileRange,
                Metric::Histogram,
            ],
        };
        STATIC_METRICS.iter().chain(extra).copied().collect()
    }

    /// Whether any metric runs on the column.
    pub fn is_computable(&self) -> bool {
        !matches!(self, ColumnClass::NotComputable)
    }
}

impl fmt::Display for ColumnClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnClass::NotComputable => "not_computable",
            ColumnClass::Quantifiable => "quantifiable",
            ColumnClass::Concatenable => "concatenable",
            ColumnClass::DateTime => "date_time",
            ColumnClass::Other => "other",
        };
        f.write_str(name)
    }
}

/// Classify a column from its driver or frame type.
///
/// The `NOT_COMPUTE` gate runs before any predicate: several excluded types
/// (arrays, maps) would otherwise classify as concatenable.
pub fn classify<T: ColumnType + ?Sized>(column_type: &T) -> ColumnClass {
    if let Some(native) = column_type.native_type() {
        if NOT_COMPUTE.contains(&native) {
            return ColumnClass::NotComputable;
        }
    }

    if is_quantifiable(column_type) {
        ColumnClass::Quantifiable
    } else if is_concatenable(column_type) {
        ColumnClass::Concatenable
    } else if is_date_time(column_type) {
        ColumnClass::DateTime
    } else {
        ColumnClass::Other
    }
}

/// Classify a column known only by its catalog type.
pub fn classify_catalog(data_type: DataType) -> ColumnClass {
    if NOT_COMPUTE_OM.contains(&data_type) {
        ColumnClass::NotComputable
    } else if QUANTIFIABLE_DICT.contains(&data_type) {
        ColumnClass::Quantifiable
    } else if CONCATENABLE_DICT.contains(&data_type) {
        ColumnClass::Concatenable
    } else {
        classify(&native_type_for(data_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NativeType;
    use polars::prelude::{NamedFrom, Series};

    #[test]
    fn test_gate_wins_over_predicates() {
        assert_eq!(classify(&NativeType::Array), ColumnClass::NotComputable);
        assert_eq!(classify(&NativeType::Map), ColumnClass::NotComputable);
        assert_eq!(classify(&NativeType::NullType), ColumnClass::NotComputable);
    }

    #[test]
    fn test_native_classes() {
        assert_eq!(classify(&NativeType::Integer), ColumnClass::Quantifiable);
        assert_eq!(classify(&NativeType::Varchar), ColumnClass::Concatenable);
        assert_eq!(classify(&NativeType::Timestamp), ColumnClass::DateTime);
        assert_eq!(classify(&NativeType::Boolean), ColumnClass::Other);
    }

    #[test]
    fn test_frame_columns() {
        let amounts = Series::new("amount".into(), vec![1.5f64, 2.5]);
        assert_eq!(classify(&amounts), ColumnClass::Quantifiable);

        let names = Series::new("name".into(), vec!["a", "b"]);
        assert_eq!(classify(&names), ColumnClass::Concatenable);
    }

    #[test]
    fn test_catalog_classes() {
        assert_eq!(classify_catalog(DataType::Json), ColumnClass::NotComputable);
        assert_eq!(classify_catalog(DataType::Array), ColumnClass::NotComputable);
        assert_eq!(classify_catalog(DataType::Number), ColumnClass::Quantifiable);
        assert_eq!(classify_catalog(DataType::Text), ColumnClass::Concatenable);
        // Not in the catalog sets, resolved through the driver mapping.
        assert_eq!(classify_catalog(DataType::Double), ColumnClass::Quantifiable);
        assert_eq!(classify_catalog(DataType::VarChar), ColumnClass::Concatenable);
        assert_eq!(classify_catalog(DataType::Date), ColumnClass::DateTime);
        assert_eq!(classify_catalog(DataType::Struct), ColumnClass::NotComputable);
        assert_eq!(classify_catalog(DataType::Xml), ColumnClass::NotComputable);
        assert_eq!(classify_catalog(DataType::Uuid), ColumnClass::Other);
    }

    #[test]
    fn test_metrics_per_class() {
        assert!(ColumnClass::NotComputable.metrics().is_empty());
        assert_eq!(ColumnClass::Other.metrics(), STATIC_METRICS.to_vec());

        let numeric = ColumnClass::Quantifiable.metrics();
        assert!(numeric.contains(&Metric::Histogram));
        assert!(!numeric.contains(&Metric::MinLength));

        let text = ColumnClass::Concatenable.metrics();
        assert!(text.contains(&Metric::MaxLength));
        assert!(!text.contains(&Metric::Sum));
    }

    #[test]
    fn test_metric_names() {
        let json = serde_json::to_string(&Metric::InterQuartileRange).unwrap();
        assert_eq!(json, "\"interQuartileRange\"");
    }
}
