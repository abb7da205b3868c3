use crate::model::chart::ChartSpec;
use crate::model::column::Column;
use serde::{Deserialize, Serialize};

/// Placeholder reported as the mode of an empty value set.
pub const MODE_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingInfo {
    pub count: usize,
    /// Share of all rows, 0-100. Zero for an empty table.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBucket {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Summary of a numeric column, computed over non-missing values only.
///
/// Order statistics are `None` when there are no values; `std` is also `None`
/// with fewer than two values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub missing: MissingInfo,
    pub histogram: Vec<HistogramBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub unique: usize,
    /// Most frequent value, or [`MODE_PLACEHOLDER`] when there are no values.
    pub mode: String,
    pub missing: MissingInfo,
    /// Ordered by descending count.
    pub counts: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

impl ColumnSummary {
    pub fn missing(&self) -> &MissingInfo {
        match self {
            ColumnSummary::Numeric(s) => &s.missing,
            ColumnSummary::Categorical(s) => &s.missing,
        }
    }
}

/// One card on the features page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub column: Column,
    pub description: String,
    pub encoded: bool,
    pub summary: ColumnSummary,
    pub chart: ChartSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInfo {
    pub column: Column,
    pub description: String,
    /// Whether the column has an ordinal-encoded numeric view.
    pub encodable: bool,
}
