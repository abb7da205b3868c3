use crate::model::column::Column;
use crate::model::filter::FilterSpec;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request payload for the filtered single-column distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRequest {
    #[serde(default)]
    pub filters: FilterSpec,
    pub column: Column,
}

/// Request payload for the grouped bar chart: counts per (x, hue) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRequest {
    pub x: Column,
    pub hue: Column,
    #[serde(default)]
    pub filters: FilterSpec,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    Day,
    Week,
    #[default]
    Month,
}

impl TrendPeriod {
    pub const ALL: [TrendPeriod; 3] = [TrendPeriod::Day, TrendPeriod::Week, TrendPeriod::Month];

    pub fn label(self) -> &'static str {
        match self {
            TrendPeriod::Day => "Daily",
            TrendPeriod::Week => "Weekly",
            TrendPeriod::Month => "Monthly",
        }
    }
}

/// Request payload for the records-over-time chart. Both bounds are inclusive dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub period: TrendPeriod,
    #[serde(default)]
    pub cumulative: bool,
}

/// Request payload for the correlation heatmap. Cells with |r| below
/// `threshold` are hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationRequest {
    #[serde(default)]
    pub threshold: f64,
}

/// Query string of `GET /api/features/{column}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureQuery {
    #[serde(default)]
    pub encoded: bool,
}
