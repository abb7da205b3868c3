use crate::model::chart::ChartSpec;
use crate::model::column::Column;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline figures for the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_records: usize,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Mean number of records per observed date, truncated.
    pub avg_per_day: usize,
    /// Percentage of "Yes" among non-missing treatment answers.
    pub treatment_rate: f64,
    pub top_occupation: String,
    /// MD5 of the dataset file the server loaded.
    pub dataset_md5: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub stats: OverviewStats,
    pub gender_chart: ChartSpec,
    pub treatment_chart: ChartSpec,
    pub missing_chart: ChartSpec,
    pub world_chart: ChartSpec,
}

/// Distinct values offered for one filter dropdown, the "All" sentinel first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOptions {
    pub column: Column,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub filters: Vec<ColumnOptions>,
    /// Columns selectable for distribution and grouped charts.
    pub columns: Vec<Column>,
}
