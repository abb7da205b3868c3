//! Dataset-wide figures for the home page and the filter dropdowns.

use crate::analytics::distribution::{categorical_summary, value_counts};
use crate::dataset::derived::DerivedTable;
use crate::dataset::table::Table;
use common::model::column::Column;
use common::model::filter::ALL_SENTINEL;
use common::model::overview::{ColumnOptions, FilterOptions, OverviewStats};
use common::model::stats::ValueCount;
use std::collections::HashMap;

pub fn overview_stats(table: &DerivedTable, fingerprint: &str) -> OverviewStats {
    let base = table.base();
    let dates = table.dates();

    let mut per_day: HashMap<_, usize> = HashMap::new();
    for date in dates {
        *per_day.entry(*date).or_insert(0) += 1;
    }
    let avg_per_day = if per_day.is_empty() {
        0
    } else {
        base.len() / per_day.len()
    };

    OverviewStats {
        total_records: base.len(),
        start_date: dates.iter().min().copied(),
        end_date: dates.iter().max().copied(),
        avg_per_day,
        treatment_rate: share_of(base, Column::Treatment, "Yes"),
        top_occupation: categorical_summary(base.text(Column::Occupation).iter().map(|v| v.as_deref()))
            .mode,
        dataset_md5: fingerprint.to_string(),
    }
}

/// Percentage of non-missing values of `column` equal to `value`.
pub fn share_of(table: &Table, column: Column, value: &str) -> f64 {
    let present: Vec<&str> = table.text(column).iter().flatten().map(String::as_str).collect();
    if present.is_empty() {
        return 0.0;
    }
    let hits = present.iter().filter(|v| **v == value).count();
    hits as f64 / present.len() as f64 * 100.0
}

/// Missing cells per column, fewest first; ties stay in schema order.
pub fn missing_counts(table: &Table) -> Vec<(Column, usize)> {
    let mut counts: Vec<(Column, usize)> = Column::ALL
        .into_iter()
        .map(|c| (c, table.missing(c)))
        .collect();
    counts.sort_by_key(|(_, n)| *n);
    counts
}

pub fn column_counts(table: &Table, column: Column) -> Vec<ValueCount> {
    value_counts(table.text(column).iter().flatten().map(String::as_str))
}

pub fn filter_options(table: &Table) -> FilterOptions {
    let filters = Column::FILTERABLE
        .into_iter()
        .map(|column| {
            let mut values = vec![ALL_SENTINEL.to_string()];
            values.extend(table.distinct(column));
            ColumnOptions { column, values }
        })
        .collect();
    FilterOptions {
        filters,
        columns: Column::ALL.to_vec(),
    }
}
