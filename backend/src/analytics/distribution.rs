//! Single-column distributions and their summary statistics.

use crate::analytics::filter;
use crate::dataset::derived::DerivedTable;
use common::model::column::Column;
use common::model::filter::FilterSpec;
use common::model::stats::{
    CategoricalSummary, ColumnSummary, HistogramBucket, MissingInfo, NumericSummary, ValueCount,
    MODE_PLACEHOLDER,
};
use std::collections::HashMap;

pub const HISTOGRAM_BUCKETS: usize = 20;

/// Filters `table` with `spec` and summarizes `column` over the remaining rows.
///
/// With `encoded` set and an ordinal mapping available the numeric view is
/// summarized; otherwise the raw text is treated as categorical.
pub fn distribution(
    table: &DerivedTable,
    spec: &FilterSpec,
    column: Column,
    encoded: bool,
) -> ColumnSummary {
    let rows = filter::apply(table.base(), spec);
    summarize(table, column, encoded, &rows)
}

pub fn summarize(table: &DerivedTable, column: Column, encoded: bool, rows: &[usize]) -> ColumnSummary {
    match table.numeric(column) {
        Some(values) if encoded => {
            ColumnSummary::Numeric(numeric_summary(rows.iter().map(|&r| values[r])))
        }
        _ => {
            let base = table.base();
            ColumnSummary::Categorical(categorical_summary(
                rows.iter().map(|&r| base.value(column, r)),
            ))
        }
    }
}

pub fn categorical_summary<'a, I>(values: I) -> CategoricalSummary
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut total = 0usize;
    let mut present = Vec::new();
    for value in values {
        total += 1;
        if let Some(v) = value {
            present.push(v);
        }
    }

    let counts = value_counts(present.iter().copied());
    let mode = counts
        .iter()
        .max_by(|a, b| a.count.cmp(&b.count).then_with(|| b.value.cmp(&a.value)))
        .map(|vc| vc.value.clone())
        .unwrap_or_else(|| MODE_PLACEHOLDER.to_string());

    CategoricalSummary {
        unique: counts.len(),
        mode,
        missing: missing_info(total - present.len(), total),
        counts,
    }
}

/// Occurrences per distinct value, by descending count; ties keep first-seen order.
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ValueCount> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(ValueCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn numeric_summary<I>(values: I) -> NumericSummary
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut total = 0usize;
    let mut present: Vec<f64> = Vec::new();
    for value in values {
        total += 1;
        if let Some(v) = value {
            present.push(v);
        }
    }
    present.sort_by(f64::total_cmp);

    let n = present.len();
    let mean = (n > 0).then(|| present.iter().sum::<f64>() / n as f64);
    let std = mean.filter(|_| n > 1).map(|m| {
        let ss: f64 = present.iter().map(|v| (v - m).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    NumericSummary {
        count: n,
        min: present.first().copied(),
        q1: quantile(&present, 0.25),
        median: quantile(&present, 0.5),
        q3: quantile(&present, 0.75),
        max: present.last().copied(),
        mean,
        std,
        missing: missing_info(total - n, total),
        histogram: histogram(&present, HISTOGRAM_BUCKETS),
    }
}

/// Quantile of sorted values, interpolating linearly between order statistics.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

/// Equal-width buckets spanning [min, max]; the last bucket is closed on the right.
pub fn histogram(values: &[f64], buckets: usize) -> Vec<HistogramBucket> {
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };

    if min == max || buckets <= 1 {
        return vec![HistogramBucket {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / buckets as f64;
    let mut out: Vec<HistogramBucket> = (0..buckets)
        .map(|i| HistogramBucket {
            start: min + width * i as f64,
            end: if i + 1 == buckets {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();
    for v in values {
        let idx = (((v - min) / width).floor() as usize).min(buckets - 1);
        out[idx].count += 1;
    }
    out
}

fn missing_info(missing: usize, total: usize) -> MissingInfo {
    MissingInfo {
        count: missing,
        percent: if total == 0 {
            0.0
        } else {
            missing as f64 / total as f64 * 100.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;

    fn categorical(summary: ColumnSummary) -> CategoricalSummary {
        match summary {
            ColumnSummary::Categorical(s) => s,
            other => panic!("expected categorical summary, got {:?}", other),
        }
    }

    fn numeric(summary: ColumnSummary) -> NumericSummary {
        match summary {
            ColumnSummary::Numeric(s) => s,
            other => panic!("expected numeric summary, got {:?}", other),
        }
    }

    #[test]
    fn treatment_counts_for_three_records() {
        let table = fixtures::table_from_rows(&[
            "8/27/2014 11:29,Female,Peru,Others,No,No,Yes,1-14 days,No,No,No,Low,No,No,No,No,No",
            "8/27/2014 11:30,Male,Peru,Others,No,No,No,1-14 days,No,No,No,Low,No,No,No,No,No",
            "8/27/2014 11:31,Male,Peru,Others,No,No,Yes,1-14 days,No,No,No,Low,No,No,No,No,No",
        ]);
        let s = categorical(distribution(&table, &FilterSpec::all(), Column::Treatment, false));
        let pairs: Vec<(&str, usize)> = s.counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("Yes", 2), ("No", 1)]);
        assert_eq!(s.mode, "Yes");
        assert_eq!(s.unique, 2);
    }

    #[test]
    fn mode_ties_break_lexicographically() {
        let table = fixtures::derived_table();
        let s = categorical(distribution(&table, &FilterSpec::all(), Column::Occupation, false));
        assert_eq!(s.mode, "Corporate");
        assert_eq!(s.counts[0].value, "Corporate");
        assert_eq!(s.counts[1].value, "Student");
    }

    #[test]
    fn missing_plus_present_covers_every_row() {
        let table = fixtures::derived_table();
        let s = numeric(distribution(&table, &FilterSpec::all(), Column::SelfEmployed, true));
        assert_eq!(s.count + s.missing.count, table.len());
        assert_eq!(s.missing.count, 1);
        assert!((s.mean.unwrap() - 0.2).abs() < 1e-12);
        assert!((s.missing.percent - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let table = fixtures::derived_table();
        let s = numeric(distribution(&table, &FilterSpec::all(), Column::DaysIndoors, true));
        assert_eq!(s.min, Some(1.0));
        assert_eq!(s.q1, Some(2.25));
        assert_eq!(s.median, Some(3.5));
        assert_eq!(s.q3, Some(4.0));
        assert_eq!(s.max, Some(5.0));
        assert!((s.mean.unwrap() - 19.0 / 6.0).abs() < 1e-12);
        let expected_std = ((1.0f64 - 19.0 / 6.0).powi(2)
            + (2.0f64 - 19.0 / 6.0).powi(2)
            + (3.0f64 - 19.0 / 6.0).powi(2)
            + 2.0 * (4.0f64 - 19.0 / 6.0).powi(2)
            + (5.0f64 - 19.0 / 6.0).powi(2))
            / 5.0;
        assert!((s.std.unwrap() - expected_std.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn histogram_has_fixed_bucket_count() {
        let table = fixtures::derived_table();
        let s = numeric(distribution(&table, &FilterSpec::all(), Column::DaysIndoors, true));
        assert_eq!(s.histogram.len(), HISTOGRAM_BUCKETS);
        assert_eq!(s.histogram.iter().map(|b| b.count).sum::<usize>(), 6);
        assert_eq!(s.histogram.last().unwrap().count, 1);
        assert_eq!(s.histogram.last().unwrap().end, 5.0);
    }

    #[test]
    fn constant_values_use_one_bucket() {
        let buckets = histogram(&[2.0, 2.0, 2.0], HISTOGRAM_BUCKETS);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].count, 3);
    }

    #[test]
    fn encoded_flag_is_ignored_without_mapping() {
        let table = fixtures::derived_table();
        let s = distribution(&table, &FilterSpec::all(), Column::Country, true);
        assert!(matches!(s, ColumnSummary::Categorical(_)));
    }

    #[test]
    fn empty_selection_yields_placeholder() {
        let table = fixtures::derived_table();
        let spec = FilterSpec::all().with(Column::Country, &["Atlantis"]);
        let s = categorical(distribution(&table, &spec, Column::Gender, false));
        assert!(s.counts.is_empty());
        assert_eq!(s.unique, 0);
        assert_eq!(s.mode, MODE_PLACEHOLDER);
        assert_eq!(s.missing.percent, 0.0);

        let n = numeric(distribution(&table, &spec, Column::Treatment, true));
        assert_eq!(n.count, 0);
        assert_eq!(n.mean, None);
        assert!(n.histogram.is_empty());
    }

    #[test]
    fn filters_narrow_the_distribution() {
        let table = fixtures::derived_table();
        let spec = FilterSpec::all().with(Column::Country, &["Poland"]);
        let s = categorical(distribution(&table, &spec, Column::DaysIndoors, false));
        let total: usize = s.counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn single_value_has_no_std() {
        let s = numeric_summary([Some(3.0), None]);
        assert_eq!(s.std, None);
        assert_eq!(s.median, Some(3.0));
        assert_eq!(s.missing.percent, 50.0);
    }
}
