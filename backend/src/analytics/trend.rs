//! Records over time, bucketed by day, week or calendar month.

use crate::dataset::derived::DerivedTable;
use chrono::{Datelike, Days, Months, NaiveDate};
use common::requests::TrendPeriod;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Bucket label: the date itself, the Sunday ending the week, or the last day of the month.
    pub bucket: NaiveDate,
    pub count: usize,
}

/// Counts records dated within `[start, end]` (both inclusive) per bucket.
///
/// Buckets run from the first to the last non-empty one with gaps zero-filled.
/// With `cumulative` each count becomes the running total from the first bucket.
pub fn trend(
    table: &DerivedTable,
    start: NaiveDate,
    end: NaiveDate,
    period: TrendPeriod,
    cumulative: bool,
) -> Vec<TrendPoint> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for &date in table.dates() {
        if date >= start && date <= end {
            *counts.entry(bucket_of(date, period)).or_insert(0) += 1;
        }
    }

    let (Some(&first), Some(&last)) = (counts.keys().next(), counts.keys().next_back()) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    let mut bucket = first;
    while bucket <= last {
        points.push(TrendPoint {
            bucket,
            count: counts.get(&bucket).copied().unwrap_or(0),
        });
        match next_bucket(bucket, period) {
            Some(next) => bucket = next,
            None => break,
        }
    }

    if cumulative {
        accumulate(&mut points);
    }
    points
}

pub fn accumulate(points: &mut [TrendPoint]) {
    let mut running = 0;
    for p in points.iter_mut() {
        running += p.count;
        p.count = running;
    }
}

pub fn bucket_of(date: NaiveDate, period: TrendPeriod) -> NaiveDate {
    match period {
        TrendPeriod::Day => date,
        TrendPeriod::Week => {
            let to_sunday = 6 - date.weekday().num_days_from_monday();
            date + Days::new(u64::from(to_sunday))
        }
        TrendPeriod::Month => month_end(date.year(), date.month()).unwrap_or(date),
    }
}

fn next_bucket(bucket: NaiveDate, period: TrendPeriod) -> Option<NaiveDate> {
    match period {
        TrendPeriod::Day => bucket.checked_add_days(Days::new(1)),
        TrendPeriod::Week => bucket.checked_add_days(Days::new(7)),
        TrendPeriod::Month => {
            let next = bucket.with_day(1)?.checked_add_months(Months::new(1))?;
            month_end(next.year(), next.month())
        }
    }
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}
