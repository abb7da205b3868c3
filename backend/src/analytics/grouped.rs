use crate::analytics::filter;
use crate::dataset::table::Table;
use common::model::column::Column;
use common::model::filter::FilterSpec;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub x: String,
    pub hue: String,
    pub count: usize,
}

/// Counts filtered records per observed (x, hue) pair, ordered by (x, hue).
///
/// Records missing either value are dropped; pairs that never occur are absent.
pub fn grouped_counts(table: &Table, spec: &FilterSpec, x: Column, hue: Column) -> Vec<GroupCount> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for row in filter::apply(table, spec) {
        if let (Some(xv), Some(hv)) = (table.value(x, row), table.value(hue, row)) {
            *counts.entry((xv, hv)).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|((x, hue), count)| GroupCount {
            x: x.to_string(),
            hue: hue.to_string(),
            count,
        })
        .collect()
}
