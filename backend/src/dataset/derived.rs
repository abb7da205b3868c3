use crate::dataset::table::Table;
use chrono::NaiveDate;
use common::model::column::{Column, OrdinalMapping};
use std::collections::BTreeMap;

/// The base table plus the columns computed from it once at startup:
/// the calendar date of each record and one numeric column per ordinal column.
#[derive(Debug, Clone)]
pub struct DerivedTable {
    base: Table,
    dates: Vec<NaiveDate>,
    encoded: BTreeMap<Column, Vec<Option<f64>>>,
}

impl DerivedTable {
    pub fn build(base: Table) -> Self {
        let dates = base.timestamps().iter().map(|ts| ts.date()).collect();
        let encoded = Column::encoded()
            .filter_map(|column| {
                column
                    .ordinal_mapping()
                    .map(|mapping| (column, encode(base.text(column), mapping)))
            })
            .collect();
        Self {
            base,
            dates,
            encoded,
        }
    }

    pub fn base(&self) -> &Table {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The ordinal-encoded view of `column`, if it has one.
    pub fn numeric(&self, column: Column) -> Option<&[Option<f64>]> {
        self.encoded.get(&column).map(Vec::as_slice)
    }

    /// Numeric columns in schema order.
    pub fn numeric_columns(&self) -> Vec<Column> {
        self.encoded.keys().copied().collect()
    }
}

/// Looks every value up in `mapping`; missing and unmapped values become `None`.
pub fn encode(values: &[Option<String>], mapping: OrdinalMapping) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|value| {
            value.as_deref().and_then(|v| {
                mapping
                    .iter()
                    .find(|(label, _)| *label == v)
                    .map(|(_, rank)| *rank as f64)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;

    #[test]
    fn unmapped_values_become_missing() {
        let values = vec![
            Some("Yes".to_string()),
            Some("Sometimes".to_string()),
            None,
            Some("No".to_string()),
        ];
        let mapping = Column::Treatment.ordinal_mapping().unwrap();
        assert_eq!(encode(&values, mapping), vec![Some(1.0), None, None, Some(0.0)]);
    }

    #[test]
    fn every_ordinal_column_gets_a_numeric_view() {
        let table = fixtures::derived_table();
        assert_eq!(table.numeric_columns().len(), 13);
        assert!(table.numeric(Column::Country).is_none());
        assert_eq!(
            table.numeric(Column::DaysIndoors).unwrap(),
            &[Some(4.0), Some(4.0), Some(5.0), Some(1.0), Some(3.0), Some(2.0)]
        );
        assert_eq!(table.numeric(Column::SelfEmployed).unwrap()[1], None);
    }

    #[test]
    fn dates_follow_timestamps() {
        let table = fixtures::derived_table();
        assert_eq!(table.dates()[2], NaiveDate::from_ymd_opt(2014, 8, 28).unwrap());
        assert_eq!(table.dates().len(), table.len());
    }
}
