use chrono::NaiveDateTime;
use common::model::column::Column;

/// Immutable columnar view of the survey responses.
///
/// Every schema column is stored as text (`None` for an empty cell); the
/// Timestamp column is additionally kept parsed. All vectors have `len` entries.
#[derive(Debug, Clone)]
pub struct Table {
    len: usize,
    columns: Vec<Vec<Option<String>>>,
    timestamps: Vec<NaiveDateTime>,
}

impl Table {
    /// `columns` must be in `Column::ALL` order, one vector per column, each as
    /// long as `timestamps`.
    pub(crate) fn new(columns: Vec<Vec<Option<String>>>, timestamps: Vec<NaiveDateTime>) -> Self {
        debug_assert_eq!(columns.len(), Column::ALL.len());
        debug_assert!(columns.iter().all(|c| c.len() == timestamps.len()));
        Self {
            len: timestamps.len(),
            columns,
            timestamps,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn text(&self, column: Column) -> &[Option<String>] {
        &self.columns[column as usize]
    }

    pub fn value(&self, column: Column, row: usize) -> Option<&str> {
        self.columns[column as usize]
            .get(row)
            .and_then(|v| v.as_deref())
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Number of empty cells in `column`.
    pub fn missing(&self, column: Column) -> usize {
        self.text(column).iter().filter(|v| v.is_none()).count()
    }

    /// Sorted distinct non-missing values of `column`.
    pub fn distinct(&self, column: Column) -> Vec<String> {
        let mut values: Vec<String> = self
            .text(column)
            .iter()
            .flatten()
            .cloned()
            .collect();
        values.sort();
        values.dedup();
        values
    }
}
