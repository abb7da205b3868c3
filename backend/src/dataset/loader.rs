//! Reads the survey CSV into a [`Table`].
//!
//! The load is all-or-nothing: a missing file, a missing header or a single
//! unparsable timestamp fails the whole load, and the server never starts.

use crate::dataset::table::Table;
use crate::error::DashboardError;
use chrono::{NaiveDate, NaiveDateTime};
use common::model::column::{Column, ColumnKind};
use log::debug;
use std::io::Read;
use std::path::Path;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// A parsed dataset together with the MD5 of the bytes it came from.
pub struct LoadedTable {
    pub table: Table,
    pub md5: String,
}

pub fn load(path: &Path) -> Result<LoadedTable, DashboardError> {
    let bytes = std::fs::read(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let md5 = format!("{:x}", md5::compute(&bytes));
    let table = parse(bytes.as_slice())?;
    Ok(LoadedTable { table, md5 })
}

pub fn parse<R: Read>(reader: R) -> Result<Table, DashboardError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut positions = Vec::with_capacity(Column::ALL.len());
    for column in Column::ALL {
        let idx = headers
            .iter()
            .position(|h| h == column.header())
            .ok_or(DashboardError::MissingColumn(column.header()))?;
        positions.push(idx);
    }
    debug!("dataset header: {} columns", headers.len());

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); Column::ALL.len()];
    let mut timestamps = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // +2: one for the header line, one for 1-based numbering.
        let row = i + 2;

        for (column, &idx) in Column::ALL.iter().zip(positions.iter()) {
            let cell = record.get(idx).filter(|v| !v.is_empty());

            if column.kind() == ColumnKind::Timestamp {
                let raw = cell.unwrap_or_default();
                let ts = parse_timestamp(raw).ok_or_else(|| DashboardError::Timestamp {
                    row,
                    value: raw.to_string(),
                })?;
                timestamps.push(ts);
            }

            columns[*column as usize].push(cell.map(str::to_string));
        }
    }

    Ok(Table::new(columns, timestamps))
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
