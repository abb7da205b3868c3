//! Process-wide dataset state.
//!
//! `DatasetState` is built in `main.rs` before the HTTP server binds and is
//! shared with every worker as `web::Data` (an `Arc`). Nothing writes to it
//! after construction, so handlers read it concurrently without locking.

use crate::dataset::derived::DerivedTable;
use crate::dataset::loader;
use crate::error::DashboardError;
use log::info;
use std::path::Path;
use std::time::Instant;

pub struct DatasetState {
    /// Base table plus derived columns.
    pub table: DerivedTable,
    /// MD5 of the CSV file the table was loaded from.
    pub fingerprint: String,
}

impl DatasetState {
    pub fn new(table: DerivedTable, fingerprint: String) -> Self {
        Self { table, fingerprint }
    }

    /// Loads and derives the dataset at `path`. Blocking; call it off the async runtime.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let start = Instant::now();
        let loaded = loader::load(path)?;
        let table = DerivedTable::build(loaded.table);
        info!(
            "loaded {} records from {} (md5 {}) in {:.2?}",
            table.len(),
            path.display(),
            loaded.md5,
            start.elapsed()
        );
        Ok(Self::new(table, loaded.md5))
    }
}
