use std::path::PathBuf;
use thiserror::Error;

/// Failures that keep the dashboard from becoming ready to serve.
///
/// Everything past startup is a pure computation over the loaded table, so this
/// is the only error type that can stop the process.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("row {row}: unparsable timestamp '{value}'")]
    Timestamp { row: usize, value: String },
}
