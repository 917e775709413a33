use thiserror::Error;

/// Errors raised while reading a survey export or building the report.
///
/// Every variant is fatal to a run; there is no per-row recovery.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row at line {line} has {found} columns, at least {required} required")]
    MalformedRow {
        line: u64,
        found: usize,
        required: usize,
    },

    #[error("non-numeric score {value:?} in {subscale} samples")]
    InvalidNumber { subscale: String, value: String },

    #[error("unknown text encoding label: {0}")]
    UnknownEncoding(String),
}
