use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a run before any output is written.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no file matching {pattern} found")]
    NotFound { pattern: String },

    #[error("invalid report period '{0}' (expected YYYY-Qn with n in 1..4)")]
    InvalidPeriod(String),

    #[error("{source_name} QC has {count} rows for {subject_id} on {date}")]
    DuplicateQcRecord {
        source_name: &'static str,
        subject_id: String,
        date: String,
        count: usize,
    },

    #[error("scan index lists {subject_id} {tracer} on {date} more than once")]
    DuplicateScan {
        subject_id: String,
        tracer: String,
        date: String,
    },

    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },
}
