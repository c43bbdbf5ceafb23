use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::error::ReportError;

/// A fully read CSV file with header lookup.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub records: Vec<StringRecord>,
}

pub fn read_csv(path: &Path) -> Result<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut records = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("{}: malformed record {}", path.display(), idx + 1))?;
        records.push(record);
    }
    Ok(CsvTable {
        path: path.to_path_buf(),
        headers,
        records,
    })
}

impl CsvTable {
    pub fn optional(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn require(&self, column: &str) -> Result<usize> {
        self.optional(column).ok_or_else(|| {
            ReportError::MissingColumn {
                path: self.path.clone(),
                column: column.to_string(),
            }
            .into()
        })
    }

    /// First of several accepted spellings of one column.
    pub fn require_any(&self, columns: &[&str]) -> Result<usize> {
        columns
            .iter()
            .find_map(|c| self.optional(c))
            .ok_or_else(|| {
                ReportError::MissingColumn {
                    path: self.path.clone(),
                    column: columns.join("|"),
                }
                .into()
            })
    }
}

pub fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

pub fn opt_field(record: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.map(|i| field(record, i)).filter(|s| !s.is_empty())
}
