use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::period::ReportPeriod;
use crate::schema::format::ExportTable;
use crate::table::format_date;
use crate::tracer::Tracer;

pub fn report_file_name(tracer: Tracer, period: ReportPeriod, generated_on: NaiveDate) -> String {
    format!(
        "LEADS-PETCore-quarterly-report_{}_{}-ROI-means_{}.csv",
        period,
        tracer.tag(),
        format_date(generated_on)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Written,
    /// The file already existed and overwriting was not requested.
    Skipped,
    DryRun,
}

#[derive(Debug, Clone, Serialize)]
pub struct WrittenReport {
    pub tracer: Tracer,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub outcome: WriteOutcome,
}

/// Writes `table` to `path` unless the file exists and `overwrite` is off.
/// An existing file is left untouched and reported as skipped.
pub fn write_report(path: &Path, table: &ExportTable, overwrite: bool) -> Result<WriteOutcome> {
    if path.exists() && !overwrite {
        info!(path = %path.display(), "report_exists_skipped");
        return Ok(WriteOutcome::Skipped);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    let (rows, columns) = table.shape();
    info!(path = %path.display(), rows, columns, "report_written");
    Ok(WriteOutcome::Written)
}
