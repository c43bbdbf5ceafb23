use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::StringRecord;
use tracing::{info, warn};

use crate::error::ReportError;
use crate::io::csv_input::{self, field, opt_field};
use crate::io::discover;
use crate::table::{Value, parse_number};
use crate::tracer::Tracer;

pub const SCREENING_GLOB: &str = "*screening*.csv";

pub const COMPOSITE_SUVR: &str = "Screening_PETONLY_Composite_SUVR";
pub const AMYPOS_QUANTIFICATION: &str = "Screening_PETONLY_AmyPos_Quantification_1p18";
pub const VISUAL_READ: &str = "Screening_PETONLY_VisualRead";
pub const DISAGREEMENT: &str = "Screening_PETONLY_Disagreement";
pub const FINAL_READ: &str = "Screening_PETONLY_Final_Read";
pub const COHORT: &str = "CohortAssgn";

/// Per-subject screening visit results, joined by subject only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningRecord {
    pub subject_id: String,
    pub composite_suvr: Option<f64>,
    pub amypos_quantification: Option<f64>,
    pub visual_read: Option<f64>,
    pub disagreement: Option<f64>,
    pub final_read: Option<f64>,
    pub cohort: Option<String>,
}

impl ScreeningRecord {
    /// Amyloid reports carry the full screening read; the other tracers
    /// only carry the cohort assignment.
    pub fn columns(record: Option<&ScreeningRecord>, tracer: Tracer) -> Vec<(String, Value)> {
        let r = record.cloned().unwrap_or_default();
        if !tracer.has_summary_index() {
            return vec![(COHORT.to_string(), r.cohort.into())];
        }
        vec![
            (COMPOSITE_SUVR.to_string(), r.composite_suvr.into()),
            (AMYPOS_QUANTIFICATION.to_string(), r.amypos_quantification.into()),
            (VISUAL_READ.to_string(), r.visual_read.into()),
            (DISAGREEMENT.to_string(), r.disagreement.into()),
            (FINAL_READ.to_string(), r.final_read.into()),
            (COHORT.to_string(), r.cohort.into()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ScreeningTable {
    pub path: PathBuf,
    pub subjects: HashMap<String, ScreeningRecord>,
}

impl ScreeningTable {
    pub fn get(&self, subject_id: &str) -> Option<&ScreeningRecord> {
        self.subjects.get(subject_id)
    }
}

struct ScreeningColumns {
    subject: usize,
    composite_suvr: Option<usize>,
    amypos_quantification: Option<usize>,
    visual_read: Option<usize>,
    disagreement: Option<usize>,
    final_read: Option<usize>,
    cohort: Option<usize>,
}

/// Parses one numeric cell. An unreadable cell is reported and left empty so
/// the rest of the subject's row survives.
fn number_at(
    record: &StringRecord,
    idx: Option<usize>,
    column: &str,
    location: &str,
    warnings: &mut Vec<String>,
) -> Option<f64> {
    let raw = field(record, idx?);
    match parse_number(raw) {
        Ok(v) => v,
        Err(err) => {
            let msg = format!("{} column {}: {:#}; value treated as missing", location, column, err);
            warn!("{}", msg);
            warnings.push(msg);
            None
        }
    }
}

fn parse_row(
    record: &StringRecord,
    cols: &ScreeningColumns,
    location: &str,
    warnings: &mut Vec<String>,
) -> ScreeningRecord {
    ScreeningRecord {
        subject_id: field(record, cols.subject).to_string(),
        composite_suvr: number_at(record, cols.composite_suvr, COMPOSITE_SUVR, location, warnings),
        amypos_quantification: number_at(
            record,
            cols.amypos_quantification,
            AMYPOS_QUANTIFICATION,
            location,
            warnings,
        ),
        visual_read: number_at(record, cols.visual_read, VISUAL_READ, location, warnings),
        disagreement: number_at(record, cols.disagreement, DISAGREEMENT, location, warnings),
        final_read: number_at(record, cols.final_read, FINAL_READ, location, warnings),
        cohort: opt_field(record, cols.cohort).map(str::to_string),
    }
}

pub fn read_screening(path: &Path, warnings: &mut Vec<String>) -> Result<ScreeningTable> {
    let table = csv_input::read_csv(path)?;
    let cols = ScreeningColumns {
        subject: table.require_any(&["subject_id", "ID", "subj"])?,
        composite_suvr: table.optional(COMPOSITE_SUVR),
        amypos_quantification: table.optional(AMYPOS_QUANTIFICATION),
        visual_read: table.optional(VISUAL_READ),
        disagreement: table.optional(DISAGREEMENT),
        final_read: table.optional(FINAL_READ),
        cohort: table.optional(COHORT),
    };

    let mut subjects: HashMap<String, ScreeningRecord> = HashMap::with_capacity(table.records.len());
    for (i, record) in table.records.iter().enumerate() {
        let location = format!("{}:{}", path.display(), i + 2);
        let rec = parse_row(record, &cols, &location, warnings);
        if subjects.contains_key(&rec.subject_id) {
            let msg = format!(
                "{} repeats subject {}; keeping the first row",
                location, rec.subject_id
            );
            warn!("{}", msg);
            warnings.push(msg);
            continue;
        }
        subjects.insert(rec.subject_id.clone(), rec);
    }
    Ok(ScreeningTable {
        path: path.to_path_buf(),
        subjects,
    })
}

/// Loads the newest screening export. Without one, screening columns are
/// left empty and the run continues.
pub fn load_screening(dir: &Path, warnings: &mut Vec<String>) -> Result<Option<ScreeningTable>> {
    let path = match discover::latest_by_mtime(dir, SCREENING_GLOB) {
        Ok(path) => path,
        Err(err) if err.downcast_ref::<ReportError>().is_some() => {
            let msg = format!("{:#}; screening columns will be empty", err);
            warn!("{}", msg);
            warnings.push(msg);
            return Ok(None);
        }
        Err(err) => return Err(err),
    };
    info!(path = %path.display(), "screening_table_selected");
    let table = read_screening(&path, warnings)
        .with_context(|| format!("failed to read screening table {}", path.display()))?;
    info!(subjects = table.subjects.len(), "screening_loaded");
    Ok(Some(table))
}
