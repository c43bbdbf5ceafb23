use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::ReportError;
use crate::io::csv_input::{self, field};
use crate::qc::corrections::{CorrectionTable, DatedRecord};
use crate::qc::{QcMode, QcSource, QcStageReport, apply_gate};
use crate::scan::ScanRow;
use crate::table::{ScanKey, format_date, parse_date, parse_number};
use crate::tracer::Tracer;

pub const UMICH_PASS_RATING: f64 = 1.0;

pub fn umich_qc_file(tracer: Tracer) -> &'static str {
    match tracer {
        Tracer::Fbb => "leads_codebook_study_data_amyqc.csv",
        Tracer::Ftp => "leads_codebook_study_data_tauqc.csv",
        Tracer::Fdg => "leads_codebook_study_data_fdgqc.csv",
    }
}

pub fn umich_rating_column(tracer: Tracer) -> &'static str {
    match tracer {
        Tracer::Ftp => "scanqlty",
        Tracer::Fbb | Tracer::Fdg => "scanqltya",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UmichQcRecord {
    pub subject_id: String,
    pub scan_date: NaiveDate,
    pub rating: Option<f64>,
}

impl DatedRecord for UmichQcRecord {
    fn subject_id(&self) -> &str {
        &self.subject_id
    }

    fn date(&self) -> NaiveDate {
        self.scan_date
    }

    fn set_date(&mut self, date: NaiveDate) {
        self.scan_date = date;
    }
}

/// Reads a UMich QC codebook export. Rows whose date or rating cannot be
/// read are skipped and reported as warnings.
pub fn read_umich_qc(path: &Path, tracer: Tracer) -> Result<(Vec<UmichQcRecord>, Vec<String>)> {
    let table = csv_input::read_csv(path)?;
    let subj_idx = table.require("subject_label")?;
    let date_idx = table.require("scandate")?;
    let rating_idx = table.require(umich_rating_column(tracer))?;

    let mut records = Vec::with_capacity(table.records.len());
    let mut warnings = Vec::new();
    for (i, record) in table.records.iter().enumerate() {
        let subject_id = field(record, subj_idx).to_string();
        let parsed = parse_date(field(record, date_idx)).and_then(|date| {
            parse_number(field(record, rating_idx)).map(|rating| (date, rating))
        });
        match parsed {
            Ok((scan_date, rating)) => records.push(UmichQcRecord {
                subject_id,
                scan_date,
                rating,
            }),
            Err(err) => {
                let msg = format!("{}:{} skipped: {:#}", path.display(), i + 2, err);
                warn!("{}", msg);
                warnings.push(msg);
            }
        }
    }
    Ok((records, warnings))
}

/// Reduces QC rows to the set of passing scans.
///
/// Fails if any scan has more than one passing verdict. Known date
/// mismatches are corrected after that check.
pub fn passing_scans(
    tracer: Tracer,
    records: Vec<UmichQcRecord>,
    corrections: &CorrectionTable,
) -> Result<HashSet<ScanKey>> {
    let mut passed: Vec<UmichQcRecord> = records
        .into_iter()
        .filter(|r| r.rating == Some(UMICH_PASS_RATING))
        .collect();

    let mut counts: BTreeMap<ScanKey, usize> = BTreeMap::new();
    for r in &passed {
        *counts
            .entry(ScanKey::new(r.subject_id.clone(), r.scan_date))
            .or_default() += 1;
    }
    if let Some((key, count)) = counts.into_iter().find(|(_, n)| *n > 1) {
        return Err(ReportError::DuplicateQcRecord {
            source_name: QcSource::Umich.label(),
            subject_id: key.subject_id,
            date: format_date(key.date),
            count,
        }
        .into());
    }

    let changed = corrections.apply(QcSource::Umich, tracer, &mut passed);
    if changed > 0 {
        info!(tracer = %tracer, changed, "umich_dates_corrected");
    }

    Ok(passed
        .into_iter()
        .map(|r| ScanKey::new(r.subject_id, r.scan_date))
        .collect())
}

pub fn load_umich_passing(
    dir: &Path,
    tracer: Tracer,
    corrections: &CorrectionTable,
) -> Result<(HashSet<ScanKey>, Vec<String>)> {
    let path = dir.join(umich_qc_file(tracer));
    if !path.is_file() {
        return Err(ReportError::NotFound {
            pattern: path.display().to_string(),
        }
        .into());
    }
    let (records, warnings) = read_umich_qc(&path, tracer)?;
    let passing = passing_scans(tracer, records, corrections)
        .with_context(|| format!("UMich QC integrity check failed for {}", path.display()))?;
    Ok((passing, warnings))
}

/// Joins UMich verdicts onto scans. Scans without a passing row fail.
pub fn apply_umich_qc(
    tracer: Tracer,
    rows: Vec<ScanRow>,
    passing: &HashSet<ScanKey>,
    mode: QcMode,
) -> (Vec<ScanRow>, QcStageReport) {
    apply_gate(
        QcSource::Umich,
        tracer,
        rows,
        mode,
        |row| {
            let pass = passing.contains(&row.scan.key());
            row.umich_pass = Some(pass);
            pass
        },
        |row| row.umich_pass = None,
    )
}
