use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::measure::ClassMeasures;
use crate::measure::reshape::WideRow;
use crate::measure::screening::{ScreeningRecord, ScreeningTable};
use crate::scan::ScanRow;
use crate::table::{ScanKey, Table, Value, format_date};
use crate::tracer::Tracer;

/// A scan with every measurement source joined onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRecord {
    pub row: ScanRow,
    pub ref_region: Option<WideRow>,
    pub screening: Option<ScreeningRecord>,
    pub summary_index: Option<WideRow>,
    pub roi: Option<WideRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssemblySummary {
    pub tracer: Tracer,
    pub joined: usize,
    pub qc_passed: usize,
    pub retained: usize,
    pub subjects: usize,
    pub stop_date: String,
}

fn wide_columns(row: Option<&WideRow>) -> impl Iterator<Item = (String, Value)> + '_ {
    row.into_iter()
        .flat_map(|r| r.columns.iter())
        .map(|(name, v)| (name.clone(), Value::from(*v)))
}

impl AssembledRecord {
    pub fn key(&self) -> ScanKey {
        self.row.scan.key()
    }

    /// The record under its internal column names, in join order.
    pub fn internal_columns(&self) -> Vec<(String, Value)> {
        let scan = &self.row.scan;
        let mut out: Vec<(String, Value)> = vec![
            ("subject_id".into(), Value::Text(scan.subject_id.clone())),
            ("tracer".into(), Value::Text(scan.tracer.tag().to_string())),
            ("pet_date".into(), Value::Text(format_date(scan.pet_date))),
            ("pet_image_id".into(), Value::Text(scan.pet_image_id.clone())),
            (
                "pet_scan_number".into(),
                scan.pet_scan_number.map(f64::from).into(),
            ),
            ("n_pet_scans".into(), scan.n_pet_scans.map(f64::from).into()),
            ("mri_date".into(), scan.mri_date.map(format_date).into()),
            ("mri_image_id".into(), scan.mri_image_id.clone().into()),
            (
                "pet_proc_dir".into(),
                Value::Text(scan.pet_proc_dir.display().to_string()),
            ),
        ];
        if let Some(pass) = self.row.umich_pass {
            out.push(("passed_umich_qc".into(), pass.into()));
        }
        if let Some(qc) = &self.row.ucsf {
            out.extend(qc.columns());
        }
        if let Some(pass) = self.row.ucsf_pass {
            out.push(("ucsf_qc_pass".into(), pass.into()));
        }
        out.extend(wide_columns(self.ref_region.as_ref()));
        out.extend(ScreeningRecord::columns(self.screening.as_ref(), scan.tracer));
        out.extend(wide_columns(self.summary_index.as_ref()));
        out.extend(wide_columns(self.roi.as_ref()));
        out
    }
}

/// Joins measurements onto a tracer's scans, keeps scans that passed QC
/// and were acquired on or before `stop_date`, sorted by subject and date.
pub fn assemble_class(
    tracer: Tracer,
    rows: &[ScanRow],
    measures: &ClassMeasures,
    screening: Option<&ScreeningTable>,
    stop_date: NaiveDate,
) -> (Vec<AssembledRecord>, AssemblySummary) {
    let joined: Vec<AssembledRecord> = rows
        .iter()
        .map(|row| {
            let key = row.scan.key();
            AssembledRecord {
                row: row.clone(),
                ref_region: measures.ref_region.get(&key).cloned(),
                screening: screening.and_then(|s| s.get(&row.scan.subject_id)).cloned(),
                summary_index: measures
                    .summary_index
                    .as_ref()
                    .and_then(|t| t.get(&key))
                    .cloned(),
                roi: measures.roi.get(&key).cloned(),
            }
        })
        .collect();
    let n_joined = joined.len();

    let passed: Vec<AssembledRecord> = joined.into_iter().filter(|r| r.row.passes_qc()).collect();
    let n_passed = passed.len();

    let mut retained: Vec<AssembledRecord> = passed
        .into_iter()
        .filter(|r| r.row.scan.pet_date <= stop_date)
        .collect();
    retained.sort_by(|a, b| a.key().cmp(&b.key()));

    let subjects = retained
        .iter()
        .map(|r| r.row.scan.subject_id.as_str())
        .collect::<HashSet<_>>()
        .len();
    info!(
        tracer = %tracer,
        scans = retained.len(),
        subjects,
        stop_date = %format_date(stop_date),
        "scans_retained"
    );

    let summary = AssemblySummary {
        tracer,
        joined: n_joined,
        qc_passed: n_passed,
        retained: retained.len(),
        subjects,
        stop_date: format_date(stop_date),
    };
    (retained, summary)
}

pub fn to_table(records: &[AssembledRecord]) -> Table {
    Table::from_records(records.iter().map(AssembledRecord::internal_columns))
}
