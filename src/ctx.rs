use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;

use crate::assemble::{AssembledRecord, AssemblySummary};
use crate::io::report_writer::WrittenReport;
use crate::measure::ClassMeasures;
use crate::measure::screening::ScreeningTable;
use crate::period::ReportPeriod;
use crate::qc::corrections::CorrectionTable;
use crate::qc::{QcMode, QcStageReport};
use crate::registry::RegistrySummary;
use crate::scan::ScanRow;
use crate::schema::format::ExportTable;
use crate::tracer::Tracer;

/// Where each input lives below a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub scan_index_dir: PathBuf,
    pub umich_qc_dir: PathBuf,
    pub ucsf_qc_dir: PathBuf,
    pub screening_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl ProjectPaths {
    pub fn from_root(root: &Path) -> Self {
        let metadata = root.join("metadata");
        Self {
            root: root.to_path_buf(),
            scan_index_dir: metadata.join("scans_to_process"),
            umich_qc_dir: metadata.join("atri"),
            ucsf_qc_dir: metadata.join("qc"),
            screening_dir: metadata.join("loni"),
            out_dir: root
                .join("data")
                .join("extraction")
                .join("quarterly_report_files"),
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub period: ReportPeriod,
    pub generated_on: NaiveDate,
    pub paths: ProjectPaths,
    pub overwrite: bool,
    pub dry_run: bool,
    pub qc_mode: QcMode,
    pub threads: usize,
    pub summary_json: Option<PathBuf>,
    pub corrections: CorrectionTable,
    pub registry: Option<RegistrySummary>,
    pub classes: BTreeMap<Tracer, Vec<ScanRow>>,
    pub qc_reports: Vec<QcStageReport>,
    pub screening: Option<ScreeningTable>,
    pub measures: BTreeMap<Tracer, ClassMeasures>,
    pub assembled: BTreeMap<Tracer, Vec<AssembledRecord>>,
    pub assembly: Vec<AssemblySummary>,
    pub exports: BTreeMap<Tracer, ExportTable>,
    pub outputs: Vec<WrittenReport>,
    pub warnings: Vec<String>,
}

impl Ctx {
    pub fn new(period: ReportPeriod, proj_dir: &Path, generated_on: NaiveDate) -> Result<Self> {
        Ok(Self {
            period,
            generated_on,
            paths: ProjectPaths::from_root(proj_dir),
            overwrite: false,
            dry_run: false,
            qc_mode: QcMode::Drop,
            threads: 0,
            summary_json: None,
            corrections: CorrectionTable::known()?,
            registry: None,
            classes: BTreeMap::new(),
            qc_reports: Vec::new(),
            screening: None,
            measures: BTreeMap::new(),
            assembled: BTreeMap::new(),
            assembly: Vec::new(),
            exports: BTreeMap::new(),
            outputs: Vec::new(),
            warnings: Vec::new(),
        })
    }

    /// Takes a class's rows out of the context, leaving it empty.
    pub fn take_class(&mut self, tracer: Tracer) -> Vec<ScanRow> {
        self.classes.remove(&tracer).unwrap_or_default()
    }
}
