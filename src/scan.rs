use std::path::PathBuf;

use chrono::NaiveDate;

use crate::qc::ucsf::UcsfQc;
use crate::table::ScanKey;
use crate::tracer::Tracer;

/// One processed PET scan from the scan index.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRecord {
    pub subject_id: String,
    pub tracer: Tracer,
    pub pet_date: NaiveDate,
    pub pet_image_id: String,
    pub pet_scan_number: Option<u32>,
    pub n_pet_scans: Option<u32>,
    pub mri_date: Option<NaiveDate>,
    pub mri_image_id: Option<String>,
    pub pet_proc_dir: PathBuf,
}

impl ScanRecord {
    pub fn key(&self) -> ScanKey {
        ScanKey::new(self.subject_id.clone(), self.pet_date)
    }

    /// Key of the structural MRI the PET was processed against.
    pub fn mri_key(&self) -> Option<ScanKey> {
        self.mri_date
            .map(|date| ScanKey::new(self.subject_id.clone(), date))
    }
}

/// A scan plus the QC verdicts joined onto it so far.
///
/// A `None` pass flag means the gate has not annotated this row: either
/// it has not run, or it ran in drop mode and the row survived.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRow {
    pub scan: ScanRecord,
    pub umich_pass: Option<bool>,
    pub ucsf: Option<UcsfQc>,
    pub ucsf_pass: Option<bool>,
}

impl ScanRow {
    pub fn new(scan: ScanRecord) -> Self {
        Self {
            scan,
            umich_pass: None,
            ucsf: None,
            ucsf_pass: None,
        }
    }

    pub fn passes_qc(&self) -> bool {
        self.umich_pass.unwrap_or(true) && self.ucsf_pass.unwrap_or(true)
    }
}
