use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{info, warn};

use crate::io::csv_input::{self, CsvTable, field, opt_field};
use crate::io::discover;
use crate::qc::rules::{mri_qc_pass, pet_qc_rule, ucsf_qc_pass};
use crate::qc::{QcMode, QcSource, QcStageReport, apply_gate};
use crate::scan::ScanRow;
use crate::table::{ScanKey, Value, parse_date, parse_number};
use crate::tracer::Tracer;

pub const MRI_QC_GLOB: &str = "processed_MRI-T1_qc-evals_*.csv";

pub fn pet_qc_glob(tracer: Tracer) -> String {
    format!("processed_{}_qc-evals_*.csv", tracer.tag())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetQcRecord {
    pub subject_id: String,
    pub scan_date: Option<NaiveDate>,
    pub native_pet_ok: Option<f64>,
    pub pet_to_mri_coreg_ok: Option<f64>,
    pub wcbl_mask_ok: Option<f64>,
    pub infcblgm_mask_ok: Option<f64>,
    pub pons_mask_ok: Option<f64>,
    pub warped_pet_ok: Option<f64>,
    pub notes: Option<String>,
}

impl PetQcRecord {
    fn mask_ok(&self, tracer: Tracer) -> Option<f64> {
        match tracer {
            Tracer::Fbb => self.wcbl_mask_ok,
            Tracer::Ftp => self.infcblgm_mask_ok,
            Tracer::Fdg => self.pons_mask_ok,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MriQcRecord {
    pub subject_id: String,
    pub scan_date: Option<NaiveDate>,
    pub native_nu_rating: Option<f64>,
    pub aparc_rating: Option<f64>,
    pub warped_nu_ok: Option<f64>,
    pub notes: Option<String>,
}

/// UCSF checks joined onto one PET scan. A missing sheet row fails.
#[derive(Debug, Clone, PartialEq)]
pub struct UcsfQc {
    pub tracer: Tracer,
    pub pet: Option<PetQcRecord>,
    pub mri: Option<MriQcRecord>,
    pub pet_qc_pass: bool,
    pub mri_qc_pass: bool,
}

impl UcsfQc {
    pub fn judge(tracer: Tracer, pet: Option<&PetQcRecord>, mri: Option<&MriQcRecord>) -> Self {
        let rule = pet_qc_rule(tracer);
        Self {
            tracer,
            pet_qc_pass: pet.is_some_and(rule),
            mri_qc_pass: mri.is_some_and(mri_qc_pass),
            pet: pet.cloned(),
            mri: mri.cloned(),
        }
    }

    pub fn pass(&self) -> bool {
        ucsf_qc_pass(self.pet_qc_pass, self.mri_qc_pass)
    }

    /// Raw checks under their sheet names, for the audit columns.
    pub fn columns(&self) -> Vec<(String, Value)> {
        let pet = self.pet.clone().unwrap_or_default();
        let mri = self.mri.clone().unwrap_or_default();
        vec![
            ("pet_qc_pass".to_string(), Value::from(self.pet_qc_pass)),
            ("native_pet_ok".to_string(), pet.native_pet_ok.into()),
            ("pet_to_mri_coreg_ok".to_string(), pet.pet_to_mri_coreg_ok.into()),
            (
                format!("{}_mask_ok", self.tracer.ref_region()),
                pet.mask_ok(self.tracer).into(),
            ),
            ("warped_pet_ok".to_string(), pet.warped_pet_ok.into()),
            ("pet_qc_notes".to_string(), pet.notes.into()),
            ("mri_qc_pass".to_string(), Value::from(self.mri_qc_pass)),
            ("native_nu_rating".to_string(), mri.native_nu_rating.into()),
            ("aparc_rating".to_string(), mri.aparc_rating.into()),
            ("warped_nu_ok".to_string(), mri.warped_nu_ok.into()),
            ("mri_qc_notes".to_string(), mri.notes.into()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct UcsfSheets {
    pub paths: Vec<PathBuf>,
    pub mri: HashMap<ScanKey, MriQcRecord>,
    pub pet: BTreeMap<Tracer, HashMap<ScanKey, PetQcRecord>>,
}

/// Reads one QC check. An unreadable value is reported and treated as a
/// missing check, which fails the rule that needs it.
fn number(
    table: &CsvTable,
    record: &StringRecord,
    column: &str,
    location: &str,
    warnings: &mut Vec<String>,
) -> Option<f64> {
    let idx = table.optional(column)?;
    match parse_number(field(record, idx)) {
        Ok(v) => v,
        Err(err) => {
            let msg = format!("{} column {}: {:#}; check treated as missing", location, column, err);
            warn!("{}", msg);
            warnings.push(msg);
            None
        }
    }
}

/// Indexes sheet rows by (subject, scan date). Rows without a readable
/// date cannot be joined and are reported; repeated scans keep the first row.
fn index_rows<T, F>(
    table: &CsvTable,
    warnings: &mut Vec<String>,
    mut build: F,
) -> Result<HashMap<ScanKey, T>>
where
    F: FnMut(&StringRecord, String, NaiveDate, &str, &mut Vec<String>) -> T,
{
    let subj_idx = table.require("subj")?;
    let date_idx = table.require("scan_date")?;
    let mut out = HashMap::with_capacity(table.records.len());
    for (i, record) in table.records.iter().enumerate() {
        let line = i + 2;
        let subject_id = field(record, subj_idx).to_string();
        let date = match parse_date(field(record, date_idx)) {
            Ok(d) => d,
            Err(err) => {
                let msg = format!("{}:{} skipped: {:#}", table.path.display(), line, err);
                warn!("{}", msg);
                warnings.push(msg);
                continue;
            }
        };
        let key = ScanKey::new(subject_id.clone(), date);
        if out.contains_key(&key) {
            let msg = format!(
                "{}:{} repeats {}; keeping the first row",
                table.path.display(),
                line,
                key
            );
            warn!("{}", msg);
            warnings.push(msg);
            continue;
        }
        let location = format!("{}:{}", table.path.display(), line);
        let row = build(record, subject_id, date, &location, warnings);
        out.insert(key, row);
    }
    Ok(out)
}

pub fn read_mri_sheet(path: &Path, warnings: &mut Vec<String>) -> Result<HashMap<ScanKey, MriQcRecord>> {
    let table = csv_input::read_csv(path)?;
    let notes_idx = table.optional("notes");
    index_rows(&table, warnings, |record, subject_id, date, at, warnings| MriQcRecord {
        subject_id,
        scan_date: Some(date),
        native_nu_rating: number(&table, record, "native_nu_rating", at, warnings),
        aparc_rating: number(&table, record, "aparc_rating", at, warnings),
        warped_nu_ok: number(&table, record, "warped_nu_ok", at, warnings),
        notes: opt_field(record, notes_idx).map(str::to_string),
    })
}

pub fn read_pet_sheet(path: &Path, warnings: &mut Vec<String>) -> Result<HashMap<ScanKey, PetQcRecord>> {
    let table = csv_input::read_csv(path)?;
    let notes_idx = table.optional("notes");
    index_rows(&table, warnings, |record, subject_id, date, at, warnings| PetQcRecord {
        subject_id,
        scan_date: Some(date),
        native_pet_ok: number(&table, record, "native_pet_ok", at, warnings),
        pet_to_mri_coreg_ok: number(&table, record, "pet_to_mri_coreg_ok", at, warnings),
        wcbl_mask_ok: number(&table, record, "wcbl_mask_ok", at, warnings),
        infcblgm_mask_ok: number(&table, record, "infcblgm_mask_ok", at, warnings),
        pons_mask_ok: number(&table, record, "pons_mask_ok", at, warnings),
        warped_pet_ok: number(&table, record, "warped_pet_ok", at, warnings),
        notes: opt_field(record, notes_idx).map(str::to_string),
    })
}

/// Loads the newest MRI sheet and one PET sheet per tracer.
pub fn load_ucsf_sheets(dir: &Path) -> Result<(UcsfSheets, Vec<String>)> {
    let mut warnings = Vec::new();
    let mut sheets = UcsfSheets::default();

    let mri_path = discover::last_by_name(dir, MRI_QC_GLOB)?;
    info!(path = %mri_path.display(), "ucsf_mri_sheet_selected");
    sheets.mri = read_mri_sheet(&mri_path, &mut warnings)?;
    sheets.paths.push(mri_path);

    for tracer in Tracer::ALL {
        let path = discover::last_by_name(dir, &pet_qc_glob(tracer))?;
        info!(tracer = %tracer, path = %path.display(), "ucsf_pet_sheet_selected");
        let rows = read_pet_sheet(&path, &mut warnings)?;
        sheets.pet.insert(tracer, rows);
        sheets.paths.push(path);
    }
    Ok((sheets, warnings))
}

/// Joins the tracer's PET checks by scan date and the MRI checks by the
/// paired MRI date, then gates on both.
pub fn apply_ucsf_qc(
    tracer: Tracer,
    rows: Vec<ScanRow>,
    sheets: &UcsfSheets,
    mode: QcMode,
) -> (Vec<ScanRow>, QcStageReport) {
    let empty = HashMap::new();
    let pet_rows = sheets.pet.get(&tracer).unwrap_or(&empty);
    apply_gate(
        QcSource::Ucsf,
        tracer,
        rows,
        mode,
        |row| {
            let pet = pet_rows.get(&row.scan.key());
            let mri = row.scan.mri_key().and_then(|k| sheets.mri.get(&k));
            let qc = UcsfQc::judge(tracer, pet, mri);
            let pass = qc.pass();
            row.ucsf = Some(qc);
            row.ucsf_pass = Some(pass);
            pass
        },
        |row| row.ucsf_pass = None,
    )
}
