use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ReportError;
use crate::io::discover;
use crate::scan::ScanRecord;
use crate::table::parse_date;
use crate::tracer::Tracer;

pub const SCAN_INDEX_GLOB: &str = "raw_PET_index*.csv";

#[derive(Debug, Deserialize)]
struct RawScanRow {
    subj: String,
    tracer: String,
    pet_date: String,
    #[serde(default)]
    pet_image_id: Option<String>,
    #[serde(default)]
    pet_scan_number: Option<f64>,
    #[serde(default)]
    n_pet_scans: Option<f64>,
    #[serde(default)]
    mri_date: Option<String>,
    #[serde(default)]
    mri_image_id: Option<String>,
    #[serde(default)]
    pet_proc_dir: Option<String>,
    #[serde(default)]
    pet_processing_complete: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounts {
    pub scans: usize,
    pub subjects: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrySummary {
    pub path: PathBuf,
    pub total: ScanCounts,
    pub per_tracer: BTreeMap<Tracer, ScanCounts>,
}

/// Completed rows of one index file. `completed` counts every tracer in the
/// file, including ones no report is produced for.
#[derive(Debug, Clone)]
pub struct ScanIndexFile {
    pub scans: Vec<ScanRecord>,
    pub completed: ScanCounts,
}

#[derive(Debug, Clone)]
pub struct ScanIndex {
    pub summary: RegistrySummary,
    pub scans: BTreeMap<Tracer, Vec<ScanRecord>>,
}

fn is_complete(flag: Option<&str>) -> bool {
    match flag.map(str::trim) {
        Some(v) => matches!(v, "1" | "1.0" | "True" | "true"),
        None => false,
    }
}

fn count<'a>(scans: impl Iterator<Item = &'a ScanRecord>) -> ScanCounts {
    let mut n = 0usize;
    let mut subjects = HashSet::new();
    for scan in scans {
        n += 1;
        subjects.insert(scan.subject_id.as_str());
    }
    ScanCounts {
        scans: n,
        subjects: subjects.len(),
    }
}

/// Loads the newest scan index in `dir`, keeps completed scans and splits
/// them by tracer. Rows tagged with any other tracer count toward the
/// overall total but are not reported.
pub fn load_scan_index(dir: &Path) -> Result<ScanIndex> {
    let path = discover::latest_by_mtime(dir, SCAN_INDEX_GLOB)?;
    info!(path = %path.display(), "scan_index_selected");
    let ScanIndexFile {
        scans,
        completed: total,
    } = read_scan_index(&path)?;

    let mut by_tracer: BTreeMap<Tracer, Vec<ScanRecord>> =
        Tracer::ALL.iter().map(|t| (*t, Vec::new())).collect();
    for scan in scans {
        by_tracer.entry(scan.tracer).or_default().push(scan);
    }

    let mut per_tracer = BTreeMap::new();
    for (tracer, scans) in &by_tracer {
        ensure_unique(*tracer, scans)?;
        let counts = count(scans.iter());
        info!(
            tracer = %tracer,
            scans = counts.scans,
            subjects = counts.subjects,
            "tracer_scans_counted"
        );
        per_tracer.insert(*tracer, counts);
    }
    info!(
        scans = total.scans,
        subjects = total.subjects,
        "scans_counted"
    );

    Ok(ScanIndex {
        summary: RegistrySummary {
            path,
            total,
            per_tracer,
        },
        scans: by_tracer,
    })
}

/// Parses one scan index file into completed scans of known tracers.
pub fn read_scan_index(path: &Path) -> Result<ScanIndexFile> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open scan index {}", path.display()))?;
    let mut scans = Vec::new();
    let mut completed = 0usize;
    let mut subjects = HashSet::new();
    for (idx, row) in reader.deserialize::<RawScanRow>().enumerate() {
        let line = idx + 2;
        let row = row.with_context(|| format!("{}:{} malformed row", path.display(), line))?;
        if !is_complete(row.pet_processing_complete.as_deref()) {
            continue;
        }
        completed += 1;
        subjects.insert(row.subj.clone());
        let Ok(tracer) = row.tracer.parse::<Tracer>() else {
            debug!(tracer = %row.tracer, line, "unreported_tracer_skipped");
            continue;
        };
        let pet_date = parse_date(&row.pet_date)
            .with_context(|| format!("{}:{} bad pet_date", path.display(), line))?;
        let mri_date = match row.mri_date.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(
                parse_date(raw)
                    .with_context(|| format!("{}:{} bad mri_date", path.display(), line))?,
            ),
            None => None,
        };
        scans.push(ScanRecord {
            subject_id: row.subj,
            tracer,
            pet_date,
            pet_image_id: row.pet_image_id.unwrap_or_default(),
            pet_scan_number: row.pet_scan_number.map(|v| v as u32),
            n_pet_scans: row.n_pet_scans.map(|v| v as u32),
            mri_date,
            mri_image_id: row.mri_image_id,
            pet_proc_dir: PathBuf::from(row.pet_proc_dir.unwrap_or_default()),
        });
    }
    Ok(ScanIndexFile {
        scans,
        completed: ScanCounts {
            scans: completed,
            subjects: subjects.len(),
        },
    })
}

fn ensure_unique(tracer: Tracer, scans: &[ScanRecord]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for scan in scans {
        if !seen.insert(scan.key()) {
            return Err(ReportError::DuplicateScan {
                subject_id: scan.subject_id.clone(),
                tracer: tracer.tag().to_string(),
                date: crate::table::format_date(scan.pet_date),
            }
            .into());
        }
    }
    Ok(())
}
