use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
#[cfg(feature = "mt")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::scan::{ScanRecord, ScanRow};
use crate::table::ScanKey;
use crate::tracer::Tracer;

pub mod files;
pub mod reshape;
pub mod screening;

pub use files::MeasureKind;
use reshape::WideRow;

/// Wide measurement rows of one kind for one tracer, keyed by scan.
#[derive(Debug, Clone)]
pub struct MeasureTable {
    pub kind: MeasureKind,
    pub rows: BTreeMap<ScanKey, WideRow>,
    pub missing: Vec<ScanKey>,
    pub failed: Vec<ScanKey>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasureCounts {
    pub kind: &'static str,
    pub requested: usize,
    pub loaded: usize,
    pub missing: usize,
    pub failed: usize,
}

impl MeasureTable {
    pub fn get(&self, key: &ScanKey) -> Option<&WideRow> {
        self.rows.get(key)
    }

    pub fn counts(&self, requested: usize) -> MeasureCounts {
        MeasureCounts {
            kind: self.kind.label(),
            requested,
            loaded: self.rows.len(),
            missing: self.missing.len(),
            failed: self.failed.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassMeasures {
    pub ref_region: MeasureTable,
    pub roi: MeasureTable,
    pub summary_index: Option<MeasureTable>,
    pub counts: Vec<MeasureCounts>,
}

#[derive(Debug)]
enum Fetch {
    Missing(PathBuf),
    Failed(PathBuf, anyhow::Error),
    Loaded(Vec<WideRow>),
}

fn fetch_one(kind: MeasureKind, scan: &ScanRecord) -> Fetch {
    let path = kind.file_path(scan);
    if !path.is_file() {
        return Fetch::Missing(path);
    }
    let loaded = kind
        .parse(&path)
        .and_then(|(reshape, records)| reshape.pivot_wider(&records));
    match loaded {
        Ok(rows) => Fetch::Loaded(rows),
        Err(err) => Fetch::Failed(path, err),
    }
}

#[cfg(feature = "mt")]
fn fetch_all(kind: MeasureKind, scans: &[&ScanRecord], threads: usize) -> Result<Vec<(ScanKey, Fetch)>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if threads > 0 {
        builder = builder.num_threads(threads);
    }
    let pool = builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
    Ok(pool.install(|| {
        scans
            .par_iter()
            .map(|scan| (scan.key(), fetch_one(kind, scan)))
            .collect()
    }))
}

#[cfg(not(feature = "mt"))]
fn fetch_all(kind: MeasureKind, scans: &[&ScanRecord], _threads: usize) -> Result<Vec<(ScanKey, Fetch)>> {
    Ok(scans
        .iter()
        .map(|scan| (scan.key(), fetch_one(kind, scan)))
        .collect())
}

/// Loads one measurement kind for each scan.
///
/// A missing or unreadable file is reported in `warnings` and leaves the
/// scan without a row; it never fails the batch.
pub fn load_measurements(
    kind: MeasureKind,
    scans: &[&ScanRecord],
    threads: usize,
    warnings: &mut Vec<String>,
) -> Result<MeasureTable> {
    let mut fetched = fetch_all(kind, scans, threads)?;
    fetched.sort_by(|a, b| a.0.cmp(&b.0));

    let mut table = MeasureTable {
        kind,
        rows: BTreeMap::new(),
        missing: Vec::new(),
        failed: Vec::new(),
    };
    for (key, fetch) in fetched {
        match fetch {
            Fetch::Missing(path) => {
                let msg = format!("File not found: {}", path.display());
                warn!(kind = kind.label(), scan = %key, "{}", msg);
                warnings.push(msg);
                table.missing.push(key);
            }
            Fetch::Failed(path, err) => {
                let msg = format!("Failed to load {}: {:#}", path.display(), err);
                warn!(kind = kind.label(), scan = %key, "{}", msg);
                warnings.push(msg);
                table.failed.push(key);
            }
            Fetch::Loaded(rows) => {
                for row in rows {
                    if table.rows.contains_key(&row.key) {
                        let msg = format!(
                            "{} rows for {} found in more than one file; keeping the first",
                            kind.label(),
                            row.key
                        );
                        warn!("{}", msg);
                        warnings.push(msg);
                        continue;
                    }
                    table.rows.insert(row.key.clone(), row);
                }
            }
        }
    }
    Ok(table)
}

/// Loads every measurement kind a tracer reports. The summary index is
/// only read for scans that passed every QC gate.
pub fn load_class_measures(
    tracer: Tracer,
    rows: &[ScanRow],
    threads: usize,
    warnings: &mut Vec<String>,
) -> Result<ClassMeasures> {
    let scans: Vec<&ScanRecord> = rows.iter().map(|r| &r.scan).collect();
    let ref_region = load_measurements(MeasureKind::RefRegion, &scans, threads, warnings)?;
    let roi = load_measurements(MeasureKind::Roi, &scans, threads, warnings)?;
    let mut counts = vec![ref_region.counts(scans.len()), roi.counts(scans.len())];

    let summary_index = if tracer.has_summary_index() {
        let passing: Vec<&ScanRecord> = rows
            .iter()
            .filter(|r| r.passes_qc())
            .map(|r| &r.scan)
            .collect();
        let table = load_measurements(MeasureKind::SummaryIndex, &passing, threads, warnings)?;
        counts.push(table.counts(passing.len()));
        Some(table)
    } else {
        None
    };

    for c in &counts {
        info!(
            tracer = %tracer,
            kind = c.kind,
            loaded = c.loaded,
            requested = c.requested,
            missing = c.missing,
            failed = c.failed,
            "measurements_loaded"
        );
    }

    Ok(ClassMeasures {
        ref_region,
        roi,
        summary_index,
        counts,
    })
}
