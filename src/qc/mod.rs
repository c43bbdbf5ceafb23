use serde::Serialize;
use tracing::info;

use crate::scan::ScanRow;
use crate::table::ScanKey;
use crate::tracer::Tracer;

pub mod corrections;
pub mod rules;
pub mod ucsf;
pub mod umich;

/// Independent QC sources gating which scans are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QcSource {
    /// PET reconstruction QC maintained by the University of Michigan.
    Umich,
    /// MRI-based processing QC maintained by UCSF.
    Ucsf,
}

impl QcSource {
    pub fn label(self) -> &'static str {
        match self {
            QcSource::Umich => "UMich",
            QcSource::Ucsf => "UCSF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QcMode {
    /// Keep only passing scans and discard the pass flag.
    Drop,
    /// Keep every scan and record its pass flag.
    Annotate,
}

#[derive(Debug, Clone, Serialize)]
pub struct QcStageReport {
    pub source: QcSource,
    pub tracer: Tracer,
    pub passed: usize,
    pub total: usize,
    pub failed: Vec<ScanKey>,
    pub mode: QcMode,
}

/// Runs one gate over a tracer's scans.
///
/// `judge` records the verdict on the row and returns it; `clear` removes
/// the recorded flag from survivors in drop mode.
pub(crate) fn apply_gate<J, C>(
    source: QcSource,
    tracer: Tracer,
    rows: Vec<ScanRow>,
    mode: QcMode,
    mut judge: J,
    clear: C,
) -> (Vec<ScanRow>, QcStageReport)
where
    J: FnMut(&mut ScanRow) -> bool,
    C: Fn(&mut ScanRow),
{
    let total = rows.len();
    let mut kept = Vec::with_capacity(total);
    let mut failed = Vec::new();
    for mut row in rows {
        if judge(&mut row) {
            kept.push(row);
        } else {
            failed.push(row.scan.key());
            if mode == QcMode::Annotate {
                kept.push(row);
            }
        }
    }
    if mode == QcMode::Drop {
        for row in &mut kept {
            clear(row);
        }
    }

    let passed = total - failed.len();
    info!(
        source = source.label(),
        tracer = %tracer,
        passed,
        total,
        "qc_gate_applied"
    );
    if !failed.is_empty() {
        let action = match mode {
            QcMode::Drop => "removing",
            QcMode::Annotate => "flagging",
        };
        info!(
            source = source.label(),
            tracer = %tracer,
            failed = failed.len(),
            action,
            "qc_failures_found"
        );
        for key in &failed {
            info!(source = source.label(), tracer = %tracer, scan = %key, "qc_scan_failed");
        }
    }

    let report = QcStageReport {
        source,
        tracer,
        passed,
        total,
        failed,
        mode,
    };
    (kept, report)
}
