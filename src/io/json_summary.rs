use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::assemble::AssemblySummary;
use crate::ctx::Ctx;
use crate::io::report_writer::WrittenReport;
use crate::measure::MeasureCounts;
use crate::qc::{QcMode, QcStageReport};
use crate::registry::RegistrySummary;
use crate::tracer::Tracer;

/// Machine-readable audit of one run.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub tool_version: &'static str,
    pub period: String,
    pub stop_date: String,
    pub generated_on: String,
    pub qc_mode: QcMode,
    pub dry_run: bool,
    pub registry: Option<&'a RegistrySummary>,
    pub qc: &'a [QcStageReport],
    pub measurements: BTreeMap<Tracer, &'a [MeasureCounts]>,
    pub screening_subjects: Option<usize>,
    pub assembly: &'a [AssemblySummary],
    pub outputs: &'a [WrittenReport],
    pub warnings: &'a [String],
}

pub fn build_summary(ctx: &Ctx) -> RunSummary<'_> {
    RunSummary {
        tool_version: env!("CARGO_PKG_VERSION"),
        period: ctx.period.to_string(),
        stop_date: ctx.period.stop_date().to_string(),
        generated_on: ctx.generated_on.to_string(),
        qc_mode: ctx.qc_mode,
        dry_run: ctx.dry_run,
        registry: ctx.registry.as_ref(),
        qc: &ctx.qc_reports,
        measurements: ctx
            .measures
            .iter()
            .map(|(tracer, m)| (*tracer, m.counts.as_slice()))
            .collect(),
        screening_subjects: ctx.screening.as_ref().map(|s| s.subjects.len()),
        assembly: &ctx.assembly,
        outputs: &ctx.outputs,
        warnings: &ctx.warnings,
    }
}

pub fn write_summary_json(path: &Path, ctx: &Ctx) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let summary = build_summary(ctx);
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &summary)?;
    Ok(())
}
