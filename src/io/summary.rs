use std::fmt::Write;

use anyhow::Result;

use crate::ctx::Ctx;
use crate::io::report_writer::WriteOutcome;

/// Plain-text audit of a finished run, printed after the pipeline.
pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let mut out = String::new();
    writeln!(out, "pet-qreport v{}", version)?;
    writeln!(
        out,
        "Period: {} (scans through {})",
        ctx.period,
        ctx.period.stop_date()
    )?;

    if let Some(registry) = &ctx.registry {
        writeln!(
            out,
            "Registry: {} scans, {} subjects ({})",
            registry.total.scans,
            registry.total.subjects,
            registry.path.display()
        )?;
        for (tracer, counts) in &registry.per_tracer {
            writeln!(
                out,
                "  {}: {} scans, {} subjects",
                tracer, counts.scans, counts.subjects
            )?;
        }
    }

    if !ctx.qc_reports.is_empty() {
        writeln!(out, "QC:")?;
        for report in &ctx.qc_reports {
            writeln!(
                out,
                "  {} {}: {}/{} passed",
                report.source.label(),
                report.tracer,
                report.passed,
                report.total
            )?;
            for key in &report.failed {
                writeln!(out, "    failed: {}", key)?;
            }
        }
    }

    if !ctx.assembly.is_empty() {
        writeln!(out, "Final:")?;
        for a in &ctx.assembly {
            writeln!(
                out,
                "  {}: {} scans, {} subjects",
                a.tracer, a.retained, a.subjects
            )?;
        }
    }

    if !ctx.outputs.is_empty() {
        writeln!(out, "Outputs:")?;
        for o in &ctx.outputs {
            let action = match o.outcome {
                WriteOutcome::Written => "written",
                WriteOutcome::Skipped => "exists, skipped",
                WriteOutcome::DryRun => "dry run, not written",
            };
            writeln!(
                out,
                "  {} ({} rows x {} columns, {})",
                o.path.display(),
                o.rows,
                o.columns,
                action
            )?;
        }
    }

    Ok(out)
}
