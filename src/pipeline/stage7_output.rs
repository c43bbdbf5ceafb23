use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::json_summary;
use crate::io::report_writer::{self, WriteOutcome, WrittenReport};
use crate::pipeline::Stage;

pub struct Stage7Output;

impl Stage7Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Output {
    fn name(&self) -> &'static str {
        "stage7_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for (tracer, export) in &ctx.exports {
            let name = report_writer::report_file_name(*tracer, ctx.period, ctx.generated_on);
            let path = ctx.paths.out_dir.join(name);
            let outcome = if ctx.dry_run {
                info!(path = %path.display(), "dry_run_report_not_written");
                WriteOutcome::DryRun
            } else {
                report_writer::write_report(&path, export, ctx.overwrite)?
            };
            let (rows, columns) = export.shape();
            ctx.outputs.push(WrittenReport {
                tracer: *tracer,
                path,
                rows,
                columns,
                outcome,
            });
        }

        if let Some(path) = &ctx.summary_json {
            json_summary::write_summary_json(path, ctx)?;
            info!(path = %path.display(), "summary_json_written");
        }
        info!("stage7_output_ready");
        Ok(())
    }
}
