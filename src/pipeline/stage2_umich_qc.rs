use anyhow::Result;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::qc::umich;
use crate::tracer::Tracer;

pub struct Stage2UmichQc;

impl Stage2UmichQc {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2UmichQc {
    fn name(&self) -> &'static str {
        "stage2_umich_qc"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for tracer in Tracer::ALL {
            let (passing, warnings) =
                umich::load_umich_passing(&ctx.paths.umich_qc_dir, tracer, &ctx.corrections)?;
            ctx.warnings.extend(warnings);

            let rows = ctx.take_class(tracer);
            let (rows, report) = umich::apply_umich_qc(tracer, rows, &passing, ctx.qc_mode);
            ctx.classes.insert(tracer, rows);
            ctx.qc_reports.push(report);
        }
        Ok(())
    }
}
