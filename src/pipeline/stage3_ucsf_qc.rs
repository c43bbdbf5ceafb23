use anyhow::Result;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::qc::ucsf;
use crate::tracer::Tracer;

pub struct Stage3UcsfQc;

impl Stage3UcsfQc {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3UcsfQc {
    fn name(&self) -> &'static str {
        "stage3_ucsf_qc"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let (sheets, warnings) = ucsf::load_ucsf_sheets(&ctx.paths.ucsf_qc_dir)?;
        ctx.warnings.extend(warnings);

        for tracer in Tracer::ALL {
            let rows = ctx.take_class(tracer);
            let (rows, report) = ucsf::apply_ucsf_qc(tracer, rows, &sheets, ctx.qc_mode);
            ctx.classes.insert(tracer, rows);
            ctx.qc_reports.push(report);
        }
        Ok(())
    }
}
