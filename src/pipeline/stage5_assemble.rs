use anyhow::{Context, Result};

use crate::assemble;
use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::tracer::Tracer;

pub struct Stage5Assemble;

impl Stage5Assemble {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Assemble {
    fn name(&self) -> &'static str {
        "stage5_assemble"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let stop_date = ctx.period.stop_date();
        for tracer in Tracer::ALL {
            let rows = ctx.classes.get(&tracer).map(Vec::as_slice).unwrap_or(&[]);
            let measures = ctx
                .measures
                .get(&tracer)
                .with_context(|| format!("{} measurements missing", tracer))?;
            let (records, summary) = assemble::assemble_class(
                tracer,
                rows,
                measures,
                ctx.screening.as_ref(),
                stop_date,
            );
            ctx.assembled.insert(tracer, records);
            ctx.assembly.push(summary);
        }
        Ok(())
    }
}
