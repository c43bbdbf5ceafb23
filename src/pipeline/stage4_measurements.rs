use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::measure::{self, screening};
use crate::pipeline::Stage;
use crate::tracer::Tracer;

pub struct Stage4Measurements;

impl Stage4Measurements {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Measurements {
    fn name(&self) -> &'static str {
        "stage4_measurements"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.screening = screening::load_screening(&ctx.paths.screening_dir, &mut ctx.warnings)?;

        for tracer in Tracer::ALL {
            let rows = ctx.classes.get(&tracer).map(Vec::as_slice).unwrap_or(&[]);
            let measures =
                measure::load_class_measures(tracer, rows, ctx.threads, &mut ctx.warnings)
                    .with_context(|| format!("loading {} measurements", tracer))?;
            ctx.measures.insert(tracer, measures);
        }
        Ok(())
    }
}
