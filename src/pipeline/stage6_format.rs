use anyhow::Result;
use tracing::{info, warn};

use crate::assemble;
use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::schema::format::format_export;

pub struct Stage6Format;

impl Stage6Format {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Format {
    fn name(&self) -> &'static str {
        "stage6_format"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for (tracer, records) in &ctx.assembled {
            let export = format_export(*tracer, assemble::to_table(records))?;
            if !export.rows.is_empty() && !export.missing.is_empty() {
                let msg = format!(
                    "{} export has no data for {} columns: {}",
                    tracer,
                    export.missing.len(),
                    export.missing.join(", ")
                );
                warn!("{}", msg);
                ctx.warnings.push(msg);
            }
            let (rows, columns) = export.shape();
            info!(tracer = %tracer, rows, columns, "export_formatted");
            ctx.exports.insert(*tracer, export);
        }
        Ok(())
    }
}
