use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::registry;
use crate::scan::ScanRow;

pub struct Stage1Registry;

impl Stage1Registry {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Registry {
    fn name(&self) -> &'static str {
        "stage1_registry"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let index = registry::load_scan_index(&ctx.paths.scan_index_dir)?;
        for (tracer, scans) in index.scans {
            ctx.classes
                .insert(tracer, scans.into_iter().map(ScanRow::new).collect());
        }
        info!(
            scans = index.summary.total.scans,
            subjects = index.summary.total.subjects,
            "stage1_registry_ready"
        );
        ctx.registry = Some(index.summary);
        Ok(())
    }
}
