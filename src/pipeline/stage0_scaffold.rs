use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.paths.root.is_dir() {
            anyhow::bail!(
                "project directory {} does not exist",
                ctx.paths.root.display()
            );
        }
        if ctx.dry_run {
            info!(out_dir = %ctx.paths.out_dir.display(), "dry_run_output_dir");
            return Ok(());
        }
        fs::create_dir_all(&ctx.paths.out_dir)
            .with_context(|| format!("failed to create {}", ctx.paths.out_dir.display()))?;
        info!(
            out_dir = %ctx.paths.out_dir.display(),
            "output_dir_ready"
        );
        Ok(())
    }
}
