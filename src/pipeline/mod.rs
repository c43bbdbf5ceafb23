use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_registry;
pub mod stage2_umich_qc;
pub mod stage3_ucsf_qc;
pub mod stage4_measurements;
pub mod stage5_assemble;
pub mod stage6_format;
pub mod stage7_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Every stage of a quarterly report run, in dependency order.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_registry::Stage1Registry::new()),
            Box::new(stage2_umich_qc::Stage2UmichQc::new()),
            Box::new(stage3_ucsf_qc::Stage3UcsfQc::new()),
            Box::new(stage4_measurements::Stage4Measurements::new()),
            Box::new(stage5_assemble::Stage5Assemble::new()),
            Box::new(stage6_format::Stage6Format::new()),
            Box::new(stage7_output::Stage7Output::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(
            period = %ctx.period,
            stop_date = %ctx.period.stop_date(),
            "report_period_selected"
        );
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage_started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage_failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage_finished"
            );
        }
        Ok(())
    }
}
