use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pet_qreport::cli::Cli;
use pet_qreport::ctx::Ctx;
use pet_qreport::io;
use pet_qreport::pipeline::Pipeline;
use pet_qreport::qc::QcMode;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let today = chrono::Local::now().date_naive();
    let mut ctx = Ctx::new(cli.report_period, &cli.proj_dir, today)?;
    ctx.overwrite = cli.overwrite;
    ctx.dry_run = cli.dry_run;
    ctx.threads = cli.threads;
    ctx.summary_json = cli.summary_json;
    ctx.qc_mode = if cli.keep_failed {
        QcMode::Annotate
    } else {
        QcMode::Drop
    };

    Pipeline::standard().run(&mut ctx)?;

    print_summary(&ctx)?;
    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}
