use clap::Parser;
use std::path::PathBuf;

use crate::period::ReportPeriod;

#[derive(Debug, Parser)]
#[command(
    name = "pet-qreport",
    version,
    about = "Assemble quarterly PET ROI report files"
)]
pub struct Cli {
    #[arg(help = "Reporting period, e.g. 2024-Q2")]
    pub report_period: ReportPeriod,

    #[arg(short = 'p', long, help = "Project root containing metadata/ and data/")]
    pub proj_dir: PathBuf,

    #[arg(long, default_value_t = false, help = "Replace report files that already exist")]
    pub overwrite: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Keep scans that fail QC in the intermediate tables and flag them"
    )]
    pub keep_failed: bool,

    #[arg(long, default_value_t = 0, help = "Number of threads (0 = auto)")]
    pub threads: usize,

    #[arg(long, help = "Write a JSON run summary to this path")]
    pub summary_json: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Run every stage but write no report files")]
    pub dry_run: bool,
}
