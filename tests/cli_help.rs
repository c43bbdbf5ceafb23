use assert_cmd::Command;
use clap::Parser;
use pet_qreport::cli::Cli;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("pet-qreport").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn parses_period_and_defaults() {
    let cli = Cli::parse_from(["pet-qreport", "2024-Q2", "--proj-dir", "/data/leads"]);
    assert_eq!(cli.report_period.year, 2024);
    assert_eq!(cli.report_period.quarter, 2);
    assert!(!cli.overwrite);
    assert!(!cli.keep_failed);
    assert!(!cli.dry_run);
    assert_eq!(cli.threads, 0);
    assert!(cli.summary_json.is_none());
}

#[test]
fn rejects_malformed_period() {
    let res = Cli::try_parse_from(["pet-qreport", "2024Q2", "--proj-dir", "/data/leads"]);
    assert!(res.is_err());
}

#[test]
fn proj_dir_is_required() {
    let res = Cli::try_parse_from(["pet-qreport", "2024-Q2"]);
    assert!(res.is_err());
}

#[test]
fn malformed_period_exits_nonzero() {
    let mut cmd = Command::cargo_bin("pet-qreport").unwrap();
    cmd.args(["2024-Q5", "--proj-dir", "."]);
    cmd.assert().failure();
}

#[test]
fn proj_dir_has_short_flag() {
    let cli = Cli::parse_from(["pet-qreport", "2024-Q2", "-p", "/data/leads"]);
    assert_eq!(cli.proj_dir, std::path::PathBuf::from("/data/leads"));
}
