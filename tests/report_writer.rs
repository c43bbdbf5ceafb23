use std::fs;

use chrono::NaiveDate;
use pet_qreport::io::report_writer::{WriteOutcome, report_file_name, write_report};
use pet_qreport::period::ReportPeriod;
use pet_qreport::schema::format::ExportTable;
use pet_qreport::tracer::Tracer;
use tempfile::TempDir;

fn table(value: &str) -> ExportTable {
    ExportTable {
        tracer: Tracer::Ftp,
        columns: vec!["ID".to_string(), "FTPPET_Date".to_string(), "Note".to_string()],
        rows: vec![vec!["LDS1".to_string(), "06/01/23".to_string(), value.to_string()]],
        missing: Vec::new(),
    }
}

#[test]
fn file_name_is_deterministic() {
    let period: ReportPeriod = "2024-Q2".parse().unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
    assert_eq!(
        report_file_name(Tracer::Ftp, period, today),
        "LEADS-PETCore-quarterly-report_2024-Q2_FTP-ROI-means_2024-04-15.csv"
    );
}

#[test]
fn writes_header_and_rows() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("out.csv");
    let outcome = write_report(&path, &table("a,b"), false).unwrap();
    assert_eq!(outcome, WriteOutcome::Written);
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "ID,FTPPET_Date,Note\nLDS1,06/01/23,\"a,b\"\n");
}

#[test]
fn existing_file_is_skipped_without_overwrite() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.csv");
    write_report(&path, &table("first"), false).unwrap();
    let outcome = write_report(&path, &table("second"), false).unwrap();
    assert_eq!(outcome, WriteOutcome::Skipped);
    assert!(fs::read_to_string(&path).unwrap().contains("first"));
}

#[test]
fn overwrite_replaces_existing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.csv");
    write_report(&path, &table("first"), false).unwrap();
    let outcome = write_report(&path, &table("second"), true).unwrap();
    assert_eq!(outcome, WriteOutcome::Written);
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("second"));
    assert!(!text.contains("first"));
}
