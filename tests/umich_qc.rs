use std::fs;

use chrono::NaiveDate;
use pet_qreport::error::ReportError;
use pet_qreport::qc::QcSource;
use pet_qreport::qc::corrections::{CorrectionTable, DateCorrection};
use pet_qreport::qc::umich::{load_umich_passing, read_umich_qc, umich_qc_file};
use pet_qreport::table::ScanKey;
use pet_qreport::tracer::Tracer;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn known_corrections_apply_to_their_source_and_tracer_only() {
    let table = CorrectionTable::known().unwrap();
    assert_eq!(
        table.lookup(QcSource::Umich, Tracer::Ftp, "LDS0360283", date(2020, 11, 11)),
        Some(date(2020, 11, 12))
    );
    assert_eq!(
        table.lookup(QcSource::Umich, Tracer::Ftp, "LDS0370672", date(2023, 9, 13)),
        Some(date(2023, 9, 14))
    );
    assert_eq!(
        table.lookup(QcSource::Umich, Tracer::Fdg, "LDS0370012", date(2020, 12, 17)),
        Some(date(2020, 12, 15))
    );
    assert_eq!(
        table.lookup(QcSource::Umich, Tracer::Fbb, "LDS0360283", date(2020, 11, 11)),
        None
    );
    assert_eq!(
        table.lookup(QcSource::Ucsf, Tracer::Ftp, "LDS0360283", date(2020, 11, 11)),
        None
    );
}

#[test]
fn custom_corrections_are_parsed() {
    let table = CorrectionTable::new(&[DateCorrection {
        source: QcSource::Umich,
        tracer: Tracer::Fbb,
        subject_id: "LDS1",
        recorded: "2021-01-01",
        corrected: "2021-01-02",
    }])
    .unwrap();
    assert_eq!(
        table.lookup(QcSource::Umich, Tracer::Fbb, "LDS1", date(2021, 1, 1)),
        Some(date(2021, 1, 2))
    );
}

#[test]
fn passing_rows_are_corrected_before_the_join() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(umich_qc_file(Tracer::Ftp)),
        "subject_label,scandate,scanqlty\n\
         LDS0360283,2020-11-11,1\n\
         LDS0000001,2021-01-05,1\n\
         LDS0000002,2021-01-06,0\n\
         LDS0000003,2021-01-07,\n",
    )
    .unwrap();
    let corrections = CorrectionTable::known().unwrap();
    let (passing, warnings) = load_umich_passing(tmp.path(), Tracer::Ftp, &corrections).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(passing.len(), 2);
    assert!(passing.contains(&ScanKey::new("LDS0360283", date(2020, 11, 12))));
    assert!(passing.contains(&ScanKey::new("LDS0000001", date(2021, 1, 5))));
}

#[test]
fn duplicate_passing_rows_are_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(umich_qc_file(Tracer::Fbb)),
        "subject_label,scandate,scanqltya\n\
         LDS0000001,2021-01-05,1\n\
         LDS0000001,2021-01-05,1\n",
    )
    .unwrap();
    let corrections = CorrectionTable::known().unwrap();
    let err = load_umich_passing(tmp.path(), Tracer::Fbb, &corrections).unwrap_err();
    match err.downcast_ref::<ReportError>() {
        Some(ReportError::DuplicateQcRecord {
            subject_id, count, ..
        }) => {
            assert_eq!(subject_id, "LDS0000001");
            assert_eq!(*count, 2);
        }
        other => panic!("expected DuplicateQcRecord, got {:?}", other),
    }
}

#[test]
fn missing_codebook_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let corrections = CorrectionTable::known().unwrap();
    let err = load_umich_passing(tmp.path(), Tracer::Fdg, &corrections).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::NotFound { .. })
    ));
}

#[test]
fn unreadable_rows_are_skipped_with_a_warning() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(umich_qc_file(Tracer::Fbb));
    fs::write(
        &path,
        "subject_label,scandate,scanqltya\n\
         LDS0000001,not-a-date,1\n\
         LDS0000002,2021-02-01,1\n",
    )
    .unwrap();
    let (records, warnings) = read_umich_qc(&path, Tracer::Fbb).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(warnings.len(), 1);
}
