use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use pet_qreport::assemble::{assemble_class, to_table};
use pet_qreport::measure::files::MeasureKind;
use pet_qreport::measure::reshape::WideRow;
use pet_qreport::measure::{ClassMeasures, MeasureTable};
use pet_qreport::scan::{ScanRecord, ScanRow};
use pet_qreport::table::{ScanKey, Value};
use pet_qreport::tracer::Tracer;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn row(subject: &str, pet_date: NaiveDate) -> ScanRow {
    ScanRow::new(ScanRecord {
        subject_id: subject.to_string(),
        tracer: Tracer::Ftp,
        pet_date,
        pet_image_id: format!("I-{}", subject),
        pet_scan_number: Some(1),
        n_pet_scans: Some(1),
        mri_date: None,
        mri_image_id: None,
        pet_proc_dir: PathBuf::from("/p"),
    })
}

fn measure_table(kind: MeasureKind, rows: &[(ScanKey, &str, f64)]) -> MeasureTable {
    let mut map = BTreeMap::new();
    for (key, column, value) in rows {
        map.insert(
            key.clone(),
            WideRow {
                key: key.clone(),
                columns: vec![(column.to_string(), Some(*value))],
            },
        );
    }
    MeasureTable {
        kind,
        rows: map,
        missing: Vec::new(),
        failed: Vec::new(),
    }
}

#[test]
fn joins_filters_and_sorts() {
    let a = row("LDS2", date(2024, 1, 5));
    let b = row("LDS1", date(2024, 3, 31));
    let late = row("LDS1", date(2024, 4, 1));
    let mut failed = row("LDS3", date(2023, 2, 1));
    failed.ucsf_pass = Some(false);

    let measures = ClassMeasures {
        ref_region: measure_table(
            MeasureKind::RefRegion,
            &[(a.scan.key(), "ScalingFactor_infcblgm", 1.1)],
        ),
        roi: measure_table(
            MeasureKind::Roi,
            &[(b.scan.key(), "Left_Caudate_MRIBASED_SUVR", 1.3)],
        ),
        summary_index: None,
        counts: Vec::new(),
    };

    let rows = vec![a.clone(), late, failed, b.clone()];
    let (records, summary) =
        assemble_class(Tracer::Ftp, &rows, &measures, None, date(2024, 3, 31));

    assert_eq!(summary.joined, 4);
    assert_eq!(summary.qc_passed, 3);
    assert_eq!(summary.retained, 2);
    assert_eq!(summary.subjects, 2);
    assert_eq!(summary.stop_date, "2024-03-31");

    let keys: Vec<ScanKey> = records.iter().map(|r| r.key()).collect();
    assert_eq!(keys, vec![b.scan.key(), a.scan.key()]);
    assert!(records[0].ref_region.is_none());
    assert!(records[0].roi.is_some());
    assert!(records[1].ref_region.is_some());

    let table = to_table(&records);
    let idx = table.index_of("ScalingFactor_infcblgm").unwrap();
    assert_eq!(table.rows[0][idx], Value::Null);
    assert_eq!(table.rows[1][idx], Value::Number(1.1));
    let date_idx = table.index_of("pet_date").unwrap();
    assert_eq!(table.rows[0][date_idx], Value::Text("2024-03-31".to_string()));
    let cohort = table.index_of("CohortAssgn").unwrap();
    assert_eq!(table.rows[0][cohort], Value::Null);
}

#[test]
fn annotated_failures_are_removed_before_export() {
    let mut failed = row("LDS1", date(2023, 1, 1));
    failed.umich_pass = Some(false);
    let mut passed = row("LDS2", date(2023, 1, 1));
    passed.umich_pass = Some(true);
    let measures = ClassMeasures {
        ref_region: measure_table(MeasureKind::RefRegion, &[]),
        roi: measure_table(MeasureKind::Roi, &[]),
        summary_index: None,
        counts: Vec::new(),
    };
    let (records, _) = assemble_class(
        Tracer::Ftp,
        &[failed, passed],
        &measures,
        None,
        date(2024, 3, 31),
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].row.scan.subject_id, "LDS2");
}
