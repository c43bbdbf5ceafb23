use std::collections::HashSet;

use pet_qreport::schema::format::{flag_text, format_export};
use pet_qreport::schema::{fbb, fdg, ftp, schema_for};
use pet_qreport::table::{Table, Value};
use pet_qreport::tracer::Tracer;

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn fbb_record() -> Vec<(String, Value)> {
    vec![
        ("subject_id".into(), text("LDS0000001")),
        ("tracer".into(), text("FBB")),
        ("pet_date".into(), text("2023-06-01")),
        ("pet_image_id".into(), text("I123")),
        ("pet_proc_dir".into(), text("/p")),
        ("Screening_PETONLY_Composite_SUVR".into(), Value::Number(1.35)),
        ("Screening_PETONLY_AmyPos_Quantification_1p18".into(), Value::Number(1.0)),
        ("Screening_PETONLY_VisualRead".into(), Value::Null),
        ("Screening_PETONLY_Disagreement".into(), Value::Number(0.0)),
        ("Screening_PETONLY_Final_Read".into(), Value::Number(1.0)),
        ("CohortAssgn".into(), text("EOAD")),
        ("ScalingFactor_wcbl".into(), Value::Number(1.25)),
        ("ScalingFactor_compwm".into(), Value::Number(0.91)),
        ("centiloids_wcbl".into(), Value::Number(45.5)),
        ("Left_Hippocampus_MRIBASED_SUVR".into(), Value::Number(1.1)),
        ("wcbl_ClustSize".into(), Value::Number(1520.0)),
        ("ACC_PCC_MRIBASED_SUVR".into(), Value::Number(9.9)),
    ]
}

fn cell<'a>(columns: &[String], row: &'a [String], name: &str) -> &'a str {
    let idx = columns.iter().position(|c| c == name).unwrap();
    &row[idx]
}

#[test]
fn layouts_are_total_and_unique() {
    for (tracer, expected) in [(Tracer::Fbb, 253), (Tracer::Ftp, 247), (Tracer::Fdg, 232)] {
        let schema = schema_for(tracer);
        assert_eq!(schema.columns.len(), expected, "{}", tracer);
        let unique: HashSet<&str> = schema.columns.iter().copied().collect();
        assert_eq!(unique.len(), schema.columns.len(), "{}", tracer);
        assert_eq!(schema.columns[0], "ID");
        assert_eq!(schema.columns[1], schema.date_column);
        for name in schema.placeholders.iter().chain(schema.retired) {
            assert!(unique.contains(name), "{} {}", tracer, name);
        }
    }
    assert_eq!(fbb::FBB.date_column, "FBBPET_Date");
    assert_eq!(ftp::FTP.date_column, "FTPPET_Date");
    assert_eq!(fdg::FDG.date_column, "FDGPET_Date");
}

#[test]
fn amyloid_export_matches_the_published_layout() {
    let table = Table::from_records([fbb_record()]);
    let export = format_export(Tracer::Fbb, table).unwrap();
    let expected: Vec<String> = fbb::FBB.columns.iter().map(|c| c.to_string()).collect();
    assert_eq!(export.columns, expected);
    assert_eq!(export.rows.len(), 1);

    let row = &export.rows[0];
    let cols = &export.columns;
    assert_eq!(cell(cols, row, "ID"), "LDS0000001");
    assert_eq!(cell(cols, row, "FBBPET_Date"), "06/01/23");
    assert_eq!(cell(cols, row, "ImageID"), "I123");
    assert_eq!(cell(cols, row, "ScalingFactor_WholeCereb"), "1.25");
    assert_eq!(cell(cols, row, "MRIBASED_Composite_Centiloids"), "45.5");
    assert_eq!(cell(cols, row, "Left_Hippocampus_MRIBASED_SUVR"), "1.1");
    assert_eq!(cell(cols, row, "WholeCerebellum_ClustSize"), "1520.0");
    assert_eq!(cell(cols, row, "Screening_PETONLY_Composite_SUVR"), "1.35");
    assert_eq!(cell(cols, row, "CohortAssgn"), "EOAD");
}

#[test]
fn placeholders_and_retired_columns_are_always_empty() {
    let export = format_export(Tracer::Fbb, Table::from_records([fbb_record()])).unwrap();
    let row = &export.rows[0];
    assert_eq!(cell(&export.columns, row, "ACC_PCC_MRIBASED_SUVR"), "");
    assert_eq!(cell(&export.columns, row, "ScalingFactor_CompositeWM"), "");
}

#[test]
fn flag_columns_are_integer_strings() {
    let export = format_export(Tracer::Fbb, Table::from_records([fbb_record()])).unwrap();
    let row = &export.rows[0];
    let cols = &export.columns;
    assert_eq!(cell(cols, row, "Screening_PETONLY_AmyPos_Quantification_1p18"), "1");
    assert_eq!(cell(cols, row, "Screening_PETONLY_VisualRead"), "");
    assert_eq!(cell(cols, row, "Screening_PETONLY_Disagreement"), "0");
    assert_eq!(cell(cols, row, "Screening_PETONLY_Final_Read"), "1");

    assert_eq!(flag_text(&Value::Number(2.0)).unwrap(), text("2"));
    assert_eq!(flag_text(&text("1.0")).unwrap(), text("1"));
    assert_eq!(flag_text(&Value::Null).unwrap(), text(""));
}

#[test]
fn bookkeeping_columns_are_not_exported() {
    let export = format_export(Tracer::Fbb, Table::from_records([fbb_record()])).unwrap();
    for name in ["tracer", "pet_proc_dir", "subject_id", "pet_date", "ScalingFactor_wcbl"] {
        assert!(!export.columns.iter().any(|c| c == name), "{}", name);
    }
}

#[test]
fn tau_export_keeps_only_the_cohort_from_screening() {
    let record = vec![
        ("subject_id".to_string(), text("LDS0000002")),
        ("pet_date".to_string(), text("2023-12-31")),
        ("pet_image_id".to_string(), text("I7")),
        ("CohortAssgn".to_string(), text("CN")),
        ("ScalingFactor_infcblgm".to_string(), Value::Number(1.02)),
    ];
    let export = format_export(Tracer::Ftp, Table::from_records([record])).unwrap();
    let row = &export.rows[0];
    assert_eq!(cell(&export.columns, row, "FTPPET_Date"), "12/31/23");
    assert_eq!(cell(&export.columns, row, "ScalingFactor_InfCerebGray"), "1.02");
    assert_eq!(cell(&export.columns, row, "CohortAssgn"), "CN");
    assert!(!export.columns.iter().any(|c| c.starts_with("Screening_PETONLY")));
}

#[test]
fn empty_class_still_has_the_full_header() {
    let export = format_export(Tracer::Fdg, Table::default()).unwrap();
    assert_eq!(export.columns.len(), fdg::FDG.columns.len());
    assert!(export.rows.is_empty());
}

#[test]
fn formatting_is_deterministic() {
    let a = format_export(Tracer::Fbb, Table::from_records([fbb_record()])).unwrap();
    let b = format_export(Tracer::Fbb, Table::from_records([fbb_record()])).unwrap();
    assert_eq!(a, b);
}
