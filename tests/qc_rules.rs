use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use pet_qreport::qc::rules::{fbb_qc_pass, fdg_qc_pass, ftp_qc_pass, mri_qc_pass};
use pet_qreport::qc::ucsf::{MriQcRecord, PetQcRecord, UcsfQc};
use pet_qreport::qc::umich::apply_umich_qc;
use pet_qreport::qc::QcMode;
use pet_qreport::scan::{ScanRecord, ScanRow};
use pet_qreport::table::ScanKey;
use pet_qreport::tracer::Tracer;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn passing_pet() -> PetQcRecord {
    PetQcRecord {
        subject_id: "LDS0000001".to_string(),
        scan_date: Some(date(2023, 6, 1)),
        native_pet_ok: Some(1.0),
        pet_to_mri_coreg_ok: Some(1.0),
        wcbl_mask_ok: Some(1.0),
        infcblgm_mask_ok: Some(1.0),
        pons_mask_ok: Some(1.0),
        warped_pet_ok: Some(1.0),
        notes: None,
    }
}

fn passing_mri() -> MriQcRecord {
    MriQcRecord {
        subject_id: "LDS0000001".to_string(),
        scan_date: Some(date(2023, 5, 1)),
        native_nu_rating: Some(2.0),
        aparc_rating: Some(2.0),
        warped_nu_ok: Some(1.0),
        notes: None,
    }
}

fn scan(subject: &str, pet_date: NaiveDate) -> ScanRecord {
    ScanRecord {
        subject_id: subject.to_string(),
        tracer: Tracer::Fbb,
        pet_date,
        pet_image_id: "I1".to_string(),
        pet_scan_number: Some(1),
        n_pet_scans: Some(1),
        mri_date: Some(date(2023, 5, 1)),
        mri_image_id: Some("I0".to_string()),
        pet_proc_dir: PathBuf::from("/nonexistent"),
    }
}

#[test]
fn passing_rows_pass_every_rule() {
    let pet = passing_pet();
    assert!(fbb_qc_pass(&pet));
    assert!(ftp_qc_pass(&pet));
    assert!(fdg_qc_pass(&pet));
    assert!(mri_qc_pass(&passing_mri()));
}

#[test]
fn one_failing_check_fails_the_rule() {
    let cases: [fn(&mut PetQcRecord); 3] = [
        |r: &mut PetQcRecord| r.native_pet_ok = Some(0.0),
        |r: &mut PetQcRecord| r.pet_to_mri_coreg_ok = None,
        |r: &mut PetQcRecord| r.wcbl_mask_ok = Some(-1.0),
    ];
    for mutate in cases {
        let mut pet = passing_pet();
        mutate(&mut pet);
        assert!(!fbb_qc_pass(&pet));
    }

    let mut pet = passing_pet();
    pet.infcblgm_mask_ok = Some(0.0);
    assert!(!ftp_qc_pass(&pet));
    assert!(fbb_qc_pass(&pet));

    let mut pet = passing_pet();
    pet.pons_mask_ok = None;
    assert!(!fdg_qc_pass(&pet));

    let mut mri = passing_mri();
    mri.aparc_rating = Some(0.0);
    assert!(!mri_qc_pass(&mri));
}

#[test]
fn missing_sheet_rows_fail_ucsf() {
    let pet = passing_pet();
    let mri = passing_mri();
    assert!(UcsfQc::judge(Tracer::Fbb, Some(&pet), Some(&mri)).pass());
    assert!(!UcsfQc::judge(Tracer::Fbb, None, Some(&mri)).pass());
    assert!(!UcsfQc::judge(Tracer::Fbb, Some(&pet), None).pass());
}

#[test]
fn ucsf_audit_columns_name_the_tracer_mask() {
    let qc = UcsfQc::judge(Tracer::Ftp, Some(&passing_pet()), Some(&passing_mri()));
    let names: Vec<String> = qc.columns().into_iter().map(|(n, _)| n).collect();
    assert!(names.contains(&"infcblgm_mask_ok".to_string()));
    assert!(!names.contains(&"wcbl_mask_ok".to_string()));
}

#[test]
fn umich_drop_mode_removes_scans_without_a_passing_row() {
    let rows = vec![
        ScanRow::new(scan("LDS0000001", date(2023, 6, 1))),
        ScanRow::new(scan("LDS0000002", date(2023, 6, 2))),
    ];
    let passing: HashSet<ScanKey> = [ScanKey::new("LDS0000001", date(2023, 6, 1))]
        .into_iter()
        .collect();
    let (kept, report) = apply_umich_qc(Tracer::Fbb, rows, &passing, QcMode::Drop);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].scan.subject_id, "LDS0000001");
    assert_eq!(kept[0].umich_pass, None);
    assert_eq!(report.passed, 1);
    assert_eq!(report.total, 2);
    assert_eq!(report.failed, vec![ScanKey::new("LDS0000002", date(2023, 6, 2))]);
}

#[test]
fn umich_annotate_mode_keeps_and_flags_failures() {
    let rows = vec![
        ScanRow::new(scan("LDS0000001", date(2023, 6, 1))),
        ScanRow::new(scan("LDS0000002", date(2023, 6, 2))),
    ];
    let passing: HashSet<ScanKey> = [ScanKey::new("LDS0000001", date(2023, 6, 1))]
        .into_iter()
        .collect();
    let (kept, report) = apply_umich_qc(Tracer::Fbb, rows, &passing, QcMode::Annotate);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].umich_pass, Some(true));
    assert_eq!(kept[1].umich_pass, Some(false));
    assert!(!kept[1].passes_qc());
    assert_eq!(report.passed, 1);
}
