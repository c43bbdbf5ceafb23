use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pet_qreport::qc::QcMode;
use pet_qreport::qc::rules::fbb_qc_pass;
use pet_qreport::qc::ucsf::{UcsfQc, apply_ucsf_qc, load_ucsf_sheets, read_pet_sheet};
use pet_qreport::scan::{ScanRecord, ScanRow};
use pet_qreport::table::ScanKey;
use pet_qreport::tracer::Tracer;
use tempfile::TempDir;

const MRI_HEADER: &str = "subj,scan_date,native_nu_rating,aparc_rating,warped_nu_ok,notes\n";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn row(subject: &str, pet_date: NaiveDate, mri_date: Option<NaiveDate>) -> ScanRow {
    ScanRow::new(ScanRecord {
        subject_id: subject.to_string(),
        tracer: Tracer::Fbb,
        pet_date,
        pet_image_id: "I1".to_string(),
        pet_scan_number: Some(1),
        n_pet_scans: Some(1),
        mri_date,
        mri_image_id: None,
        pet_proc_dir: PathBuf::from("/p"),
    })
}

fn key(subject: &str, d: NaiveDate) -> ScanKey {
    ScanKey::new(subject.to_string(), d)
}

/// Two MRI sheets (only the newest should count) and one PET sheet per
/// tracer. The FBB sheet repeats LDS1; the first, passing row must win.
fn write_sheets(dir: &Path) {
    fs::write(
        dir.join("processed_MRI-T1_qc-evals_2024-01-01.csv"),
        format!("{}LDS2,2023-05-02,2,2,1,\n", MRI_HEADER),
    )
    .unwrap();
    fs::write(
        dir.join("processed_MRI-T1_qc-evals_2024-04-01.csv"),
        format!(
            "{}\
             LDS1,2023-05-01,2,2,1,\n\
             LDS2,2023-05-02,2,0,1,bad parcellation\n",
            MRI_HEADER
        ),
    )
    .unwrap();
    fs::write(
        dir.join("processed_FBB_qc-evals_2024-04-01.csv"),
        "subj,scan_date,native_pet_ok,pet_to_mri_coreg_ok,wcbl_mask_ok,warped_pet_ok,notes\n\
         LDS1,2023-06-01,1,1,1,1,\n\
         LDS1,2023-06-01,0,0,0,0,repeat\n\
         LDS2,2023-07-01,1,1,1,1,\n\
         LDS3,2023-08-01,1,1,1,1,\n\
         LDS4,2023-09-01,1,1,1,1,\n",
    )
    .unwrap();
    fs::write(
        dir.join("processed_FTP_qc-evals_2024-04-01.csv"),
        "subj,scan_date,native_pet_ok,pet_to_mri_coreg_ok,infcblgm_mask_ok,warped_pet_ok,notes\n",
    )
    .unwrap();
    fs::write(
        dir.join("processed_FDG_qc-evals_2024-04-01.csv"),
        "subj,scan_date,native_pet_ok,pet_to_mri_coreg_ok,pons_mask_ok,warped_pet_ok,notes\n",
    )
    .unwrap();
}

fn fbb_rows() -> Vec<ScanRow> {
    vec![
        // PET and MRI both pass.
        row("LDS1", date(2023, 6, 1), Some(date(2023, 5, 1))),
        // PET passes, MRI parcellation fails.
        row("LDS2", date(2023, 7, 1), Some(date(2023, 5, 2))),
        // PET passes, no MRI sheet row.
        row("LDS3", date(2023, 8, 1), Some(date(2023, 5, 3))),
        // PET passes, no paired MRI at all.
        row("LDS4", date(2023, 9, 1), None),
    ]
}

#[test]
fn newest_mri_sheet_is_used_and_repeats_keep_first() {
    let tmp = TempDir::new().unwrap();
    write_sheets(tmp.path());
    let (sheets, warnings) = load_ucsf_sheets(tmp.path()).unwrap();

    assert_eq!(
        sheets.paths[0],
        tmp.path().join("processed_MRI-T1_qc-evals_2024-04-01.csv")
    );
    assert_eq!(sheets.paths.len(), 4);
    assert_eq!(sheets.mri.len(), 2);
    let lds2 = &sheets.mri[&key("LDS2", date(2023, 5, 2))];
    assert_eq!(lds2.aparc_rating, Some(0.0));
    assert_eq!(lds2.notes.as_deref(), Some("bad parcellation"));

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("keeping the first row"));
    let lds1 = &sheets.pet[&Tracer::Fbb][&key("LDS1", date(2023, 6, 1))];
    assert_eq!(lds1.native_pet_ok, Some(1.0));
    assert!(lds1.notes.is_none());
}

#[test]
fn drop_mode_keeps_only_scans_passing_pet_and_mri() {
    let tmp = TempDir::new().unwrap();
    write_sheets(tmp.path());
    let (sheets, _) = load_ucsf_sheets(tmp.path()).unwrap();

    let (kept, report) = apply_ucsf_qc(Tracer::Fbb, fbb_rows(), &sheets, QcMode::Drop);
    assert_eq!(report.total, 4);
    assert_eq!(report.passed, 1);
    assert_eq!(
        report.failed,
        vec![
            key("LDS2", date(2023, 7, 1)),
            key("LDS3", date(2023, 8, 1)),
            key("LDS4", date(2023, 9, 1)),
        ]
    );
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].scan.subject_id, "LDS1");
    assert_eq!(kept[0].ucsf_pass, None);
}

#[test]
fn annotate_mode_flags_each_scan() {
    let tmp = TempDir::new().unwrap();
    write_sheets(tmp.path());
    let (sheets, _) = load_ucsf_sheets(tmp.path()).unwrap();

    let (kept, report) = apply_ucsf_qc(Tracer::Fbb, fbb_rows(), &sheets, QcMode::Annotate);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed.len(), 3);
    assert_eq!(kept.len(), 4);

    let flags: Vec<Option<bool>> = kept.iter().map(|r| r.ucsf_pass).collect();
    assert_eq!(flags, vec![Some(true), Some(false), Some(false), Some(false)]);

    let lds2 = kept[1].ucsf.as_ref().unwrap();
    assert!(lds2.pet_qc_pass);
    assert!(!lds2.mri_qc_pass);
    let lds3 = kept[2].ucsf.as_ref().unwrap();
    assert!(lds3.pet_qc_pass);
    assert!(lds3.mri.is_none());
    let lds4 = kept[3].ucsf.as_ref().unwrap();
    assert!(lds4.mri.is_none());
    assert!(!lds4.pass());
}

#[test]
fn unreadable_check_is_missing_and_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("processed_FBB_qc-evals_2024-04-01.csv");
    fs::write(
        &path,
        "subj,scan_date,native_pet_ok,pet_to_mri_coreg_ok,wcbl_mask_ok,warped_pet_ok,notes\n\
         LDS1,2023-06-01,yes,1,1,1,\n\
         LDS2,2023-07-01,1,1,1,1,\n",
    )
    .unwrap();
    let mut warnings = Vec::new();
    let rows = read_pet_sheet(&path, &mut warnings).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("native_pet_ok"));

    let lds1 = &rows[&key("LDS1", date(2023, 6, 1))];
    assert_eq!(lds1.native_pet_ok, None);
    assert_eq!(lds1.pet_to_mri_coreg_ok, Some(1.0));
    assert!(!fbb_qc_pass(lds1));
    assert!(!UcsfQc::judge(Tracer::Fbb, Some(lds1), None).pet_qc_pass);
    assert!(fbb_qc_pass(&rows[&key("LDS2", date(2023, 7, 1))]));
}
