//! Pass rules for the UCSF check sheets.
//!
//! Each rule is a pure predicate over one typed QC row; a check passes
//! only when it was recorded and is positive.

use crate::qc::ucsf::{MriQcRecord, PetQcRecord};
use crate::tracer::Tracer;

pub type PetQcRule = fn(&PetQcRecord) -> bool;

pub fn check_ok(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v > 0.0)
}

pub fn all_of(checks: &[bool]) -> bool {
    checks.iter().all(|c| *c)
}

pub fn mri_qc_pass(row: &MriQcRecord) -> bool {
    all_of(&[check_ok(row.native_nu_rating), check_ok(row.aparc_rating)])
}

fn pet_core_ok(row: &PetQcRecord) -> bool {
    all_of(&[check_ok(row.native_pet_ok), check_ok(row.pet_to_mri_coreg_ok)])
}

pub fn fbb_qc_pass(row: &PetQcRecord) -> bool {
    all_of(&[pet_core_ok(row), check_ok(row.wcbl_mask_ok)])
}

pub fn ftp_qc_pass(row: &PetQcRecord) -> bool {
    all_of(&[pet_core_ok(row), check_ok(row.infcblgm_mask_ok)])
}

pub fn fdg_qc_pass(row: &PetQcRecord) -> bool {
    all_of(&[pet_core_ok(row), check_ok(row.pons_mask_ok)])
}

pub fn pet_qc_rule(tracer: Tracer) -> PetQcRule {
    match tracer {
        Tracer::Fbb => fbb_qc_pass,
        Tracer::Ftp => ftp_qc_pass,
        Tracer::Fdg => fdg_qc_pass,
    }
}

/// A scan passes UCSF QC only when both its PET and its MRI pass.
pub fn ucsf_qc_pass(pet_pass: bool, mri_pass: bool) -> bool {
    pet_pass && mri_pass
}
