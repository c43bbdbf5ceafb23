//! Tau (flortaucipir) export layout.

use super::ExportSchema;

pub const FTP: ExportSchema = ExportSchema {
    drop: &[
        "tracer",
        "pet_scan_number",
        "n_pet_scans",
        "days_from_baseline_pet",
        "days_from_last_pet",
        "pet_res",
        "mri_date",
        "mri_image_id",
        "days_mri_to_pet",
        "abs_days_mri_to_pet",
        "pet_proc_dir",
        "pet_qc_pass",
        "native_pet_ok",
        "pet_to_mri_coreg_ok",
        "infcblgm_mask_ok",
        "erodedwm_mask_ok",
        "warped_pet_ok",
        "pet_qc_notes",
        "mri_qc_pass",
        "native_nu_rating",
        "aparc_rating",
        "warped_nu_ok",
        "mri_qc_notes",
        "qc_pass",
        "infcblgm_MRIBASED_SUVR",
        "mtl_no_hippocampus_MRIBASED_SUVR",
        "basolateral_temporal_MRIBASED_SUVR",
        "temporoparietal_MRIBASED_SUVR",
        "cortex_desikan_MRIBASED_SUVR",
        "mtl_no_hippocampus_ClustSize",
        "basolateral_temporal_ClustSize",
        "temporoparietal_ClustSize",
        "cortex_desikan_ClustSize",
    ],
    rename: &[
        ("subject_id", "ID"),
        ("pet_date", "FTPPET_Date"),
        ("pet_image_id", "ImageID"),
        ("ScalingFactor_infcblgm", "ScalingFactor_InfCerebGray"),
        ("ScalingFactor_eroded", "ScalingFactor_ErodedWM"),
        ("eroded_subcortwm_MRIBASED_SUVR", "ErodedWM_MRIBASED_SUVR"),
        ("meta_temporal_MRIBASED_SUVR", "MetaROI_MRIBASED_SUVR"),
        ("3rd_Ventricle_MRIBASED_SUVR", "Third_Ventricle_MRIBASED_SUVR"),
        ("4th_Ventricle_MRIBASED_SUVR", "Fourth_Ventricle_MRIBASED_SUVR"),
        ("eroded_subcortwm_ClustSize", "ScalingFactor_ErodedWM_ClustSize"),
        ("infcblgm_ClustSize", "ScalingFactor_InfCerebGray_ClustSize"),
        ("meta_temporal_ClustSize", "MetaROI_ClustSize"),
        ("3rd_Ventricle_ClustSize", "Third_Ventricle_ClustSize"),
        ("4th_Ventricle_ClustSize", "Fourth_Ventricle_ClustSize"),
    ],
    placeholders: &[
        "Assigned_MRIBASED_MetaROI_ADNIcutoff_1p2",
        "Braak_1_MRIBASED_SUVR",
        "Braak_12_MRIBASED_SUVR",
        "Braak_34_MRIBASED_SUVR",
        "Braak_56_MRIBASED_SUVR",
        "Left_vessel_MRIBASED_SUVR",
        "Right_vessel_MRIBASED_SUVR",
        "Fifth_Ventricle_MRIBASED_SUVR",
        "non_WM_hypointensities_MRIBASED_SUVR",
        "ctx_lh_unknown_MRIBASED_SUVR",
        "ctx_rh_unknown_MRIBASED_SUVR",
        "Braak_1_ClustSize",
        "Braak_12_ClustSize",
        "Braak_34_ClustSize",
        "Braak_56_ClustSize",
        "ErodedWM_ClustSize",
        "Left_vessel_ClustSize",
        "Right_vessel_ClustSize",
        "Fifth_Ventricle_ClustSize",
        "non_WM_hypointensities_ClustSize",
        "ctx_lh_unknown_ClustSize",
        "ctx_rh_unknown_ClustSize",
    ],
    retired: &[
        "ScalingFactor_ErodedWM",
        "ErodedWM_MRIBASED_SUVR",
        "ScalingFactor_ErodedWM_ClustSize",
    ],
    flag_columns: &[],
    date_column: "FTPPET_Date",
    columns: &[
        "ID",
        "FTPPET_Date",
        "ImageID",
        "CohortAssgn",
        "ScalingFactor_InfCerebGray",
        "ScalingFactor_ErodedWM",
        "Assigned_MRIBASED_MetaROI_ADNIcutoff_1p2",
        "MetaROI_MRIBASED_SUVR",
        "Braak_1_MRIBASED_SUVR",
        "Braak_12_MRIBASED_SUVR",
        "Braak_34_MRIBASED_SUVR",
        "Braak_56_MRIBASED_SUVR",
        "ErodedWM_MRIBASED_SUVR",
        "Left_Cerebral_White_Matter_MRIBASED_SUVR",
        "Left_Lateral_Ventricle_MRIBASED_SUVR",
        "Left_Inf_Lat_Vent_MRIBASED_SUVR",
        "Left_Cerebellum_White_Matter_MRIBASED_SUVR",
        "Left_Cerebellum_Cortex_MRIBASED_SUVR",
        "Left_Thalamus_Proper_MRIBASED_SUVR",
        "Left_Caudate_MRIBASED_SUVR",
        "Left_Putamen_MRIBASED_SUVR",
        "Left_Pallidum_MRIBASED_SUVR",
        "Third_Ventricle_MRIBASED_SUVR",
        "Fourth_Ventricle_MRIBASED_SUVR",
        "Brain_Stem_MRIBASED_SUVR",
        "Left_Hippocampus_MRIBASED_SUVR",
        "Left_Amygdala_MRIBASED_SUVR",
        "CSF_MRIBASED_SUVR",
        "Left_Accumbens_area_MRIBASED_SUVR",
        "Left_VentralDC_MRIBASED_SUVR",
        "Left_vessel_MRIBASED_SUVR",
        "Left_choroid_plexus_MRIBASED_SUVR",
        "Right_Cerebral_White_Matter_MRIBASED_SUVR",
        "Right_Lateral_Ventricle_MRIBASED_SUVR",
        "Right_Inf_Lat_Vent_MRIBASED_SUVR",
        "Right_Cerebellum_White_Matter_MRIBASED_SUVR",
        "Right_Cerebellum_Cortex_MRIBASED_SUVR",
        "Right_Thalamus_Proper_MRIBASED_SUVR",
        "Right_Caudate_MRIBASED_SUVR",
        "Right_Putamen_MRIBASED_SUVR",
        "Right_Pallidum_MRIBASED_SUVR",
        "Right_Hippocampus_MRIBASED_SUVR",
        "Right_Amygdala_MRIBASED_SUVR",
        "Right_Accumbens_area_MRIBASED_SUVR",
        "Right_VentralDC_MRIBASED_SUVR",
        "Right_vessel_MRIBASED_SUVR",
        "Right_choroid_plexus_MRIBASED_SUVR",
        "Fifth_Ventricle_MRIBASED_SUVR",
        "WM_hypointensities_MRIBASED_SUVR",
        "non_WM_hypointensities_MRIBASED_SUVR",
        "Optic_Chiasm_MRIBASED_SUVR",
        "CC_Posterior_MRIBASED_SUVR",
        "CC_Mid_Posterior_MRIBASED_SUVR",
        "CC_Central_MRIBASED_SUVR",
        "CC_Mid_Anterior_MRIBASED_SUVR",
        "CC_Anterior_MRIBASED_SUVR",
        "ctx_lh_unknown_MRIBASED_SUVR",
        "ctx_lh_bankssts_MRIBASED_SUVR",
        "ctx_lh_caudalanteriorcingulate_MRIBASED_SUVR",
        "ctx_lh_caudalmiddlefrontal_MRIBASED_SUVR",
        "ctx_lh_cuneus_MRIBASED_SUVR",
        "ctx_lh_entorhinal_MRIBASED_SUVR",
        "ctx_lh_fusiform_MRIBASED_SUVR",
        "ctx_lh_inferiorparietal_MRIBASED_SUVR",
        "ctx_lh_inferiortemporal_MRIBASED_SUVR",
        "ctx_lh_isthmuscingulate_MRIBASED_SUVR",
        "ctx_lh_lateraloccipital_MRIBASED_SUVR",
        "ctx_lh_lateralorbitofrontal_MRIBASED_SUVR",
        "ctx_lh_lingual_MRIBASED_SUVR",
        "ctx_lh_medialorbitofrontal_MRIBASED_SUVR",
        "ctx_lh_middletemporal_MRIBASED_SUVR",
        "ctx_lh_parahippocampal_MRIBASED_SUVR",
        "ctx_lh_paracentral_MRIBASED_SUVR",
        "ctx_lh_parsopercularis_MRIBASED_SUVR",
        "ctx_lh_parsorbitalis_MRIBASED_SUVR",
        "ctx_lh_parstriangularis_MRIBASED_SUVR",
        "ctx_lh_pericalcarine_MRIBASED_SUVR",
        "ctx_lh_postcentral_MRIBASED_SUVR",
        "ctx_lh_posteriorcingulate_MRIBASED_SUVR",
        "ctx_lh_precentral_MRIBASED_SUVR",
        "ctx_lh_precuneus_MRIBASED_SUVR",
        "ctx_lh_rostralanteriorcingulate_MRIBASED_SUVR",
        "ctx_lh_rostralmiddlefrontal_MRIBASED_SUVR",
        "ctx_lh_superiorfrontal_MRIBASED_SUVR",
        "ctx_lh_superiorparietal_MRIBASED_SUVR",
        "ctx_lh_superiortemporal_MRIBASED_SUVR",
        "ctx_lh_supramarginal_MRIBASED_SUVR",
        "ctx_lh_frontalpole_MRIBASED_SUVR",
        "ctx_lh_temporalpole_MRIBASED_SUVR",
        "ctx_lh_transversetemporal_MRIBASED_SUVR",
        "ctx_lh_insula_MRIBASED_SUVR",
        "ctx_rh_unknown_MRIBASED_SUVR",
        "ctx_rh_bankssts_MRIBASED_SUVR",
        "ctx_rh_caudalanteriorcingulate_MRIBASED_SUVR",
        "ctx_rh_caudalmiddlefrontal_MRIBASED_SUVR",
        "ctx_rh_cuneus_MRIBASED_SUVR",
        "ctx_rh_entorhinal_MRIBASED_SUVR",
        "ctx_rh_fusiform_MRIBASED_SUVR",
        "ctx_rh_inferiorparietal_MRIBASED_SUVR",
        "ctx_rh_inferiortemporal_MRIBASED_SUVR",
        "ctx_rh_isthmuscingulate_MRIBASED_SUVR",
        "ctx_rh_lateraloccipital_MRIBASED_SUVR",
        "ctx_rh_lateralorbitofrontal_MRIBASED_SUVR",
        "ctx_rh_lingual_MRIBASED_SUVR",
        "ctx_rh_medialorbitofrontal_MRIBASED_SUVR",
        "ctx_rh_middletemporal_MRIBASED_SUVR",
        "ctx_rh_parahippocampal_MRIBASED_SUVR",
        "ctx_rh_paracentral_MRIBASED_SUVR",
        "ctx_rh_parsopercularis_MRIBASED_SUVR",
        "ctx_rh_parsorbitalis_MRIBASED_SUVR",
        "ctx_rh_parstriangularis_MRIBASED_SUVR",
        "ctx_rh_pericalcarine_MRIBASED_SUVR",
        "ctx_rh_postcentral_MRIBASED_SUVR",
        "ctx_rh_posteriorcingulate_MRIBASED_SUVR",
        "ctx_rh_precentral_MRIBASED_SUVR",
        "ctx_rh_precuneus_MRIBASED_SUVR",
        "ctx_rh_rostralanteriorcingulate_MRIBASED_SUVR",
        "ctx_rh_rostralmiddlefrontal_MRIBASED_SUVR",
        "ctx_rh_superiorfrontal_MRIBASED_SUVR",
        "ctx_rh_superiorparietal_MRIBASED_SUVR",
        "ctx_rh_superiortemporal_MRIBASED_SUVR",
        "ctx_rh_supramarginal_MRIBASED_SUVR",
        "ctx_rh_frontalpole_MRIBASED_SUVR",
        "ctx_rh_temporalpole_MRIBASED_SUVR",
        "ctx_rh_transversetemporal_MRIBASED_SUVR",
        "ctx_rh_insula_MRIBASED_SUVR",
        "ScalingFactor_InfCerebGray_ClustSize",
        "ScalingFactor_ErodedWM_ClustSize",
        "MetaROI_ClustSize",
        "Braak_1_ClustSize",
        "Braak_12_ClustSize",
        "Braak_34_ClustSize",
        "Braak_56_ClustSize",
        "ErodedWM_ClustSize",
        "Left_Cerebral_White_Matter_ClustSize",
        "Left_Lateral_Ventricle_ClustSize",
        "Left_Inf_Lat_Vent_ClustSize",
        "Left_Cerebellum_White_Matter_ClustSize",
        "Left_Cerebellum_Cortex_ClustSize",
        "Left_Thalamus_Proper_ClustSize",
        "Left_Caudate_ClustSize",
        "Left_Putamen_ClustSize",
        "Left_Pallidum_ClustSize",
        "Third_Ventricle_ClustSize",
        "Fourth_Ventricle_ClustSize",
        "Brain_Stem_ClustSize",
        "Left_Hippocampus_ClustSize",
        "Left_Amygdala_ClustSize",
        "CSF_ClustSize",
        "Left_Accumbens_area_ClustSize",
        "Left_VentralDC_ClustSize",
        "Left_vessel_ClustSize",
        "Left_choroid_plexus_ClustSize",
        "Right_Cerebral_White_Matter_ClustSize",
        "Right_Lateral_Ventricle_ClustSize",
        "Right_Inf_Lat_Vent_ClustSize",
        "Right_Cerebellum_White_Matter_ClustSize",
        "Right_Cerebellum_Cortex_ClustSize",
        "Right_Thalamus_Proper_ClustSize",
        "Right_Caudate_ClustSize",
        "Right_Putamen_ClustSize",
        "Right_Pallidum_ClustSize",
        "Right_Hippocampus_ClustSize",
        "Right_Amygdala_ClustSize",
        "Right_Accumbens_area_ClustSize",
        "Right_VentralDC_ClustSize",
        "Right_vessel_ClustSize",
        "Right_choroid_plexus_ClustSize",
        "Fifth_Ventricle_ClustSize",
        "WM_hypointensities_ClustSize",
        "non_WM_hypointensities_ClustSize",
        "Optic_Chiasm_ClustSize",
        "CC_Posterior_ClustSize",
        "CC_Mid_Posterior_ClustSize",
        "CC_Central_ClustSize",
        "CC_Mid_Anterior_ClustSize",
        "CC_Anterior_ClustSize",
        "ctx_lh_unknown_ClustSize",
        "ctx_lh_bankssts_ClustSize",
        "ctx_lh_caudalanteriorcingulate_ClustSize",
        "ctx_lh_caudalmiddlefrontal_ClustSize",
        "ctx_lh_cuneus_ClustSize",
        "ctx_lh_entorhinal_ClustSize",
        "ctx_lh_fusiform_ClustSize",
        "ctx_lh_inferiorparietal_ClustSize",
        "ctx_lh_inferiortemporal_ClustSize",
        "ctx_lh_isthmuscingulate_ClustSize",
        "ctx_lh_lateraloccipital_ClustSize",
        "ctx_lh_lateralorbitofrontal_ClustSize",
        "ctx_lh_lingual_ClustSize",
        "ctx_lh_medialorbitofrontal_ClustSize",
        "ctx_lh_middletemporal_ClustSize",
        "ctx_lh_parahippocampal_ClustSize",
        "ctx_lh_paracentral_ClustSize",
        "ctx_lh_parsopercularis_ClustSize",
        "ctx_lh_parsorbitalis_ClustSize",
        "ctx_lh_parstriangularis_ClustSize",
        "ctx_lh_pericalcarine_ClustSize",
        "ctx_lh_postcentral_ClustSize",
        "ctx_lh_posteriorcingulate_ClustSize",
        "ctx_lh_precentral_ClustSize",
        "ctx_lh_precuneus_ClustSize",
        "ctx_lh_rostralanteriorcingulate_ClustSize",
        "ctx_lh_rostralmiddlefrontal_ClustSize",
        "ctx_lh_superiorfrontal_ClustSize",
        "ctx_lh_superiorparietal_ClustSize",
        "ctx_lh_superiortemporal_ClustSize",
        "ctx_lh_supramarginal_ClustSize",
        "ctx_lh_frontalpole_ClustSize",
        "ctx_lh_temporalpole_ClustSize",
        "ctx_lh_transversetemporal_ClustSize",
        "ctx_lh_insula_ClustSize",
        "ctx_rh_unknown_ClustSize",
        "ctx_rh_bankssts_ClustSize",
        "ctx_rh_caudalanteriorcingulate_ClustSize",
        "ctx_rh_caudalmiddlefrontal_ClustSize",
        "ctx_rh_cuneus_ClustSize",
        "ctx_rh_entorhinal_ClustSize",
        "ctx_rh_fusiform_ClustSize",
        "ctx_rh_inferiorparietal_ClustSize",
        "ctx_rh_inferiortemporal_ClustSize",
        "ctx_rh_isthmuscingulate_ClustSize",
        "ctx_rh_lateraloccipital_ClustSize",
        "ctx_rh_lateralorbitofrontal_ClustSize",
        "ctx_rh_lingual_ClustSize",
        "ctx_rh_medialorbitofrontal_ClustSize",
        "ctx_rh_middletemporal_ClustSize",
        "ctx_rh_parahippocampal_ClustSize",
        "ctx_rh_paracentral_ClustSize",
        "ctx_rh_parsopercularis_ClustSize",
        "ctx_rh_parsorbitalis_ClustSize",
        "ctx_rh_parstriangularis_ClustSize",
        "ctx_rh_pericalcarine_ClustSize",
        "ctx_rh_postcentral_ClustSize",
        "ctx_rh_posteriorcingulate_ClustSize",
        "ctx_rh_precentral_ClustSize",
        "ctx_rh_precuneus_ClustSize",
        "ctx_rh_rostralanteriorcingulate_ClustSize",
        "ctx_rh_rostralmiddlefrontal_ClustSize",
        "ctx_rh_superiorfrontal_ClustSize",
        "ctx_rh_superiorparietal_ClustSize",
        "ctx_rh_superiortemporal_ClustSize",
        "ctx_rh_supramarginal_ClustSize",
        "ctx_rh_frontalpole_ClustSize",
        "ctx_rh_temporalpole_ClustSize",
        "ctx_rh_transversetemporal_ClustSize",
        "ctx_rh_insula_ClustSize",
    ],
};
