use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::io::csv_input::{self, field};
use crate::measure::reshape::{LongRecord, NamingOrder, Reshape, normalize_region};
use crate::scan::ScanRecord;
use crate::table::{ScanKey, format_date, parse_date, parse_number};

/// Region assigned when a scaling factor was computed over several masks.
pub const COMPOSITE_REGION: &str = "compwm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeasureKind {
    /// Reference region means used as SUVR scaling factors.
    RefRegion,
    /// Regional SUVRs and cluster sizes.
    Roi,
    /// Cortical summary SUVR converted to Centiloids (amyloid only).
    SummaryIndex,
}

impl MeasureKind {
    pub fn label(self) -> &'static str {
        match self {
            MeasureKind::RefRegion => "ref_region",
            MeasureKind::Roi => "roi",
            MeasureKind::SummaryIndex => "summary_index",
        }
    }

    pub fn file_name(self, scan: &ScanRecord) -> String {
        let tag = format!(
            "{}_{}_{}",
            scan.subject_id,
            scan.tracer.tag(),
            format_date(scan.pet_date)
        );
        match self {
            MeasureKind::RefRegion => format!("{}_ref-region-means.csv", tag),
            MeasureKind::Roi => format!(
                "r{}_suvr-{}_roi-extractions.csv",
                tag,
                scan.tracer.ref_region()
            ),
            MeasureKind::SummaryIndex => format!("{}_amyloid-cortical-summary.csv", tag),
        }
    }

    pub fn file_path(self, scan: &ScanRecord) -> PathBuf {
        scan.pet_proc_dir.join(self.file_name(scan))
    }

    pub fn parse(self, path: &Path) -> Result<(Reshape, Vec<LongRecord>)> {
        match self {
            MeasureKind::RefRegion => parse_ref_region_means(path),
            MeasureKind::Roi => parse_roi_extractions(path),
            MeasureKind::SummaryIndex => parse_summary_index(path),
        }
    }
}

fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(file)
}

/// Subject and date from a `{subj}_{TRACER}_{date}_...` file name.
pub fn parse_scan_tag(file: &str) -> Result<ScanKey> {
    let name = base_name(file);
    let mut tokens = name.split('_');
    let (Some(subj), Some(_tracer), Some(date)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        bail!("'{}' does not start with subject_tracer_date", name);
    };
    let date: NaiveDate =
        parse_date(date).with_context(|| format!("bad scan date in '{}'", name))?;
    Ok(ScanKey::new(subj, date))
}

/// Region encoded in an image or mask name such as
/// `LDS0000001_FBB_2021-01-01_mask-wcbl.nii.gz`: the fourth `_` token of
/// the stem, after its first `-`.
pub fn scrape_region(file: &str) -> Result<String> {
    let name = base_name(file.trim());
    let stem = name.split('.').next().unwrap_or(name);
    stem.split('_')
        .nth(3)
        .and_then(|token| token.split('-').nth(1))
        .map(str::to_string)
        .with_context(|| format!("no region label in '{}'", name))
}

fn scrape_ref_region(mask_field: &str) -> Result<String> {
    let masks: Vec<&str> = mask_field.split(';').filter(|m| !m.trim().is_empty()).collect();
    match masks.as_slice() {
        [] => bail!("empty mask_file"),
        [single] => scrape_region(single),
        _ => Ok(COMPOSITE_REGION.to_string()),
    }
}

pub fn parse_ref_region_means(path: &Path) -> Result<(Reshape, Vec<LongRecord>)> {
    let key = parse_scan_tag(&path.to_string_lossy())?;
    let table = csv_input::read_csv(path)?;
    let mask_idx = table.require("mask_file")?;
    let mean_idx = table.require("mean")?;

    let mut records = Vec::with_capacity(table.records.len());
    for (i, record) in table.records.iter().enumerate() {
        let region = scrape_ref_region(field(record, mask_idx))
            .with_context(|| format!("{}:{}", path.display(), i + 2))?;
        let mean = parse_number(field(record, mean_idx))
            .with_context(|| format!("{}:{}", path.display(), i + 2))?;
        records.push(LongRecord {
            key: key.clone(),
            region: normalize_region(&region),
            values: vec![mean],
        });
    }
    Ok((Reshape::new(["ScalingFactor"], NamingOrder::ValueFirst), records))
}

pub fn parse_roi_extractions(path: &Path) -> Result<(Reshape, Vec<LongRecord>)> {
    let table = csv_input::read_csv(path)?;
    let image_idx = table.require("image_file")?;
    let roi_idx = table.require("roi")?;
    let mean_idx = table.require("mean")?;
    let count_idx = table.require("voxel_count")?;

    let mut records = Vec::with_capacity(table.records.len());
    for (i, record) in table.records.iter().enumerate() {
        let at = || format!("{}:{}", path.display(), i + 2);
        // Image names carry a one-letter prefix ahead of the subject id.
        let image = base_name(field(record, image_idx));
        let tagged = image.get(1..).unwrap_or_default();
        let key = parse_scan_tag(tagged).with_context(at)?;
        let mean = parse_number(field(record, mean_idx)).with_context(at)?;
        let count = parse_number(field(record, count_idx)).with_context(at)?;
        records.push(LongRecord {
            key,
            region: normalize_region(field(record, roi_idx)),
            values: vec![mean, count],
        });
    }
    Ok((
        Reshape::new(["MRIBASED_SUVR", "ClustSize"], NamingOrder::RegionFirst),
        records,
    ))
}

const SUMMARY_INDEX_SKIP: &[&str] = &["image_file", "mask_file", "mean_suvr"];

pub fn parse_summary_index(path: &Path) -> Result<(Reshape, Vec<LongRecord>)> {
    let key = parse_scan_tag(&path.to_string_lossy())?;
    let table = csv_input::read_csv(path)?;
    let image_idx = table.require("image_file")?;
    let value_idx: Vec<(usize, String)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !SUMMARY_INDEX_SKIP.contains(&h.as_str()))
        .map(|(i, h)| (i, h.clone()))
        .collect();
    if value_idx.is_empty() {
        bail!("{} has no summary value columns", path.display());
    }

    let mut records = Vec::with_capacity(table.records.len());
    for (i, record) in table.records.iter().enumerate() {
        let at = || format!("{}:{}", path.display(), i + 2);
        let region = scrape_region(field(record, image_idx)).with_context(at)?;
        let mut values = Vec::with_capacity(value_idx.len());
        for (idx, _) in &value_idx {
            values.push(parse_number(field(record, *idx)).with_context(at)?);
        }
        records.push(LongRecord {
            key: key.clone(),
            region: normalize_region(&region),
            values,
        });
    }
    let reshape = Reshape::new(
        value_idx.into_iter().map(|(_, h)| h),
        NamingOrder::ValueFirst,
    );
    Ok((reshape, records))
}
