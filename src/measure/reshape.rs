//! Long-to-wide pivot of per-region measurements.
//!
//! A long record is one (scan, region) pair with one value per value
//! column. A wide row holds every region observed for a scan, with one
//! column per (value column, region) pair named by a fixed convention.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

use crate::table::ScanKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingOrder {
    /// `{value}_{region}`, e.g. `ScalingFactor_wcbl`.
    ValueFirst,
    /// `{region}_{value}`, e.g. `Left_Caudate_MRIBASED_SUVR`.
    RegionFirst,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub key: ScanKey,
    pub region: String,
    /// Aligned with [`Reshape::value_columns`].
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub key: ScanKey,
    pub columns: Vec<(String, Option<f64>)>,
}

impl WideRow {
    pub fn get(&self, column: &str) -> Option<Option<f64>> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| *v)
    }
}

/// Region labels use `_` as their only separator so the same region
/// yields the same column name regardless of source.
pub fn normalize_region(name: &str) -> String {
    name.trim().replace('-', "_")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reshape {
    pub value_columns: Vec<String>,
    pub naming: NamingOrder,
}

impl Reshape {
    pub fn new<S: Into<String>>(value_columns: impl IntoIterator<Item = S>, naming: NamingOrder) -> Self {
        Self {
            value_columns: value_columns.into_iter().map(Into::into).collect(),
            naming,
        }
    }

    pub fn column_name(&self, value: &str, region: &str) -> String {
        match self.naming {
            NamingOrder::ValueFirst => format!("{}_{}", value, region),
            NamingOrder::RegionFirst => format!("{}_{}", region, value),
        }
    }

    /// Splits a wide column back into (value column index, region).
    pub fn split_column<'c>(&self, column: &'c str) -> Option<(usize, &'c str)> {
        self.value_columns.iter().enumerate().find_map(|(idx, value)| {
            let region = match self.naming {
                NamingOrder::ValueFirst => column
                    .strip_prefix(value.as_str())
                    .and_then(|rest| rest.strip_prefix('_')),
                NamingOrder::RegionFirst => column
                    .strip_suffix(value.as_str())
                    .and_then(|rest| rest.strip_suffix('_')),
            }?;
            (!region.is_empty()).then_some((idx, region))
        })
    }

    /// One wide row per scan, sorted by scan key. Columns are grouped by
    /// value column, regions in order of first appearance for that scan.
    /// A region listed twice for one scan is an error.
    pub fn pivot_wider(&self, records: &[LongRecord]) -> Result<Vec<WideRow>> {
        let mut grouped: BTreeMap<&ScanKey, Vec<&LongRecord>> = BTreeMap::new();
        for record in records {
            if record.values.len() != self.value_columns.len() {
                bail!(
                    "{} region {} has {} values, expected {}",
                    record.key,
                    record.region,
                    record.values.len(),
                    self.value_columns.len()
                );
            }
            let group = grouped.entry(&record.key).or_default();
            if group.iter().any(|r| r.region == record.region) {
                bail!("{} lists region {} more than once", record.key, record.region);
            }
            group.push(record);
        }

        let mut out = Vec::with_capacity(grouped.len());
        for (key, group) in grouped {
            let mut columns = Vec::with_capacity(group.len() * self.value_columns.len());
            for (idx, value) in self.value_columns.iter().enumerate() {
                for record in &group {
                    columns.push((self.column_name(value, &record.region), record.values[idx]));
                }
            }
            out.push(WideRow {
                key: key.clone(),
                columns,
            });
        }
        Ok(out)
    }

    /// Inverse of [`Reshape::pivot_wider`].
    pub fn pivot_longer(&self, rows: &[WideRow]) -> Result<Vec<LongRecord>> {
        let mut out = Vec::new();
        for row in rows {
            let mut regions: Vec<LongRecord> = Vec::new();
            for (column, value) in &row.columns {
                let Some((idx, region)) = self.split_column(column) else {
                    bail!("column {} does not follow the {:?} naming", column, self.naming);
                };
                let pos = match regions.iter().position(|r| r.region == region) {
                    Some(pos) => pos,
                    None => {
                        regions.push(LongRecord {
                            key: row.key.clone(),
                            region: region.to_string(),
                            values: vec![None; self.value_columns.len()],
                        });
                        regions.len() - 1
                    }
                };
                regions[pos].values[idx] = *value;
            }
            out.extend(regions);
        }
        Ok(out)
    }
}
