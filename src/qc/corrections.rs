use anyhow::Result;
use chrono::NaiveDate;

use crate::qc::QcSource;
use crate::table::parse_date;
use crate::tracer::Tracer;

/// A scan date recorded differently by a QC source than by our scan index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCorrection {
    pub source: QcSource,
    pub tracer: Tracer,
    pub subject_id: &'static str,
    pub recorded: &'static str,
    pub corrected: &'static str,
}

pub const KNOWN_DATE_CORRECTIONS: &[DateCorrection] = &[
    DateCorrection {
        source: QcSource::Umich,
        tracer: Tracer::Ftp,
        subject_id: "LDS0360283",
        recorded: "2020-11-11",
        corrected: "2020-11-12",
    },
    DateCorrection {
        source: QcSource::Umich,
        tracer: Tracer::Ftp,
        subject_id: "LDS0370672",
        recorded: "2023-09-13",
        corrected: "2023-09-14",
    },
    DateCorrection {
        source: QcSource::Umich,
        tracer: Tracer::Fdg,
        subject_id: "LDS0370012",
        recorded: "2020-12-17",
        corrected: "2020-12-15",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionTable {
    entries: Vec<(QcSource, Tracer, String, NaiveDate, NaiveDate)>,
}

impl CorrectionTable {
    pub fn new(corrections: &[DateCorrection]) -> Result<Self> {
        let mut entries = Vec::with_capacity(corrections.len());
        for c in corrections {
            entries.push((
                c.source,
                c.tracer,
                c.subject_id.to_string(),
                parse_date(c.recorded)?,
                parse_date(c.corrected)?,
            ));
        }
        Ok(Self { entries })
    }

    pub fn known() -> Result<Self> {
        Self::new(KNOWN_DATE_CORRECTIONS)
    }

    pub fn lookup(
        &self,
        source: QcSource,
        tracer: Tracer,
        subject_id: &str,
        recorded: NaiveDate,
    ) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|(s, t, subj, rec, _)| {
                *s == source && *t == tracer && subj == subject_id && *rec == recorded
            })
            .map(|(_, _, _, _, corrected)| *corrected)
    }

    /// Rewrites dates in place and returns how many were changed.
    pub fn apply<T: DatedRecord>(&self, source: QcSource, tracer: Tracer, rows: &mut [T]) -> usize {
        let mut changed = 0;
        for row in rows.iter_mut() {
            if let Some(corrected) = self.lookup(source, tracer, row.subject_id(), row.date()) {
                row.set_date(corrected);
                changed += 1;
            }
        }
        changed
    }
}

/// A QC row keyed by subject and scan date.
pub trait DatedRecord {
    fn subject_id(&self) -> &str;
    fn date(&self) -> NaiveDate;
    fn set_date(&mut self, date: NaiveDate);
}
