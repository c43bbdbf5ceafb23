use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::ReportError;

/// A reporting period such as `2024-Q2`.
///
/// PET data are reported at a one-quarter lag, so a period only includes
/// scans acquired up to the end of the previous calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: i32,
    pub quarter: u8,
}

impl ReportPeriod {
    pub fn new(year: i32, quarter: u8) -> Result<Self, ReportError> {
        if !(1..=4).contains(&quarter) {
            return Err(ReportError::InvalidPeriod(format!("{}-Q{}", year, quarter)));
        }
        Ok(Self { year, quarter })
    }

    /// Last acquisition date eligible for this period.
    pub fn stop_date(&self) -> NaiveDate {
        let (year, month, day) = match self.quarter {
            1 => (self.year - 1, 12, 31),
            2 => (self.year, 3, 31),
            3 => (self.year, 6, 30),
            _ => (self.year, 9, 30),
        };
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
    }
}

impl FromStr for ReportPeriod {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, ReportError> {
        let invalid = || ReportError::InvalidPeriod(s.to_string());
        let (year, quarter) = s.split_once("-Q").ok_or_else(invalid)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if quarter.len() != 1 || !quarter.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let quarter: u8 = quarter.parse().map_err(|_| invalid())?;
        Self::new(year, quarter).map_err(|_| invalid())
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-Q{}", self.year, self.quarter)
    }
}
