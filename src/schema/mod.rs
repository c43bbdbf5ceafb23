//! Per-tracer export layouts.
//!
//! Each layout is pure data: the columns dropped, renamed, inserted as
//! placeholders or nulled out, plus the literal external column order.
//! The order is the published contract of the quarterly report.

pub mod fbb;
pub mod fdg;
pub mod format;
pub mod ftp;

use crate::tracer::Tracer;

#[derive(Debug, Clone, Copy)]
pub struct ExportSchema {
    /// Internal and QC bookkeeping columns removed before renaming.
    pub drop: &'static [&'static str],
    /// Internal name to external name.
    pub rename: &'static [(&'static str, &'static str)],
    /// Columns published but not yet populated; always null.
    pub placeholders: &'static [&'static str],
    /// Columns of a retired measurement convention; always null.
    pub retired: &'static [&'static str],
    /// Nominally numeric columns written as integer strings.
    pub flag_columns: &'static [&'static str],
    pub date_column: &'static str,
    pub columns: &'static [&'static str],
}

pub fn schema_for(tracer: Tracer) -> &'static ExportSchema {
    match tracer {
        Tracer::Fbb => &fbb::FBB,
        Tracer::Ftp => &ftp::FTP,
        Tracer::Fdg => &fdg::FDG,
    }
}
