use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::Serialize;

/// PET tracer class. Each class is reported in its own export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tracer {
    Fbb,
    Ftp,
    Fdg,
}

impl Tracer {
    pub const ALL: [Tracer; 3] = [Tracer::Fbb, Tracer::Ftp, Tracer::Fdg];

    /// Tag as written in the scan index and in processed file names.
    pub fn tag(self) -> &'static str {
        match self {
            Tracer::Fbb => "FBB",
            Tracer::Ftp => "FTP",
            Tracer::Fdg => "FDG",
        }
    }

    /// Reference region the regional SUVRs are normalized to.
    pub fn ref_region(self) -> &'static str {
        match self {
            Tracer::Fbb => "wcbl",
            Tracer::Ftp => "infcblgm",
            Tracer::Fdg => "pons",
        }
    }

    /// Only amyloid scans carry the cortical summary (Centiloid) table
    /// and the full screening record.
    pub fn has_summary_index(self) -> bool {
        matches!(self, Tracer::Fbb)
    }
}

impl fmt::Display for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Tracer {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "FBB" => Ok(Tracer::Fbb),
            "FTP" => Ok(Tracer::Ftp),
            "FDG" => Ok(Tracer::Fdg),
            other => bail!("unknown tracer tag '{}'", other),
        }
    }
}
