use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

use crate::error::ReportError;

fn glob_in(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );
    let mut out = Vec::new();
    for entry in glob::glob(&full).with_context(|| format!("bad glob pattern {}", full))? {
        let path = entry.with_context(|| format!("failed to read match for {}", full))?;
        if path.is_file() {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn not_found(dir: &Path, pattern: &str) -> anyhow::Error {
    ReportError::NotFound {
        pattern: dir.join(pattern).display().to_string(),
    }
    .into()
}

/// Most recently modified file matching `pattern` in `dir`.
/// Ties go to the lexicographically last name.
pub fn latest_by_mtime(dir: &Path, pattern: &str) -> Result<PathBuf> {
    let mut best: Option<(SystemTime, PathBuf)> = None;
    for path in glob_in(dir, pattern)? {
        let mtime = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .with_context(|| format!("failed to stat {}", path.display()))?;
        match &best {
            Some((t, _)) if *t > mtime => {}
            _ => best = Some((mtime, path)),
        }
    }
    best.map(|(_, p)| p).ok_or_else(|| not_found(dir, pattern))
}

/// Lexicographically last file matching `pattern`; used for exports that
/// carry a sortable timestamp in their name.
pub fn last_by_name(dir: &Path, pattern: &str) -> Result<PathBuf> {
    glob_in(dir, pattern)?
        .pop()
        .ok_or_else(|| not_found(dir, pattern))
}
