use crate::replacement::Replacer;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of rewriting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    Updated,
    Unchanged,
    /// Listed but no longer on disk
    Missing,
    /// Not valid UTF-8, treated as binary
    Binary,
}

/// Tally of a content pass over many files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentReport {
    pub files_scanned: usize,
    pub updated: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Rewrite one file with `replacer`. The file is written only when its text
/// actually changes, so untouched files keep their modification time.
pub fn apply_to_file(path: &Path, replacer: &Replacer) -> Result<FileOutcome> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileOutcome::Missing),
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    let Ok(original) = String::from_utf8(bytes) else {
        debug!("Skipping non-UTF-8 file {}", path.display());
        return Ok(FileOutcome::Binary);
    };

    let changed = replacer.replace(&original);
    if changed == original {
        return Ok(FileOutcome::Unchanged);
    }

    fs::write(path, changed).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(FileOutcome::Updated)
}

/// Rewrite every file in order, printing `Updated: <path>` for each change.
///
/// There is no rollback: an error leaves earlier files rewritten.
pub fn apply_to_files<W: Write>(
    files: &[PathBuf],
    replacer: &Replacer,
    out: &mut W,
) -> Result<ContentReport> {
    let mut report = ContentReport::default();

    for file in files {
        match apply_to_file(file, replacer)? {
            FileOutcome::Updated => {
                writeln!(out, "  Updated: {}", file.display())?;
                report.updated.push(file.clone());
            },
            FileOutcome::Unchanged => {},
            FileOutcome::Missing => continue,
            FileOutcome::Binary => report.skipped.push(file.clone()),
        }
        report.files_scanned += 1;
    }

    Ok(report)
}
