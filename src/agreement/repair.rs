//! Whole-file-or-nothing formatting repair.
//!
//! Each line must match the strict annotation pattern. Lines that do not are
//! normalized and re-checked; if every line ends up valid the file is
//! rewritten, otherwise nothing is written and the file is flagged for a
//! human. The rewrite goes through a temp file in the same directory and a
//! rename, so a crash mid-write cannot leave a half-repaired file.
use std::fs;
use std::path::Path;

use crate::error::Error;

use super::line::LineFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// Every line already matched; file untouched.
    Clean,
    /// File rewritten; this many lines were normalized.
    Repaired(usize),
    /// At least one line survives normalization malformed; file untouched.
    NeedsManualFix,
}

pub fn repair_file(path: &Path, format: &LineFormat) -> Result<RepairOutcome, Error> {
    let content = fs::read_to_string(path)?;

    let mut fixed = Vec::new();
    let mut repaired = 0;
    for line in content.lines() {
        if format.is_valid(line) {
            fixed.push(line.to_string());
            continue;
        }
        let normalized = format.normalize(line);
        if format.is_valid(&normalized) {
            fixed.push(normalized);
            repaired += 1;
        } else {
            return Ok(RepairOutcome::NeedsManualFix);
        }
    }

    if repaired == 0 {
        return Ok(RepairOutcome::Clean);
    }

    let mut out = fixed.join("\n");
    out.push('\n');
    let name = path
        .file_name()
        .ok_or_else(|| Error::Custom(format!("not a file path: {}", path.display())))?
        .to_string_lossy();
    let tmp = path.with_file_name(format!("{}.tmp", name));
    fs::write(&tmp, out)?;
    fs::rename(&tmp, path)?;
    Ok(RepairOutcome::Repaired(repaired))
}
