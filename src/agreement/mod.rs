/*! Inter-annotator consistency checking.

Works over a directory of annotation files named `document.annotator`, one
file per document per annotator, and the directory of original documents
(`document.tml`) whose pair sets are ground truth.

A run generates the pairwise comparison script, then makes three passes over
every annotator file: formatting repair (the only pass that writes), then
duplicate detection, then original-vs-annotator mismatch detection. Every
anomaly is logged; only I/O and unparseable pair lines abort the run.
!*/
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Error;

pub mod checks;
pub mod line;
pub mod repair;
pub mod script;

pub use line::LineFormat;
pub use repair::RepairOutcome;

/// Group annotation files by document: `document.annotator` file names
/// become a `document -> [annotator]` map.
///
/// Sorted on both levels so diagnostics and the generated script are
/// deterministic regardless of directory order.
pub fn group_by_document(anno_dir: &Path) -> Result<BTreeMap<String, Vec<String>>, Error> {
    let mut names = Vec::new();
    for entry in fs::read_dir(anno_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in names {
        match name.rsplit_once('.') {
            Some((doc, annotator)) if !doc.is_empty() => {
                groups
                    .entry(doc.to_string())
                    .or_default()
                    .push(annotator.to_string());
            }
            _ => warn!("ignoring file without document.annotator name: {}", name),
        }
    }
    Ok(groups)
}

/// Full consistency run. CLI entry point.
pub fn run(
    anno_dir: &Path,
    original_dir: &Path,
    agreement_out_dir: &Path,
    tool_path: &Path,
    script_path: &Path,
) -> Result<(), Error> {
    let groups = group_by_document(anno_dir)?;
    let format = LineFormat::new();

    // comparison script: one line per annotator pair per document
    let mut lines = Vec::new();
    for (doc, annotators) in &groups {
        if annotators.len() == 1 {
            warn!("{} was only annotated by {}", doc, annotators[0]);
            continue;
        }
        lines.extend(script::comparison_lines(
            tool_path,
            anno_dir,
            agreement_out_dir,
            doc,
            annotators,
        ));
    }
    script::write_script(script_path, &lines)?;
    info!("wrote {} comparison lines to {}", lines.len(), script_path.display());

    info!("checking annotation files for proper formatting");
    // files a human still has to fix are skipped by the later passes
    let mut manual: HashSet<PathBuf> = HashSet::new();
    for (doc, annotators) in &groups {
        for annotator in annotators {
            let path = anno_dir.join(format!("{}.{}", doc, annotator));
            match repair::repair_file(&path, &format)? {
                RepairOutcome::Clean => {}
                RepairOutcome::Repaired(n) => {
                    info!("{}.{}: normalized {} malformed lines", doc, annotator, n)
                }
                RepairOutcome::NeedsManualFix => {
                    warn!("{} needs to be fixed by {}", doc, annotator);
                    manual.insert(path);
                }
            }
        }
    }

    info!("checking annotation files for duplicate annotations");
    for (doc, annotators) in &groups {
        for annotator in annotators {
            let path = anno_dir.join(format!("{}.{}", doc, annotator));
            if manual.contains(&path) {
                continue;
            }
            for ((id1, id2), labels) in checks::find_duplicates(&path)? {
                warn!(
                    "pair ({}, {}) in {}.{} has annotations {:?}",
                    id1, id2, doc, annotator, labels
                );
            }
        }
    }

    info!("checking for omitted/added pairs against the original documents");
    for (doc, annotators) in &groups {
        let original = original_dir.join(format!("{}.tml", doc));
        for annotator in annotators {
            let path = anno_dir.join(format!("{}.{}", doc, annotator));
            if manual.contains(&path) {
                continue;
            }
            let diff = checks::mismatches(&path, &original)?;
            if !diff.missing.is_empty() {
                warn!("{}.{} is missing: {:?}", doc, annotator, diff.missing);
            }
            if !diff.added.is_empty() {
                warn!(
                    "{}.{} contains the extraneous pairs: {:?}",
                    doc, annotator, diff.added
                );
            }
        }
    }

    Ok(())
}
