//! Duplicate and mismatch detection over annotator files.
//!
//! Both checks are report-only: a pair annotated twice or a pair set that
//! disagrees with the original document needs a human, never an auto-fix.
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// An id pair as written in an annotation file.
pub type Pair = (String, String);

/// Split one line into its id pair, tolerating a malformed label field.
///
/// Pair extraction only needs the first two tab fields, matching what the
/// downstream agreement tool keys on.
fn pair_of(line: &str, path: &Path) -> Result<Pair, Error> {
    let mut fields = line.trim_end().split('\t');
    match (fields.next(), fields.next()) {
        (Some(id1), Some(id2)) if !id1.is_empty() && !id2.is_empty() => {
            Ok((id1.to_string(), id2.to_string()))
        }
        _ => Err(Error::Custom(format!(
            "line without id pair in {}: {:?}",
            path.display(),
            line
        ))),
    }
}

/// Pairs annotated more than once in one annotator's file, with every label
/// seen for them, both in encounter order.
pub fn find_duplicates(path: &Path) -> Result<Vec<(Pair, Vec<String>)>, Error> {
    let content = fs::read_to_string(path)?;

    // files are a few hundred lines at most, linear lookup keeps order
    let mut groups: Vec<(Pair, Vec<String>)> = Vec::new();
    for line in content.lines() {
        let pair = pair_of(line, path)?;
        let label = line
            .trim_end()
            .split('\t')
            .nth(2)
            .unwrap_or_default()
            .to_string();
        match groups.iter_mut().find(|(p, _)| *p == pair) {
            Some((_, labels)) => labels.push(label),
            None => groups.push((pair, vec![label])),
        }
    }

    Ok(groups
        .into_iter()
        .filter(|(_, labels)| labels.len() > 1)
        .collect())
}

/// The set of id pairs in one file.
pub fn pair_set(path: &Path) -> Result<HashSet<Pair>, Error> {
    let content = fs::read_to_string(path)?;
    content.lines().map(|line| pair_of(line, path)).collect()
}

/// Both directions of disagreement between an annotator file and the
/// original document's pair set.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Mismatch {
    /// In the original, dropped by the annotator.
    pub missing: Vec<Pair>,
    /// In the annotator file, absent from the original.
    pub added: Vec<Pair>,
}

impl Mismatch {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.added.is_empty()
    }
}

pub fn mismatches(anno_path: &Path, original_path: &Path) -> Result<Mismatch, Error> {
    let annotated = pair_set(anno_path)?;
    let original = pair_set(original_path)?;

    let mut missing: Vec<Pair> = original.difference(&annotated).cloned().collect();
    let mut added: Vec<Pair> = annotated.difference(&original).cloned().collect();
    missing.sort();
    added.sort();
    Ok(Mismatch { missing, added })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{find_duplicates, mismatches, pair_set};

    fn write_tmp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn duplicate_pair_reports_labels_in_encounter_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tmp(
            &dir,
            "doc.anno",
            "e1\te2\tb\ne3\te4\ts\ne1\te2\ta\n",
        );
        let dups = find_duplicates(&path).unwrap();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].0, ("e1".to_string(), "e2".to_string()));
        assert_eq!(dups[0].1, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn no_duplicates_means_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tmp(&dir, "doc.anno", "e1\te2\tb\ne2\te3\ta\n");
        assert!(find_duplicates(&path).unwrap().is_empty());
    }

    #[test]
    fn identical_sets_have_no_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let anno = write_tmp(&dir, "doc.anno", "e1\te2\tb\ne2\te3\ta\n");
        let orig = write_tmp(&dir, "doc.tml", "e2\te3\tv\ne1\te2\tb\n");
        let diff = mismatches(&anno, &orig).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn dropped_pair_shows_up_as_missing_only() {
        let dir = tempfile::tempdir().unwrap();
        let anno = write_tmp(&dir, "doc.anno", "e1\te2\tb\n");
        let orig = write_tmp(&dir, "doc.tml", "e1\te2\tb\ne2\te3\tv\n");
        let diff = mismatches(&anno, &orig).unwrap();
        assert_eq!(diff.missing, vec![("e2".to_string(), "e3".to_string())]);
        assert!(diff.added.is_empty());
    }

    #[test]
    fn extraneous_pair_shows_up_as_added() {
        let dir = tempfile::tempdir().unwrap();
        let anno = write_tmp(&dir, "doc.anno", "e1\te2\tb\ne7\te8\tv\n");
        let orig = write_tmp(&dir, "doc.tml", "e1\te2\tb\n");
        let diff = mismatches(&anno, &orig).unwrap();
        assert!(diff.missing.is_empty());
        assert_eq!(diff.added, vec![("e7".to_string(), "e8".to_string())]);
    }

    #[test]
    fn pair_set_ignores_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_tmp(&dir, "doc.anno", "e1\te2\tb\ne1\te2\ta\n");
        assert_eq!(pair_set(&path).unwrap().len(), 1);
    }
}
