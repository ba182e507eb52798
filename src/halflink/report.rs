//! Label-bucketed half-link reports.
//!
//! One output file per relation label, holding the context block of every
//! entity whose half-link count for that label exceeds the threshold,
//! most frequent first.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::corpus::{Corpus, RELATIONS};
use crate::error::Error;
use crate::halflink::{context, HalfLinks};

/// Write the six per-label report files into `dst`.
pub fn write_reports(corpus: &Corpus, dst: &Path, threshold: u64) -> Result<(), Error> {
    let halflinks = HalfLinks::extract(corpus)?;
    let counts = halflinks.counts();

    for relation in RELATIONS {
        let path = dst.join(format!("{}_{}.txt", relation, threshold));
        let mut out = File::create(&path)?;
        let mut written = 0;
        for (link, count) in &counts {
            if link.relation == relation && *count > threshold {
                let block = context::render(corpus, &halflinks, &link.entity)?;
                write!(out, "{}\n\n", block)?;
                written += 1;
            }
        }
        info!("{}: {} entities above threshold {}", relation, written, threshold);
    }
    Ok(())
}

/// Parse the corpus at `src` and write the reports. CLI entry point.
pub fn run(src: &Path, dst: &Path, threshold: u64) -> Result<(), Error> {
    let corpus = Corpus::from_path(src)?;
    write_reports(&corpus, dst, threshold)
}

#[cfg(test)]
mod tests {
    use super::write_reports;
    use crate::corpus::Corpus;

    const CORPUS: &str = r#"<?xml version="1.0"?>
<corpus xmlns="http://chambers.com/corpusinfo">
  <file name="doc1">
    <entry file="doc1" sid="0">
      <sentence>One event.</sentence>
      <event eiid="e1" string="said"/>
      <event eiid="e2" string="went"/>
    </entry>
    <tlink event1="e1" event2="e2" relation="BEFORE"/>
  </file>
</corpus>
"#;

    #[test]
    fn threshold_zero_includes_each_endpoint_once() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = Corpus::from_xml(CORPUS).unwrap();
        write_reports(&corpus, dir.path(), 0).unwrap();

        let before = std::fs::read_to_string(dir.path().join("BEFORE_0.txt")).unwrap();
        assert_eq!(before.matches("doc1|e1(entity text: said)").count(), 1);
        assert!(!before.contains("doc1|e2"));

        let after = std::fs::read_to_string(dir.path().join("AFTER_0.txt")).unwrap();
        assert_eq!(after.matches("doc1|e2(entity text: went)").count(), 1);

        // single occurrences fall below a threshold of 1
        write_reports(&corpus, dir.path(), 1).unwrap();
        let before = std::fs::read_to_string(dir.path().join("BEFORE_1.txt")).unwrap();
        assert!(before.is_empty());
        let vague = std::fs::read_to_string(dir.path().join("VAGUE_1.txt")).unwrap();
        assert!(vague.is_empty());
    }
}
