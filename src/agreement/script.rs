//! Pairwise comparison script generation.
//!
//! The agreement scoring itself is an external Perl tool; this module only
//! emits one invocation line per unordered annotator pair per document.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Error;

/// Lines comparing every unordered annotator pair of one document.
///
/// Pair order follows the annotator list, index pairs with `a1 < a2` only,
/// so no reflexive or duplicated comparisons.
pub fn comparison_lines(
    tool: &Path,
    anno_dir: &Path,
    out_dir: &Path,
    doc: &str,
    annotators: &[String],
) -> Vec<String> {
    let mut lines = Vec::new();
    for a1 in 0..annotators.len() {
        for a2 in (a1 + 1)..annotators.len() {
            let file1 = anno_dir.join(format!("{}.{}", doc, annotators[a1]));
            let file2 = anno_dir.join(format!("{}.{}", doc, annotators[a2]));
            let out = out_dir.join(format!("{}.{}.{}", doc, annotators[a1], annotators[a2]));
            lines.push(format!(
                "perl {} {} {} > {};\n",
                tool.display(),
                file1.display(),
                file2.display(),
                out.display()
            ));
        }
    }
    lines
}

pub fn write_script(path: &Path, lines: &[String]) -> Result<(), Error> {
    let mut out = File::create(path)?;
    for line in lines {
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::comparison_lines;

    #[test]
    fn three_annotators_give_three_pairs() {
        let annotators = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let lines = comparison_lines(
            Path::new("agree.pl"),
            Path::new("anno"),
            Path::new("out"),
            "doc1",
            &annotators,
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "perl agree.pl anno/doc1.x anno/doc1.y > out/doc1.x.y;\n"
        );
        assert_eq!(
            lines[1],
            "perl agree.pl anno/doc1.x anno/doc1.z > out/doc1.x.z;\n"
        );
        assert_eq!(
            lines[2],
            "perl agree.pl anno/doc1.y anno/doc1.z > out/doc1.y.z;\n"
        );
    }

    #[test]
    fn single_annotator_gives_nothing() {
        let lines = comparison_lines(
            Path::new("agree.pl"),
            Path::new("anno"),
            Path::new("out"),
            "doc1",
            &["x".to_string()],
        );
        assert!(lines.is_empty());
    }
}
