//! Weka ARFF export.
//!
//! Every feature becomes a nominal attribute whose value set is the one
//! attested in the data. Values holding a quote or comma are quoted; empty
//! values become the ARFF missing marker `?`.
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Error;

use super::{columns, Example};

/// Quote a value if it would break the comma-separated ARFF syntax.
pub fn quote(value: &str) -> String {
    if value.contains('\'') || value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

pub fn write_arff(path: &Path, relation: &str, examples: &[Example]) -> Result<(), Error> {
    // attested value set per attribute, ordered for deterministic output
    let mut values: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for example in examples {
        for (key, value) in &example.features {
            values.entry(key).or_default().insert(quote(value));
        }
    }

    let mut out = File::create(path)?;
    writeln!(out, "@RELATION {}\n", relation)?;
    for col in columns(examples) {
        let set = values.get(col.as_str()).cloned().unwrap_or_default();
        writeln!(
            out,
            "@ATTRIBUTE {} {{{}}}",
            col,
            set.into_iter().collect::<Vec<_>>().join(",")
        )?;
    }

    writeln!(out, "\n@DATA")?;
    for example in examples {
        let row: Vec<String> = example
            .features
            .iter()
            .map(|(_, v)| if v.is_empty() { "?".to_string() } else { quote(v) })
            .collect();
        writeln!(out, "{}", row.join(","))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{quote, write_arff};
    use crate::spreadsheet::read_examples;

    #[test]
    fn quoting_special_values() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("it's"), "\"it's\"");
        assert_eq!(quote("a,b"), "\"a,b\"");
    }

    #[test]
    fn arff_layout() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("examples.txt");
        fs::write(
            &src,
            "set gold:BEFORE pos:VBD lemma:\nset gold:AFTER pos:NN lemma:it's\n",
        )
        .unwrap();
        let examples = read_examples(&src).unwrap();
        let dst = dir.path().join("out.arff");
        write_arff(&dst, "depstats", &examples).unwrap();

        let written = fs::read_to_string(&dst).unwrap();
        assert!(written.starts_with("@RELATION depstats\n\n"));
        assert!(written.contains("@ATTRIBUTE gold {AFTER,BEFORE}\n"));
        assert!(written.contains("@ATTRIBUTE pos {NN,VBD}\n"));
        // empty value is attested as-is but written as the missing marker
        assert!(written.contains("\n@DATA\nBEFORE,VBD,?\nAFTER,NN,\"it's\"\n"));
    }
}
