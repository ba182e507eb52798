/*! Feature-example file conversions.

The input is one example per line: a feature-set name followed by
whitespace-separated `feature:value` items, one of which is `gold:<LABEL>`.
Conversions: an all-cases tab-separated dump, per-profile gold-label
distributions, and a Weka ARFF export. Each output is optional and selected
on the command line.
!*/
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;

pub mod profile;
pub mod weka;

/// One example line: its name and its `feature -> value` items in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub name: String,
    pub features: Vec<(String, String)>,
}

impl Example {
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut items = line.split_whitespace();
        let name = items
            .next()
            .ok_or_else(|| Error::Custom("empty example line".to_string()))?
            .to_string();
        let mut features = Vec::new();
        for item in items {
            let (key, value) = item.split_once(':').ok_or_else(|| {
                Error::Custom(format!("feature item without colon: {:?}", item))
            })?;
            features.push((key.to_string(), value.to_string()));
        }
        Ok(Example { name, features })
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.features
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The gold label item every example must carry.
    pub fn gold(&self) -> Result<&str, Error> {
        self.value("gold")
            .ok_or_else(|| Error::Custom(format!("example {} has no gold label", self.name)))
    }
}

/// Read the whole examples file.
pub fn read_examples(path: &Path) -> Result<Vec<Example>, Error> {
    let content = fs::read_to_string(path)?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Example::parse)
        .collect()
}

/// Feature names, taken from the first example.
pub fn columns(examples: &[Example]) -> Vec<String> {
    examples
        .first()
        .map(|e| e.features.iter().map(|(k, _)| k.clone()).collect())
        .unwrap_or_default()
}

/// Tab-separated dump of every example: header of feature names, then one
/// row of values per example.
pub fn write_all_cases(path: &Path, examples: &[Example]) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;
    out.write_record(columns(examples))?;
    for example in examples {
        out.write_record(example.features.iter().map(|(_, v)| v.as_str()))?;
    }
    out.flush()?;
    Ok(())
}

/// Outputs requested for one spreadsheet run.
#[derive(Debug, Default)]
pub struct Outputs {
    pub all_cases: Option<PathBuf>,
    pub profiles: Option<PathBuf>,
    pub profiles_out: Option<PathBuf>,
    pub weka: Option<PathBuf>,
}

/// Run the selected conversions. CLI entry point.
pub fn run(examples_path: &Path, outputs: &Outputs) -> Result<(), Error> {
    let examples = read_examples(examples_path)?;
    info!("read {} examples", examples.len());

    if let Some(path) = &outputs.all_cases {
        write_all_cases(path, &examples)?;
    }
    if let (Some(profiles_path), Some(dst)) = (&outputs.profiles, &outputs.profiles_out) {
        let profiles = profile::read_profiles(profiles_path)?;
        profile::write_distributions(dst, &profiles, &examples)?;
    }
    if let Some(path) = &outputs.weka {
        weka::write_arff(path, "depstats", &examples)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{columns, read_examples, write_all_cases, Example};

    #[test]
    fn parses_feature_items() {
        let ex = Example::parse("wordpair gold:BEFORE pos1:VBD pos2:NN dist:2").unwrap();
        assert_eq!(ex.name, "wordpair");
        assert_eq!(ex.value("pos1"), Some("VBD"));
        assert_eq!(ex.value("dist"), Some("2"));
        assert_eq!(ex.gold().unwrap(), "BEFORE");
        assert_eq!(ex.value("missing"), None);
    }

    #[test]
    fn empty_value_is_kept() {
        let ex = Example::parse("set gold:VAGUE lemma:").unwrap();
        assert_eq!(ex.value("lemma"), Some(""));
    }

    #[test]
    fn item_without_colon_is_fatal() {
        assert!(Example::parse("set gold:VAGUE broken").is_err());
    }

    #[test]
    fn all_cases_is_tab_separated() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("examples.txt");
        fs::write(
            &src,
            "set gold:BEFORE pos:VBD\nset gold:AFTER pos:NN\n",
        )
        .unwrap();
        let examples = read_examples(&src).unwrap();
        assert_eq!(columns(&examples), vec!["gold", "pos"]);

        let dst = dir.path().join("all.tsv");
        write_all_cases(&dst, &examples).unwrap();
        let written = fs::read_to_string(&dst).unwrap();
        assert_eq!(written, "gold\tpos\nBEFORE\tVBD\nAFTER\tNN\n");
    }
}
