//! Per-profile gold-label distributions.
//!
//! A profile names a subset of features. Examples are bucketed by the tuple
//! of those feature values; each bucket gets a row with the proportion of
//! every gold label and the bucket size.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Error;

use super::Example;

/// Column order of the distribution files.
const LABELS: [&str; 6] = [
    "VAGUE",
    "BEFORE",
    "AFTER",
    "INCLUDES",
    "IS_INCLUDED",
    "SIMULTANEOUS",
];

/// A named feature subset, read from a `name|f1 f2 ...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub features: Vec<String>,
}

pub fn read_profiles(path: &Path) -> Result<Vec<Profile>, Error> {
    let content = std::fs::read_to_string(path)?;
    let mut profiles = Vec::new();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let (name, features) = line.split_once('|').ok_or_else(|| {
            Error::Custom(format!("profile line without '|': {:?}", line))
        })?;
        profiles.push(Profile {
            name: name.trim().to_string(),
            features: features.split_whitespace().map(str::to_string).collect(),
        });
    }
    Ok(profiles)
}

fn label_index(label: &str) -> Result<usize, Error> {
    LABELS
        .iter()
        .position(|l| *l == label)
        .ok_or_else(|| Error::UnknownRelation(label.to_string()))
}

/// One output file per profile under `dst`, buckets in first-seen order.
pub fn write_distributions(
    dst: &Path,
    profiles: &[Profile],
    examples: &[Example],
) -> Result<(), Error> {
    for profile in profiles {
        // first-seen bucket order; profiles are small, linear lookup
        let mut buckets: Vec<(Vec<String>, [u64; 6])> = Vec::new();
        for example in examples {
            let key: Vec<String> = profile
                .features
                .iter()
                .map(|f| {
                    example.value(f).map(str::to_string).ok_or_else(|| {
                        Error::Custom(format!(
                            "example {} has no feature {}",
                            example.name, f
                        ))
                    })
                })
                .collect::<Result<_, _>>()?;
            let gold = label_index(example.gold()?)?;
            match buckets.iter_mut().find(|(k, _)| *k == key) {
                Some((_, counts)) => counts[gold] += 1,
                None => {
                    let mut counts = [0u64; 6];
                    counts[gold] = 1;
                    buckets.push((key, counts));
                }
            }
        }

        let mut out = File::create(dst.join(&profile.name))?;
        writeln!(
            out,
            "{}\t{}\tCount",
            profile.features.join("\t"),
            LABELS.join("\t")
        )?;
        for (key, counts) in buckets {
            let total: u64 = counts.iter().sum();
            write!(out, "{}", key.join("\t"))?;
            for count in counts {
                write!(out, "\t{}", count as f64 / total as f64)?;
            }
            writeln!(out, "\t{}", total)?;
        }
    }
    Ok(())
}
