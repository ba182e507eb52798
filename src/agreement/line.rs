//! Annotation line format.
//!
//! A well-formed line is `id TAB id TAB code`, ids `e`/`t`-prefixed numbers,
//! code one of the six short relation codes. Validation and normalization
//! are separate stages so repair can be expressed as
//! `valid(l) || valid(normalize(l))`.
use regex::Regex;

use crate::corpus::Relation;
use crate::error::Error;

/// One parsed annotator judgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationLine {
    pub id1: String,
    pub id2: String,
    pub code: Relation,
}

/// Compiled annotation line pattern. Built once per run and passed down;
/// never a module global.
#[derive(Debug)]
pub struct LineFormat {
    re: Regex,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFormat {
    pub fn new() -> Self {
        // literal pattern, compilation cannot fail
        let re = Regex::new(r"^[et]\d+\t[et]\d+\t(b|a|i|ii|s|v)$").unwrap();
        Self { re }
    }

    /// Does `line` (without trailing newline) match the strict pattern?
    pub fn is_valid(&self, line: &str) -> bool {
        self.re.is_match(line)
    }

    /// Collapse every whitespace run to a single tab.
    ///
    /// Idempotent: a normalized line normalizes to itself.
    pub fn normalize(&self, line: &str) -> String {
        line.split_whitespace().collect::<Vec<_>>().join("\t")
    }

    /// Parse a well-formed line into its fields.
    pub fn parse(&self, line: &str) -> Result<AnnotationLine, Error> {
        if !self.is_valid(line) {
            return Err(Error::Custom(format!("malformed annotation line: {:?}", line)));
        }
        let mut fields = line.split('\t');
        // the pattern guarantees exactly three fields
        let id1 = fields.next().unwrap_or_default().to_string();
        let id2 = fields.next().unwrap_or_default().to_string();
        let code = Relation::from_code(fields.next().unwrap_or_default())?;
        Ok(AnnotationLine { id1, id2, code })
    }
}
