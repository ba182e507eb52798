//! Corpus flattening for external taggers.
//!
//! Writes one plain text file per corpus document, one sentence per line,
//! tokens joined by single spaces. Taggers that split on the space character
//! then reproduce the corpus tokenization exactly.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use regex::Regex;

use crate::corpus::CORPUS_NS;
use crate::error::Error;

/// Compiled pattern for the text of a `t` element: quoted fields, the last
/// one holding the surface token.
#[derive(Debug)]
pub struct TokenFormat {
    re: Regex,
}

impl Default for TokenFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFormat {
    pub fn new() -> Self {
        // literal pattern, compilation cannot fail
        let re = Regex::new(r#"^"\s*"\s+"(.*?)""#).unwrap();
        Self { re }
    }

    /// Surface token of one `t` element.
    pub fn token<'a>(&self, text: &'a str) -> Result<&'a str, Error> {
        self.re
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| Error::Custom(format!("malformed token text: {:?}", text)))
    }
}

/// Flatten the corpus at `src` into per-document token files under `dst`.
pub fn run(src: &Path, dst: &Path) -> Result<(), Error> {
    let xml = std::fs::read_to_string(src)?;
    let tree = roxmltree::Document::parse(&xml)?;
    let format = TokenFormat::new();

    for file in tree
        .root_element()
        .children()
        .filter(|n| n.has_tag_name((CORPUS_NS, "file")))
    {
        let name = file.attribute("name").ok_or(Error::MissingAttribute {
            element: "file",
            attribute: "name",
        })?;
        let mut out = File::create(dst.join(format!("{}.txt", name)))?;
        for tokens in file
            .descendants()
            .filter(|n| n.has_tag_name((CORPUS_NS, "tokens")))
        {
            let words: Vec<&str> = tokens
                .children()
                .filter(|n| n.has_tag_name((CORPUS_NS, "t")))
                .map(|t| format.token(t.text().unwrap_or("")))
                .collect::<Result<_, _>>()?;
            writeln!(out, "{}", words.join(" "))?;
        }
        info!("flattened {}", name);
    }
    Ok(())
}
