/*! Corpus data model and XML parsing.

A corpus file is a single XML document: a root holding `file` elements, each
`file` holding per-sentence `entry` elements (sentence text plus the `event`
and `timex` mentions it contains) and the document's `tlink` list. The whole
tree is materialized, walked once, and the resulting [Corpus] is immutable.

Malformed XML, missing attributes, unknown relation labels and non-numeric
sentence ids are all fatal: the parse returns an error and no partial corpus.
!*/
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::warn;
use roxmltree::Node;

use crate::error::Error;

mod ids;
mod relation;
mod tlink;

pub use ids::{EntityId, SentenceId};
pub use relation::{Relation, RELATIONS};
pub use tlink::TLink;

/// Element namespace of the corpus dialect.
pub const CORPUS_NS: &str = "http://chambers.com/corpusinfo";

/// A parsed corpus: entity and sentence tables plus the tlink list in
/// document order.
#[derive(Debug, Default)]
pub struct Corpus {
    entity_text: HashMap<EntityId, String>,
    entity_sentence: HashMap<EntityId, SentenceId>,
    sentences: HashMap<SentenceId, String>,
    tlinks: Vec<TLink>,
}

fn attr<'a>(
    node: &Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str, Error> {
    node.attribute(attribute)
        .ok_or(Error::MissingAttribute { element, attribute })
}

impl Corpus {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let xml = fs::read_to_string(path)?;
        Self::from_xml(&xml)
    }

    pub fn from_xml(xml: &str) -> Result<Self, Error> {
        let tree = roxmltree::Document::parse(xml)?;
        let mut corpus = Corpus::default();

        for entry in tree
            .root_element()
            .descendants()
            .filter(|n| n.has_tag_name((CORPUS_NS, "entry")))
        {
            corpus.read_entry(&entry)?;
        }

        for file in tree
            .root_element()
            .descendants()
            .filter(|n| n.has_tag_name((CORPUS_NS, "file")))
        {
            let doc = attr(&file, "file", "name")?;
            for tlink in file
                .descendants()
                .filter(|n| n.has_tag_name((CORPUS_NS, "tlink")))
            {
                corpus.read_tlink(&tlink, doc)?;
            }
        }

        Ok(corpus)
    }

    /// Record one `entry`: its sentence text and the mentions it carries.
    fn read_entry(&mut self, entry: &Node) -> Result<(), Error> {
        let doc = attr(entry, "entry", "file")?;
        let index: usize = attr(entry, "entry", "sid")?.parse()?;
        let sid = SentenceId::new(doc, index);

        // The format guarantees one sentence per entry; more than one is a
        // corpus bug worth flagging. Last one wins.
        let mut sentence = None;
        let mut count = 0;
        for node in entry
            .descendants()
            .filter(|n| n.has_tag_name((CORPUS_NS, "sentence")))
        {
            sentence = Some(node.text().unwrap_or("").to_string());
            count += 1;
        }
        if count > 1 {
            warn!("more than one sentence in entry {}:{}", doc, index);
        }
        let sentence = sentence.ok_or(Error::MissingAttribute {
            element: "entry",
            attribute: "sentence",
        })?;
        self.sentences.insert(sid.clone(), sentence);

        for event in entry
            .descendants()
            .filter(|n| n.has_tag_name((CORPUS_NS, "event")))
        {
            let id = EntityId::new(doc, attr(&event, "event", "eiid")?);
            let text = attr(&event, "event", "string")?;
            self.entity_text.insert(id.clone(), text.to_string());
            self.entity_sentence.insert(id, sid.clone());
        }
        for timex in entry
            .descendants()
            .filter(|n| n.has_tag_name((CORPUS_NS, "timex")))
        {
            let id = EntityId::new(doc, attr(&timex, "timex", "tid")?);
            let text = attr(&timex, "timex", "text")?;
            self.entity_text.insert(id.clone(), text.to_string());
            self.entity_sentence.insert(id, sid.clone());
        }

        Ok(())
    }

    fn read_tlink(&mut self, tlink: &Node, doc: &str) -> Result<(), Error> {
        let source = EntityId::new(doc, attr(tlink, "tlink", "event1")?);
        let target = EntityId::new(doc, attr(tlink, "tlink", "event2")?);
        let relation: Relation = attr(tlink, "tlink", "relation")?.parse()?;
        self.tlinks.push(TLink::new(source, target, relation));
        Ok(())
    }

    /// Tlinks in document order.
    pub fn tlinks(&self) -> &[TLink] {
        &self.tlinks
    }

    /// Surface text of an entity.
    pub fn entity_text(&self, id: &EntityId) -> Option<&str> {
        self.entity_text.get(id).map(String::as_str)
    }

    /// Id of the sentence containing an entity.
    pub fn sentence_of(&self, id: &EntityId) -> Option<&SentenceId> {
        self.entity_sentence.get(id)
    }

    /// Text of a sentence.
    pub fn sentence_text(&self, sid: &SentenceId) -> Option<&str> {
        self.sentences.get(sid).map(String::as_str)
    }
}
