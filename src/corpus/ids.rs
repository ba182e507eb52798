//! Composite identifiers.
//!
//! Entity and sentence ids are only unique within one document, so every
//! lookup key pairs the document name with the local id. Display joins the
//! two with `|`, which is the shape reports use.
use std::fmt;

/// Identifies one event or timex mention: document name + local id
/// (`eiid`/`tid` attribute).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId {
    pub doc: String,
    pub local: String,
}

impl EntityId {
    pub fn new(doc: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            doc: doc.into(),
            local: local.into(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.doc, self.local)
    }
}

/// Identifies one sentence: document name + position in the document.
///
/// The index is numeric so previous/next context is index arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SentenceId {
    pub doc: String,
    pub index: usize,
}

impl SentenceId {
    pub fn new(doc: impl Into<String>, index: usize) -> Self {
        Self {
            doc: doc.into(),
            index,
        }
    }

    /// Id of the preceding sentence, `None` at the start of the document.
    pub fn previous(&self) -> Option<SentenceId> {
        self.index
            .checked_sub(1)
            .map(|index| SentenceId::new(self.doc.clone(), index))
    }

    /// Id of the following sentence. Existence is up to the caller: the
    /// parser never records how many sentences a document has.
    pub fn next(&self) -> SentenceId {
        SentenceId::new(self.doc.clone(), self.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityId, SentenceId};

    #[test]
    fn entity_display_keeps_pipe_shape() {
        let id = EntityId::new("wsj_0026", "ei5");
        assert_eq!(id.to_string(), "wsj_0026|ei5");
    }

    #[test]
    fn first_sentence_has_no_previous() {
        let sid = SentenceId::new("doc", 0);
        assert!(sid.previous().is_none());
        assert_eq!(sid.next(), SentenceId::new("doc", 1));
        assert_eq!(SentenceId::new("doc", 3).previous(), Some(SentenceId::new("doc", 2)));
    }
}
