//! Human-readable context blocks for single entities.
//!
//! A block shows the entity, its sentence with one sentence of context on
//! each side, and every tlink touching it. Start and end of document get
//! explicit `(NONE)` markers instead of context sentences.
use std::fmt::Write;

use crate::corpus::{Corpus, EntityId};
use crate::error::Error;
use crate::halflink::HalfLinks;

/// Render the context block for `entity`.
///
/// Unknown entity ids and holes in the sentence table are fatal; only the
/// document boundaries are expected lookup misses.
pub fn render(corpus: &Corpus, halflinks: &HalfLinks, entity: &EntityId) -> Result<String, Error> {
    let text = corpus
        .entity_text(entity)
        .ok_or_else(|| Error::DanglingEntity(entity.clone()))?;
    let sid = corpus
        .sentence_of(entity)
        .ok_or_else(|| Error::DanglingEntity(entity.clone()))?;

    let mut out = String::new();
    writeln!(out, "{}(entity text: {})", entity, text).ok();
    out.push('\n');

    match sid.previous() {
        Some(prev) => {
            let prev_text = corpus
                .sentence_text(&prev)
                .ok_or_else(|| Error::Custom(format!("missing sentence {}:{}", prev.doc, prev.index)))?;
            out.push_str("### Previous Sentence: ");
            out.push_str(prev_text);
            out.push_str("\n\n");
        }
        None => out.push_str("### Previous Sentence: (NONE) \n\n"),
    }

    out.push_str("### Sentence with entity: ");
    // the entity's own sentence always exists once the entity resolved
    out.push_str(corpus.sentence_text(sid).unwrap_or(""));
    out.push_str("\n\n");

    match corpus.sentence_text(&sid.next()) {
        Some(next_text) => {
            out.push_str("### Following Sentence: ");
            out.push_str(next_text);
            out.push_str("\n\n");
        }
        None => out.push_str("### Following Sentence: (NONE) \n\n"),
    }

    writeln!(out, "TLinks: {}", entity.local).ok();
    for (other, relation) in halflinks.tlinks_of(entity) {
        let other_text = corpus
            .entity_text(other)
            .ok_or_else(|| Error::DanglingEntity(other.clone()))?;
        writeln!(out, "\t{}\t{}(event text: {})", relation, other.local, other_text).ok();
    }

    Ok(out)
}
