//! Temporal link records.
use super::{EntityId, Relation};

/// A directed labeled relation between two entities of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TLink {
    pub source: EntityId,
    pub target: EntityId,
    pub relation: Relation,
}

impl TLink {
    pub fn new(source: EntityId, target: EntityId, relation: Relation) -> Self {
        Self {
            source,
            target,
            relation,
        }
    }
}
