/*! Half-link extraction and counting.

A half-link is one entity's view of a tlink: the pair `(entity, label)` where
the label is already inverted for the target-side endpoint. Every tlink
`(e1, e2, L)` expands to `(e1, L)` and `(e2, inverse(L))`, so the half-link
list is always twice as long as the tlink list.

Counting is a plain tally over that list. Consumers get the counts ranked by
descending frequency; ties keep first-seen order, which carries no meaning
beyond being stable.
!*/
use std::collections::HashMap;

use itertools::Itertools;

use crate::corpus::{Corpus, EntityId, Relation};
use crate::error::Error;

pub mod context;
pub mod report;

/// One entity's perspective-adjusted view of a single tlink.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HalfLink {
    pub entity: EntityId,
    pub relation: Relation,
}

/// All half-links of a corpus, plus the per-entity tlink index.
#[derive(Debug, Default)]
pub struct HalfLinks {
    links: Vec<HalfLink>,
    by_entity: HashMap<EntityId, Vec<(EntityId, Relation)>>,
}

impl HalfLinks {
    /// Expand every tlink of the corpus into its two half-links.
    ///
    /// A tlink endpoint with no entity record is corpus corruption and
    /// aborts extraction.
    pub fn extract(corpus: &Corpus) -> Result<Self, Error> {
        let mut halflinks = HalfLinks::default();
        for tlink in corpus.tlinks() {
            for id in [&tlink.source, &tlink.target] {
                if corpus.entity_text(id).is_none() {
                    return Err(Error::DanglingEntity(id.clone()));
                }
            }
            halflinks.push(tlink.source.clone(), tlink.target.clone(), tlink.relation);
        }
        Ok(halflinks)
    }

    fn push(&mut self, source: EntityId, target: EntityId, relation: Relation) {
        self.links.push(HalfLink {
            entity: source.clone(),
            relation,
        });
        self.links.push(HalfLink {
            entity: target.clone(),
            relation: relation.inverse(),
        });

        self.by_entity
            .entry(source.clone())
            .or_default()
            .push((target.clone(), relation));
        self.by_entity
            .entry(target)
            .or_default()
            .push((source, relation.inverse()));
    }

    /// Half-links in discovery order.
    pub fn links(&self) -> &[HalfLink] {
        &self.links
    }

    /// Tlink tuples touching an entity, in insertion order, labels already
    /// perspective-adjusted.
    pub fn tlinks_of(&self, entity: &EntityId) -> &[(EntityId, Relation)] {
        self.by_entity
            .get(entity)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distinct half-links with their counts, most frequent first.
    pub fn counts(&self) -> Vec<(HalfLink, u64)> {
        let mut counts: HashMap<&HalfLink, u64> = HashMap::new();
        let mut first_seen = Vec::new();
        for link in &self.links {
            let count = counts.entry(link).or_insert(0);
            if *count == 0 {
                first_seen.push(link);
            }
            *count += 1;
        }
        // sorted_by is stable, so ties stay in first-seen order
        first_seen
            .into_iter()
            .map(|link| (link.clone(), counts[link]))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::HalfLinks;
    use crate::corpus::{Corpus, EntityId, Relation};
    use crate::error::Error;

    const CORPUS: &str = r#"<?xml version="1.0"?>
<corpus xmlns="http://chambers.com/corpusinfo">
  <file name="doc1">
    <entry file="doc1" sid="0">
      <sentence>First sentence.</sentence>
      <event eiid="e1" string="said"/>
      <event eiid="e2" string="fell"/>
      <event eiid="e3" string="rose"/>
    </entry>
    <tlink event1="e1" event2="e2" relation="BEFORE"/>
    <tlink event1="e2" event2="e3" relation="INCLUDES"/>
    <tlink event1="e1" event2="e3" relation="BEFORE"/>
  </file>
</corpus>
"#;

    fn extract() -> HalfLinks {
        let corpus = Corpus::from_xml(CORPUS).unwrap();
        HalfLinks::extract(&corpus).unwrap()
    }

    #[test]
    fn two_halflinks_per_tlink() {
        let hl = extract();
        assert_eq!(hl.links().len(), 6);

        let e1 = EntityId::new("doc1", "e1");
        let e2 = EntityId::new("doc1", "e2");
        let before_e1 = hl
            .links()
            .iter()
            .filter(|l| l.entity == e1 && l.relation == Relation::Before)
            .count();
        assert_eq!(before_e1, 2);
        let after_e2 = hl
            .links()
            .iter()
            .filter(|l| l.entity == e2 && l.relation == Relation::After)
            .count();
        assert_eq!(after_e2, 1);
    }

    #[test]
    fn index_stores_perspective_adjusted_labels() {
        let hl = extract();
        let e2 = EntityId::new("doc1", "e2");
        let tuples = hl.tlinks_of(&e2);
        assert_eq!(
            tuples,
            &[
                (EntityId::new("doc1", "e1"), Relation::After),
                (EntityId::new("doc1", "e3"), Relation::Includes),
            ]
        );
    }

    #[test]
    fn counts_rank_by_frequency_then_first_seen() {
        let hl = extract();
        let counts = hl.counts();
        // (e1, BEFORE) occurs twice, everything else once
        assert_eq!(counts[0].0.entity, EntityId::new("doc1", "e1"));
        assert_eq!(counts[0].0.relation, Relation::Before);
        assert_eq!(counts[0].1, 2);
        // ties keep discovery order
        assert_eq!(counts[1].0.entity, EntityId::new("doc1", "e2"));
        assert_eq!(counts[1].0.relation, Relation::After);
        assert!(counts.iter().skip(1).all(|(_, n)| *n == 1));
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn dangling_endpoint_aborts() {
        let xml = CORPUS.replace(r#"event2="e3" relation="BEFORE""#, r#"event2="e9" relation="BEFORE""#);
        let corpus = Corpus::from_xml(&xml).unwrap();
        match HalfLinks::extract(&corpus) {
            Err(Error::DanglingEntity(id)) => assert_eq!(id, EntityId::new("doc1", "e9")),
            other => panic!("expected dangling entity error, got {:?}", other),
        }
    }
}
