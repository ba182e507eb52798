//! Temporal relation labels.
//!
//! The corpus XML carries the long forms (`BEFORE`, `IS_INCLUDED`, ...).
//! Annotator files carry the short codes (`b`, `ii`, ...). Both alphabets
//! map onto the same six variants.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The six temporal relation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Before,
    After,
    Includes,
    IsIncluded,
    Simultaneous,
    Vague,
}

/// All labels, in the fixed order used by reports and distributions.
pub const RELATIONS: [Relation; 6] = [
    Relation::Before,
    Relation::After,
    Relation::Includes,
    Relation::IsIncluded,
    Relation::Simultaneous,
    Relation::Vague,
];

impl Relation {
    /// The same relation seen from the opposite endpoint.
    ///
    /// `BEFORE`/`AFTER` and `INCLUDES`/`IS_INCLUDED` swap; `SIMULTANEOUS`
    /// and `VAGUE` are their own inverses.
    pub fn inverse(self) -> Self {
        match self {
            Relation::Before => Relation::After,
            Relation::After => Relation::Before,
            Relation::Includes => Relation::IsIncluded,
            Relation::IsIncluded => Relation::Includes,
            Relation::Simultaneous => Relation::Simultaneous,
            Relation::Vague => Relation::Vague,
        }
    }

    /// Long-form label as it appears in corpus `tlink` elements.
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Before => "BEFORE",
            Relation::After => "AFTER",
            Relation::Includes => "INCLUDES",
            Relation::IsIncluded => "IS_INCLUDED",
            Relation::Simultaneous => "SIMULTANEOUS",
            Relation::Vague => "VAGUE",
        }
    }

    /// Short code as it appears in annotator files.
    pub fn code(self) -> &'static str {
        match self {
            Relation::Before => "b",
            Relation::After => "a",
            Relation::Includes => "i",
            Relation::IsIncluded => "ii",
            Relation::Simultaneous => "s",
            Relation::Vague => "v",
        }
    }

    /// Parse a short annotation code.
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code {
            "b" => Ok(Relation::Before),
            "a" => Ok(Relation::After),
            "i" => Ok(Relation::Includes),
            "ii" => Ok(Relation::IsIncluded),
            "s" => Ok(Relation::Simultaneous),
            "v" => Ok(Relation::Vague),
            other => Err(Error::UnknownRelation(other.to_string())),
        }
    }
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEFORE" => Ok(Relation::Before),
            "AFTER" => Ok(Relation::After),
            "INCLUDES" => Ok(Relation::Includes),
            "IS_INCLUDED" => Ok(Relation::IsIncluded),
            "SIMULTANEOUS" => Ok(Relation::Simultaneous),
            "VAGUE" => Ok(Relation::Vague),
            other => Err(Error::UnknownRelation(other.to_string())),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Relation, RELATIONS};

    #[test]
    fn inverse_involution() {
        for rel in RELATIONS {
            assert_eq!(rel.inverse().inverse(), rel);
        }
    }

    #[test]
    fn self_inverses() {
        assert_eq!(Relation::Vague.inverse(), Relation::Vague);
        assert_eq!(Relation::Simultaneous.inverse(), Relation::Simultaneous);
        assert_eq!(Relation::Before.inverse(), Relation::After);
        assert_eq!(Relation::Includes.inverse(), Relation::IsIncluded);
    }

    #[test]
    fn long_form_round_trip() {
        for rel in RELATIONS {
            assert_eq!(rel.as_str().parse::<Relation>().unwrap(), rel);
        }
        assert!("OVERLAPS".parse::<Relation>().is_err());
    }

    #[test]
    fn code_round_trip() {
        for rel in RELATIONS {
            assert_eq!(Relation::from_code(rel.code()).unwrap(), rel);
        }
        assert!(Relation::from_code("x").is_err());
    }
}
