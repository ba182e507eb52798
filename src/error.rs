//! Error enum
use std::num::ParseIntError;

use crate::corpus::EntityId;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Xml(roxmltree::Error),
    Csv(csv::Error),
    /// A tlink relation or annotation code outside the six-label alphabet.
    UnknownRelation(String),
    /// A tlink endpoint id with no matching event/timex in the corpus.
    DanglingEntity(EntityId),
    /// A required attribute absent from a corpus element.
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    /// Non-numeric sentence id.
    SentenceIndex(ParseIntError),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Error {
        Error::SentenceIndex(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
