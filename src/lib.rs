pub mod agreement;
pub mod corpus;
pub mod error;
pub mod flatten;
pub mod halflink;
pub mod spreadsheet;
