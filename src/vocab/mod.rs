//! Vocabulary data model.

pub mod record;
pub mod store;

pub use record::{CSV_HEADER, Category, Level, Record};
pub use store::VocabularyStore;
