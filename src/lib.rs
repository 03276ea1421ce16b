//! HSK vocabulary toolkit
//!
//! Validates, converts and reports on Chinese study vocabulary grouped by HSK
//! level.
//!
//! This library provides:
//! - Record and batch validation
//! - CSV import/export per level
//! - JavaScript data-file generation
//! - Statistics reports
//! - Configuration management

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod stats;
pub mod validation;
pub mod vocab;

// Re-exports for clean public API
pub use config::{Command, Config};
pub use error::VocabError;
pub use stats::Statistics;
pub use validation::{ValidationReport, validate_record, validate_store};
pub use vocab::{Category, Level, Record, VocabularyStore};
