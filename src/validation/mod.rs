//! Validation Engine
//!
//! Data-quality checks over records and whole stores.

pub mod engine;

pub use engine::{ValidationReport, validate_level, validate_record, validate_store};
