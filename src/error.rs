//! Error types for store loading and file output.
//!
//! Validation findings are never errors; they are returned as strings by the
//! validation engine. Everything here is an I/O or input problem.

use std::path::PathBuf;

/// Failures raised by load, export and generate operations
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("ファイル '{}' が見つかりません", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid HSK level '{0}' (expected 1-6)")]
    InvalidLevel(String),
}

impl VocabError {
    /// Map an I/O error on `path` to `FileNotFound` when the file is missing
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            VocabError::FileNotFound(path.into())
        } else {
            VocabError::Io(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, VocabError::FileNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;
