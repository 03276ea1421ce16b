//! Validation Engine
//!
//! Record-level checks plus group-level checks (duplicates, category
//! membership) run over a whole store. Findings are plain strings.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::vocab::{Category, Level, Record, VocabularyStore};

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_]+$").expect("id pattern is valid"));

/// CJK Unified Ideographs plus whitespace
static HANZI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{4e00}-\x{9fff}\s]+$").expect("hanzi pattern is valid"));

/// Per-level validation findings; levels without findings are absent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<Level, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Findings for one level, `None` if that level is clean or absent
    pub fn level(&self, level: Level) -> Option<&[String]> {
        self.errors.get(&level).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, &[String])> {
        self.errors.iter().map(|(level, errors)| (*level, errors.as_slice()))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return writeln!(f, "✅ 全ての語彙データが正常です");
        }
        for (level, errors) in self.iter() {
            writeln!(f, "\n{}のエラー:", level.key())?;
            for error in errors {
                writeln!(f, "  {}", error)?;
            }
        }
        Ok(())
    }
}

/// Validate a single record in isolation
///
/// Every check runs, so all problems with a record are reported together.
/// Category membership and duplicates need group context and are left to
/// [`validate_store`].
pub fn validate_record(record: &Record) -> Vec<String> {
    let mut errors = Vec::new();

    if record.id.is_empty() {
        errors.push("IDが空です".to_string());
    }
    if record.source_text.is_empty() {
        errors.push("中国語が空です".to_string());
    }
    if record.romanization.is_empty() {
        errors.push("ピンインが空です".to_string());
    }
    if record.translation.is_empty() {
        errors.push("日本語が空です".to_string());
    }
    if record.category.is_empty() {
        errors.push("カテゴリが空です".to_string());
    }

    if !record.id.is_empty() && !ID_RE.is_match(&record.id) {
        errors.push(format!(
            "ID '{}' は小文字とアンダースコアのみ使用可能",
            record.id
        ));
    }

    if !record.source_text.is_empty() && !HANZI_RE.is_match(&record.source_text) {
        errors.push(format!(
            "中国語 '{}' に無効な文字が含まれています",
            record.source_text
        ));
    }

    errors
}

/// Validate one level's records, with 1-based row prefixes
pub fn validate_level(records: &[Record]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut seen_texts: HashSet<&str> = HashSet::new();

    for (idx, record) in records.iter().enumerate() {
        let row = idx + 1;

        for error in validate_record(record) {
            errors.push(format!("行{}: {}", row, error));
        }

        if !seen_ids.insert(&record.id) {
            errors.push(format!("行{}: ID '{}' が重複しています", row, record.id));
        }

        if !seen_texts.insert(&record.source_text) {
            errors.push(format!(
                "行{}: 中国語 '{}' が重複しています",
                row, record.source_text
            ));
        }

        if Category::from_label(&record.category).is_none() {
            errors.push(format!("行{}: 無効なカテゴリ '{}'", row, record.category));
        }
    }

    errors
}

/// Validate every level in the store
pub fn validate_store(store: &VocabularyStore) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (level, records) in store.iter() {
        let errors = validate_level(records);
        log::debug!("{}: {} records, {} findings", level.key(), records.len(), errors.len());
        if !errors.is_empty() {
            report.errors.insert(level, errors);
        }
    }

    report
}
