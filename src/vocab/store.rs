//! Vocabulary Store
//!
//! In-memory mapping from level to its ordered records. One store is built per
//! invocation and handed to each operation by reference.

use std::collections::BTreeMap;

use super::record::{Level, Record};

/// Records grouped by level, iterated in level order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabularyStore {
    levels: BTreeMap<Level, Vec<Record>>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a level's records wholesale, returning the previous group
    pub fn replace_level(&mut self, level: Level, records: Vec<Record>) -> Option<Vec<Record>> {
        self.levels.insert(level, records)
    }

    /// Records for a level, or `None` if the level was never set
    pub fn level(&self, level: Level) -> Option<&[Record]> {
        self.levels.get(&level).map(Vec::as_slice)
    }

    /// Records for a level, empty if absent
    pub fn records(&self, level: Level) -> &[Record] {
        self.level(level).unwrap_or(&[])
    }

    pub fn contains_level(&self, level: Level) -> bool {
        self.levels.contains_key(&level)
    }

    /// Present levels and their records, in level order
    pub fn iter(&self) -> impl Iterator<Item = (Level, &[Record])> {
        self.levels.iter().map(|(level, records)| (*level, records.as_slice()))
    }

    /// Total record count across all levels
    pub fn len(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
