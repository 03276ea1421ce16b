//! Statistics report: per-level counts, total, and per-category counts.

use std::collections::BTreeMap;
use std::fmt;

use crate::vocab::{Level, VocabularyStore};

/// Counts derived from a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// One entry per level 1..=6, zero when absent
    pub level_counts: Vec<(Level, usize)>,
    pub total: usize,
    /// Only categories that actually occur, sorted by label
    pub category_counts: BTreeMap<String, usize>,
}

impl Statistics {
    pub fn from_store(store: &VocabularyStore) -> Self {
        let level_counts: Vec<(Level, usize)> = Level::all()
            .map(|level| (level, store.records(level).len()))
            .collect();
        let total = level_counts.iter().map(|(_, count)| count).sum();

        let mut category_counts = BTreeMap::new();
        for (_, records) in store.iter() {
            for record in records {
                *category_counts.entry(record.category.clone()).or_insert(0) += 1;
            }
        }

        Self {
            level_counts,
            total,
            category_counts,
        }
    }

    pub fn level_count(&self, level: Level) -> usize {
        self.level_counts
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== HSK語彙データベース統計 ===\n")?;
        for (level, count) in &self.level_counts {
            writeln!(f, "{}: {}語", level.label(), count)?;
        }
        writeln!(f, "\n合計: {}語\n", self.total)?;

        writeln!(f, "=== カテゴリ別統計 ===")?;
        for (category, count) in &self.category_counts {
            writeln!(f, "{}: {}語", category, count)?;
        }
        Ok(())
    }
}

/// Render the statistics report for a store
pub fn generate_statistics(store: &VocabularyStore) -> String {
    Statistics::from_store(store).to_string()
}
