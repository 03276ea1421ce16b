//! Vocabulary record, level and category types.

use std::fmt;
use std::str::FromStr;

use crate::error::VocabError;

/// CSV header, in column order
pub const CSV_HEADER: [&str; 5] = ["id", "chinese", "pinyin", "japanese", "category"];

/// One vocabulary entry
///
/// Fields are plain strings so that malformed input can be loaded and then
/// reported by the validator. In CSV and generated files the text fields are
/// named `chinese`, `pinyin` and `japanese`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    /// Word in Chinese characters
    pub source_text: String,
    /// Pinyin
    pub romanization: String,
    /// Japanese gloss
    pub translation: String,
    /// Part-of-speech label, see [`Category`]
    pub category: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        source_text: impl Into<String>,
        romanization: impl Into<String>,
        translation: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_text: source_text.into(),
            romanization: romanization.into(),
            translation: translation.into(),
            category: category.into(),
        }
    }

    /// Fields in CSV column order
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.id,
            &self.source_text,
            &self.romanization,
            &self.translation,
            &self.category,
        ]
    }
}

/// HSK proficiency level, 1 through 6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&number)
            .then_some(Self(number))
    }

    /// All levels in ascending order
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Key used in the generated data file, e.g. `hsk3`
    pub fn key(self) -> String {
        format!("hsk{}", self.0)
    }

    /// Human-readable label, e.g. `HSK3級`
    pub fn label(self) -> String {
        format!("HSK{}級", self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Level {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_prefix("hsk")
            .or_else(|| trimmed.strip_prefix("HSK"))
            .unwrap_or(trimmed);
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Level::new)
            .ok_or_else(|| VocabError::InvalidLevel(s.to_string()))
    }
}

/// Part-of-speech categories accepted by the batch validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Classifier,
    Particle,
    Conjunction,
    Preposition,
    Interjection,
    Demonstrative,
    Interrogative,
    Numeral,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
        Category::Pronoun,
        Category::Classifier,
        Category::Particle,
        Category::Conjunction,
        Category::Preposition,
        Category::Interjection,
        Category::Demonstrative,
        Category::Interrogative,
        Category::Numeral,
    ];

    /// Label as it appears in the data
    pub fn label(self) -> &'static str {
        match self {
            Category::Noun => "名詞",
            Category::Verb => "動詞",
            Category::Adjective => "形容詞",
            Category::Adverb => "副詞",
            Category::Pronoun => "代詞",
            Category::Classifier => "量詞",
            Category::Particle => "助詞",
            Category::Conjunction => "接続詞",
            Category::Preposition => "前置詞",
            Category::Interjection => "感嘆詞",
            Category::Demonstrative => "指示詞",
            Category::Interrogative => "疑問詞",
            Category::Numeral => "数詞",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}
