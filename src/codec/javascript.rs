//! JavaScript data-file generation.
//!
//! The output is a single `const hskVocabulary = { hsk1: [...], ... }`
//! literal followed by two accessor functions, suitable for a `<script>` tag.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Result, VocabError};
use crate::vocab::{Level, Record, VocabularyStore};

const HEADER: &str = "// HSK等級別語彙データベース - 自動生成\nconst hskVocabulary = {\n";

const ACCESSORS: &str = r#"};

// HSK語彙取得関数
function getLevelVocabulary(level) {
    return hskVocabulary[`hsk${level}`] || [];
}

// 全HSK語彙取得関数
function getAllVocabulary() {
    const allWords = [];
    for (let i = 1; i <= 6; i++) {
        allWords.push(...getLevelVocabulary(i));
    }
    return allWords;
}
"#;

/// Quote a value as a string literal that JavaScript accepts
fn js_string(value: &str) -> String {
    // JSON string literals are valid JavaScript string literals
    serde_json::Value::from(value).to_string()
}

/// Render one record as an object literal
pub fn record_to_js_object(record: &Record) -> String {
    format!(
        "{{ id: {}, chinese: {}, pinyin: {}, japanese: {}, category: {} }}",
        js_string(&record.id),
        js_string(&record.source_text),
        js_string(&record.romanization),
        js_string(&record.translation),
        js_string(&record.category),
    )
}

/// Data file view over a store; absent levels become empty lists
pub struct JavascriptFile<'a>(pub &'a VocabularyStore);

impl fmt::Display for JavascriptFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;

        for level in Level::all() {
            let records = self.0.records(level);
            writeln!(f, "    // {} ({}語)", level.label(), records.len())?;
            writeln!(f, "    {}: [", level.key())?;
            for record in records {
                writeln!(f, "        {},", record_to_js_object(record))?;
            }
            f.write_str("    ],\n\n")?;
        }

        f.write_str(ACCESSORS)
    }
}

/// Render the whole store as JavaScript source
pub fn render_javascript(store: &VocabularyStore) -> String {
    JavascriptFile(store).to_string()
}

/// Write the rendered data file, creating parent directories as needed
pub fn generate_javascript(store: &VocabularyStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(VocabError::Io)?;
    }
    fs::write(path, render_javascript(store)).map_err(VocabError::Io)?;
    log::info!("wrote {} records to {:?}", store.len(), path);
    Ok(())
}
