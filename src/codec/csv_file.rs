//! CSV import and export of a single level.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Result, VocabError};
use crate::vocab::{CSV_HEADER, Level, Record, VocabularyStore};

/// Outcome of exporting one level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Number of data rows written
    Written(usize),
    /// The level had no records; nothing was written
    Empty,
}

/// Parse records from CSV text with a header row
///
/// Columns are matched by header name. Missing columns and short rows leave
/// the affected fields empty; the validator reports them later.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let columns = CSV_HEADER.map(column);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let [id, source_text, romanization, translation, category] = columns.map(|idx| {
            idx.and_then(|i| row.get(i))
                .map(str::to_string)
                .unwrap_or_default()
        });
        records.push(Record {
            id,
            source_text,
            romanization,
            translation,
            category,
        });
    }
    Ok(records)
}

/// Read all records from a CSV file
pub fn read_csv(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| VocabError::from_io(e, path))?;
    read_records(file)
}

/// Load a CSV file into `level`, replacing whatever the level held
///
/// On failure the store is left unchanged. Returns the number of records
/// loaded.
pub fn load_csv(store: &mut VocabularyStore, path: &Path, level: Level) -> Result<usize> {
    let records = read_csv(path)?;
    let count = records.len();
    log::info!("loaded {} records from {:?} into {}", count, path, level.key());
    store.replace_level(level, records);
    Ok(count)
}

/// Write a header row followed by one row per record
pub fn write_records<W: Write>(records: &[Record], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// Export one level to a CSV file
///
/// An empty or absent level is not an error: nothing is written and
/// [`ExportOutcome::Empty`] is returned.
pub fn export_csv(store: &VocabularyStore, level: Level, path: &Path) -> Result<ExportOutcome> {
    let records = store.records(level);
    if records.is_empty() {
        log::debug!("{} is empty, skipping export to {:?}", level.key(), path);
        return Ok(ExportOutcome::Empty);
    }

    let file = File::create(path).map_err(|e| VocabError::from_io(e, path))?;
    write_records(records, file)?;
    log::info!("exported {} records from {} to {:?}", records.len(), level.key(), path);
    Ok(ExportOutcome::Written(records.len()))
}
