//! Command dispatcher.
//!
//! Runs one [`Command`] against a store supplied by the caller. Failures are
//! reported on the output writer and never abort the run; only a failure to
//! write the report itself is returned as an error.

use std::io::{self, Write};
use std::path::Path;

use crate::codec::{self, ExportOutcome};
use crate::config::{Command, Config};
use crate::error::VocabError;
use crate::stats::Statistics;
use crate::validation::validate_store;
use crate::vocab::{Level, VocabularyStore};

/// Printed when no command is given
pub const USAGE: &str = "\
使用方法:
  hsk-vocab validate
  hsk-vocab generate [--output <js_file>]
  hsk-vocab stats
  hsk-vocab load <csv_file> <hsk_level>
  hsk-vocab export <hsk_level> <csv_file>

オプション:
  --input <LEVEL=PATH>   コマンド実行前にCSVを読み込む (複数指定可)
  --config <PATH>        設定ファイル
  --log-level <LEVEL>    ログレベル";

/// Load every configured input into the store
pub fn preload(store: &mut VocabularyStore, config: &Config, out: &mut dyn Write) -> io::Result<()> {
    for (level, path) in &config.inputs {
        load(store, path, *level, out)?;
    }
    Ok(())
}

/// Run a single command
pub fn run(
    command: &Command,
    store: &mut VocabularyStore,
    config: &Config,
    out: &mut dyn Write,
) -> io::Result<()> {
    match command {
        Command::Validate => validate(store, out),
        Command::Generate { output } => {
            let path = config.output_for(output.as_deref());
            generate(store, &path, out)
        }
        Command::Stats => write!(out, "{}", Statistics::from_store(store)),
        Command::Load {
            csv_file,
            hsk_level,
        } => load(store, csv_file, *hsk_level, out),
        Command::Export {
            hsk_level,
            csv_file,
        } => export(store, *hsk_level, csv_file, out),
    }
}

fn validate(store: &VocabularyStore, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "語彙データを検証しています...")?;
    let report = validate_store(store);
    if !report.is_valid() {
        log::warn!("validation found {} problems", report.error_count());
    }
    write!(out, "{}", report)
}

fn load(
    store: &mut VocabularyStore,
    path: &Path,
    level: Level,
    out: &mut dyn Write,
) -> io::Result<()> {
    match codec::load_csv(store, path, level) {
        Ok(count) => writeln!(out, "{}: {}語を読み込みました", level.label(), count),
        Err(err @ VocabError::FileNotFound(_)) => {
            log::warn!("{}", err);
            writeln!(out, "{}", err)
        }
        Err(err) => {
            log::error!("failed to load {:?}: {}", path, err);
            writeln!(out, "CSVファイル読み込みエラー: {}", err)
        }
    }
}

fn generate(store: &VocabularyStore, path: &Path, out: &mut dyn Write) -> io::Result<()> {
    match codec::generate_javascript(store, path) {
        Ok(()) => writeln!(
            out,
            "JavaScriptファイル '{}' を生成しました",
            path.display()
        ),
        Err(err) => {
            log::error!("failed to write {:?}: {}", path, err);
            writeln!(out, "ファイル生成エラー: {}", err)
        }
    }
}

fn export(
    store: &VocabularyStore,
    level: Level,
    path: &Path,
    out: &mut dyn Write,
) -> io::Result<()> {
    match codec::export_csv(store, level, path) {
        Ok(ExportOutcome::Written(_)) => writeln!(
            out,
            "{}を '{}' にエクスポートしました",
            level.label(),
            path.display()
        ),
        Ok(ExportOutcome::Empty) => writeln!(out, "{}のデータがありません", level.label()),
        Err(err) => {
            log::error!("failed to export {} to {:?}: {}", level.key(), path, err);
            writeln!(out, "CSVエクスポートエラー: {}", err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Record;

    fn run_to_string(command: Command, store: &mut VocabularyStore) -> String {
        let mut out = Vec::new();
        run(&command, store, &Config::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_validate_empty_store_succeeds() {
        let output = run_to_string(Command::Validate, &mut VocabularyStore::new());
        assert_eq!(
            output,
            "語彙データを検証しています...\n✅ 全ての語彙データが正常です\n"
        );
    }

    #[test]
    fn test_validate_reports_level_errors() {
        let mut store = VocabularyStore::new();
        store.replace_level(
            Level::new(3).unwrap(),
            vec![Record::new("Bad", "我", "wǒ", "私", "代詞")],
        );
        let output = run_to_string(Command::Validate, &mut store);
        assert!(output.contains("\nhsk3のエラー:\n"));
        assert!(output.contains("  行1: ID 'Bad' は小文字とアンダースコアのみ使用可能\n"));
    }

    #[test]
    fn test_load_missing_file_is_reported() {
        let mut store = VocabularyStore::new();
        let output = run_to_string(
            Command::Load {
                csv_file: "nope/missing.csv".into(),
                hsk_level: Level::new(1).unwrap(),
            },
            &mut store,
        );
        assert_eq!(output, "ファイル 'nope/missing.csv' が見つかりません\n");
        assert!(store.level(Level::new(1).unwrap()).is_none());
    }

    #[test]
    fn test_load_unreadable_csv_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, b"id,chinese,pinyin,japanese,category\nwo,\xff\xfe,wo,x,y\n").unwrap();

        let mut store = VocabularyStore::new();
        store.replace_level(Level::new(2).unwrap(), vec![Record::new("keep", "留", "liú", "残す", "動詞")]);
        let output = run_to_string(
            Command::Load {
                csv_file: path,
                hsk_level: Level::new(1).unwrap(),
            },
            &mut store,
        );

        assert!(output.starts_with("CSVファイル読み込みエラー: "));
        assert!(store.level(Level::new(1).unwrap()).is_none());
        assert_eq!(store.records(Level::new(2).unwrap()).len(), 1);
    }

    #[test]
    fn test_generate_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let output = run_to_string(
            Command::Generate {
                output: Some(blocker.join("vocab.js")),
            },
            &mut VocabularyStore::new(),
        );

        assert!(output.starts_with("ファイル生成エラー: "));
        assert!(blocker.is_file());
    }

    #[test]
    fn test_export_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut store = VocabularyStore::new();
        store.replace_level(Level::new(1).unwrap(), vec![Record::new("wo", "我", "wǒ", "私", "代詞")]);
        let output = run_to_string(
            Command::Export {
                hsk_level: Level::new(1).unwrap(),
                csv_file: blocker.join("out.csv"),
            },
            &mut store,
        );

        assert!(output.starts_with("CSVエクスポートエラー: "));
        assert_eq!(store.records(Level::new(1).unwrap()).len(), 1);
    }

    #[test]
    fn test_export_empty_level_message() {
        let output = run_to_string(
            Command::Export {
                hsk_level: Level::new(5).unwrap(),
                csv_file: "unused.csv".into(),
            },
            &mut VocabularyStore::new(),
        );
        assert_eq!(output, "HSK5級のデータがありません\n");
    }
}
