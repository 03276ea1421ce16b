//! Statistics over loaded data
use std::fs;

use hsk_vocab::codec::load_csv;
use hsk_vocab::{Level, Statistics, VocabularyStore};

#[test]
fn test_three_rows_into_level_two() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("hsk2.csv");
    fs::write(
        &path,
        "id,chinese,pinyin,japanese,category\n\
         pao,跑,pǎo,走る,動詞\n\
         gei,给,gěi,与える,動詞\n\
         yinwei,因为,yīnwèi,なぜなら,接続詞\n",
    )
    .unwrap();

    let level = Level::new(2).unwrap();
    let mut store = VocabularyStore::new();
    load_csv(&mut store, &path, level).expect("load");

    let stats = Statistics::from_store(&store);
    assert_eq!(stats.level_count(level), 3);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.category_counts.values().sum::<usize>(), 3);

    let report = stats.to_string();
    assert!(report.contains("HSK2級: 3語\n"));
    assert!(report.contains("合計: 3語\n"));
    assert!(report.contains("動詞: 2語\n"));
    assert!(report.contains("接続詞: 1語\n"));
    assert!(!report.contains("名詞"));
}

#[test]
fn test_totals_are_consistent() {
    let mut store = VocabularyStore::new();
    for n in [1u8, 4, 6] {
        let records = (0..n)
            .map(|i| {
                hsk_vocab::Record::new(
                    format!("w{}", "a".repeat(i as usize + 1)),
                    "字",
                    "zì",
                    "字",
                    if i % 2 == 0 { "名詞" } else { "xyz" },
                )
            })
            .collect();
        store.replace_level(Level::new(n).unwrap(), records);
    }

    let stats = Statistics::from_store(&store);
    let level_sum: usize = stats.level_counts.iter().map(|(_, c)| c).sum();
    assert_eq!(stats.total, 11);
    assert_eq!(stats.total, level_sum);
    assert_eq!(stats.category_counts.values().sum::<usize>(), stats.total);
    assert_eq!(stats.level_counts.len(), 6);
}
