//! Batch validation over whole stores
use hsk_vocab::{Level, Record, VocabularyStore, validate_record, validate_store};

fn level(n: u8) -> Level {
    Level::new(n).expect("valid level")
}

fn hsk1_words() -> Vec<Record> {
    vec![
        Record::new("wo", "我", "wǒ", "私", "代詞"),
        Record::new("ni", "你", "nǐ", "あなた", "代詞"),
        Record::new("chi", "吃", "chī", "食べる", "動詞"),
        Record::new("hao", "好", "hǎo", "良い", "形容詞"),
        Record::new("ge", "个", "gè", "個", "量詞"),
    ]
}

#[test]
fn test_valid_level_has_no_errors() {
    let mut store = VocabularyStore::new();
    store.replace_level(level(1), hsk1_words());

    let report = validate_store(&store);
    assert!(report.is_valid());
    assert_eq!(report.error_count(), 0);
}

#[test]
fn test_duplicate_id_reported_once_per_repeat() {
    let mut words = hsk1_words();
    words.push(Record::new("wo", "们", "men", "たち", "助詞"));
    let mut store = VocabularyStore::new();
    store.replace_level(level(1), words);

    let report = validate_store(&store);
    let errors = report.level(level(1)).expect("level 1 has errors");
    assert_eq!(errors, &["行6: ID 'wo' が重複しています".to_string()]);
}

#[test]
fn test_duplicates_are_scoped_to_level() {
    let mut store = VocabularyStore::new();
    store.replace_level(level(1), hsk1_words());
    store.replace_level(level(2), hsk1_words());

    assert!(validate_store(&store).is_valid());
}

#[test]
fn test_duplicate_source_text() {
    let mut store = VocabularyStore::new();
    store.replace_level(
        level(2),
        vec![
            Record::new("hui", "会", "huì", "できる", "動詞"),
            Record::new("hui_meeting", "会", "huì", "会議", "名詞"),
        ],
    );

    let report = validate_store(&store);
    assert_eq!(
        report.level(level(2)).unwrap(),
        &["行2: 中国語 '会' が重複しています".to_string()]
    );
}

#[test]
fn test_pattern_and_category_checks() {
    let bad_id = Record::new("wǒ", "我", "wǒ", "私", "代詞");
    assert!(validate_record(&bad_id)[0].starts_with("ID 'wǒ'"));

    let bad_text = Record::new("hello", "hello", "hello", "こんにちは", "感嘆詞");
    let errors = validate_record(&bad_text);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("中国語 'hello'"));

    let bad_category = Record::new("xyz_word", "字", "zì", "字", "xyz");
    assert!(validate_record(&bad_category).is_empty());

    let mut store = VocabularyStore::new();
    store.replace_level(level(4), vec![bad_category]);
    let report = validate_store(&store);
    assert_eq!(
        report.level(level(4)).unwrap(),
        &["行1: 無効なカテゴリ 'xyz'".to_string()]
    );
}

#[test]
fn test_errors_accumulate_on_one_row() {
    let mut store = VocabularyStore::new();
    store.replace_level(level(6), vec![Record::new("Bad-Id", "abc", "", "x", "xyz")]);

    let report = validate_store(&store);
    let errors = report.level(level(6)).unwrap();
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|e| e.starts_with("行1: ")));

    let rendered = report.to_string();
    assert!(rendered.starts_with("\nhsk6のエラー:\n  行1: "));
}
