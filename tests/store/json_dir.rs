//! `JsonDirStore` over a temporary data directory.

use std::fs;

use tempfile::TempDir;

use mizan::{
    load_collections, rank_full, ContentStore, FixedClock, JsonDirStore, MizanError, RecordId,
};

use super::common::test_now;

fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, body) in files {
        fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

const FATWAS: &str = r#"[
  {"id": 1, "title": "أحكام الصلاة", "content": "شروط الصلاة", "createdAt": "2025-03-01T00:00:00.000Z"},
  {"id": 2, "title": "أحكام الزكاة", "content": "نصاب الزكاة", "category": "zakat"}
]"#;

const VIDEOS: &str = r#"[
  {"id": "v-17", "title": "درس الصلاة", "description": "شرح", "youtubeId": "abc123"}
]"#;

#[test]
fn test_loads_numeric_and_string_ids() {
    let dir = data_dir(&[("fatwas.json", FATWAS), ("videos.json", VIDEOS)]);
    let store = JsonDirStore::new(dir.path());

    let fatwas = store.load("fatwas").unwrap();
    assert_eq!(fatwas.len(), 2);
    assert_eq!(fatwas[0].id, RecordId::Int(1));

    let videos = store.load("videos").unwrap();
    assert_eq!(videos[0].id, RecordId::Text("v-17".into()));
    assert_eq!(videos[0].body(), "شرح");
}

#[test]
fn test_missing_file_is_empty_collection() {
    let dir = data_dir(&[]);
    let store = JsonDirStore::new(dir.path());
    assert!(store.load("khutbahs").unwrap().is_empty());
}

#[test]
fn test_blank_file_is_empty_collection() {
    let dir = data_dir(&[("articles.json", "  \n")]);
    let store = JsonDirStore::new(dir.path());
    assert!(store.load("articles").unwrap().is_empty());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = data_dir(&[("articles.json", "[{\"id\": 1,")]);
    let store = JsonDirStore::new(dir.path());
    let err = store.load("articles").unwrap_err();
    assert!(matches!(err, MizanError::Json { .. }));
    assert!(err.to_string().contains("articles.json"));
}

#[test]
fn test_load_collections_skips_bad_files() {
    let dir = data_dir(&[
        ("fatwas.json", FATWAS),
        ("articles.json", "not json"),
        ("videos.json", VIDEOS),
    ]);
    let store = JsonDirStore::new(dir.path());
    let loaded = load_collections(&store, &names(&["fatwas", "articles", "videos", "khutbahs"]));

    let kinds: Vec<_> = loaded.collections().iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec!["fatwas", "videos", "khutbahs"]);
    assert_eq!(loaded.record_count(), 3);
}

#[test]
fn test_search_over_data_directory() {
    let dir = data_dir(&[("fatwas.json", FATWAS), ("videos.json", VIDEOS)]);
    let store = JsonDirStore::new(dir.path());
    let loaded = load_collections(&store, &names(&["fatwas", "articles", "videos", "khutbahs"]));
    let collections = loaded.collections();

    let results = rank_full("الصلاة", &collections, &FixedClock(test_now()));
    let found: Vec<_> = results
        .iter()
        .map(|r| (r.collection_type, r.record.id.clone()))
        .collect();
    // Fatwa 1: title + body + phrase + half a day of recency; video: title + phrase.
    assert_eq!(
        found,
        vec![
            ("fatwas", RecordId::Int(1)),
            ("videos", RecordId::Text("v-17".into())),
        ]
    );
    assert_eq!(results[1].snippet.as_deref(), Some("شرح"));
}

#[test]
fn test_odd_field_types_do_not_drop_the_collection() {
    let fatwas = r#"[
      {"id": 1, "title": "salah times", "content": "when to pray", "createdAt": 1700000000000},
      {"id": 2.5, "title": "salah at work", "content": null, "createdAt": "2025-02-28T12:00:00Z"},
      {"id": 3, "title": 42, "content": "nothing here"}
    ]"#;
    let dir = data_dir(&[("fatwas.json", fatwas)]);
    let store = JsonDirStore::new(dir.path());

    let records = store.load("fatwas").unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[0].created_at().is_some());

    let loaded = load_collections(&store, &names(&["fatwas"]));
    let collections = loaded.collections();
    let results = rank_full("salah", &collections, &FixedClock(test_now()));
    let ids: Vec<_> = results.iter().map(|r| r.record.id.clone()).collect();
    // Record 2 is a day old; record 1's epoch timestamp is long past.
    assert_eq!(
        ids,
        vec![RecordId::Text("2.5".into()), RecordId::Int(1)]
    );
}
