//! Loading the artifact the site generator writes.

use super::common::{episodes, index_json, write_index, write_raw_index};
use podsift::{load_index_file, parse_index, search, LoadError, SearchOptions};

#[test]
fn test_load_written_index() {
    let docs = episodes();
    let (_dir, path) = write_index(&docs);

    let index = load_index_file(&path).expect("Failed to load index");
    assert_eq!(index.len(), docs.len());
    let loaded: Vec<_> = index.docs().cloned().collect();
    assert_eq!(loaded, docs);
}

#[test]
fn test_loaded_index_is_searchable() {
    let (_dir, path) = write_index(&episodes());
    let index = load_index_file(&path).expect("Failed to load index");

    let outcome = search(&index, "Catalan", &SearchOptions::default());
    assert_eq!(outcome.documents().len(), 1);
    assert_eq!(outcome.documents()[0].feed, "ShowA");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nope.json");

    let err = load_index_file(&path).unwrap_err();
    match err {
        LoadError::Io { path: reported, .. } => assert!(reported.ends_with("nope.json")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_truncated_file_is_parse_error() {
    let full = index_json(&episodes());
    let (_dir, path) = write_raw_index(&full[..full.len() / 2]);

    let err = load_index_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().starts_with("invalid index JSON"));
}

#[test]
fn test_object_payload_is_rejected() {
    let (_dir, path) = write_raw_index(r#"{"documents": []}"#);
    let err = load_index_file(&path).unwrap_err();
    assert_eq!(err, LoadError::NotAnArray { found: "an object" });
}

#[test]
fn test_file_and_string_parsing_agree() {
    let raw = index_json(&episodes());
    let (_dir, path) = write_raw_index(&raw);

    let from_file = load_index_file(&path).expect("Failed to load index");
    let from_str = parse_index(&raw).expect("Failed to parse index");
    assert!(from_file.docs().eq(from_str.docs()));
}

#[test]
fn test_pretty_printed_artifact_loads() {
    let raw = serde_json::to_string_pretty(&episodes()).expect("serialize");
    let (_dir, path) = write_raw_index(&raw);
    assert_eq!(load_index_file(&path).expect("load").len(), 5);
}
