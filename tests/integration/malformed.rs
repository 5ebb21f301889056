//! Auditing artifacts with blank or mistyped fields.

use super::common::{episodes, index_json, write_raw_index};
use podsift::{audit_index, load_index_file, LoadError, MalformedEntry};

#[test]
fn test_clean_index_has_no_findings() {
    let audit = audit_index(&index_json(&episodes())).expect("audit");
    assert_eq!(audit.documents, 5);
    assert!(audit.malformed.is_empty());
    assert_eq!(audit.feeds.get("ShowA"), Some(&3));
    assert_eq!(audit.feeds.get("ShowB"), Some(&2));
}

#[test]
fn test_feeds_are_sorted_by_label() {
    let audit = audit_index(&index_json(&episodes())).expect("audit");
    let labels: Vec<&str> = audit.feeds.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["ShowA", "ShowB"]);
}

#[test]
fn test_text_bytes_sum_body_lengths() {
    let docs = episodes();
    let expected: usize = docs.iter().map(|d| d.text.len()).sum();
    let audit = audit_index(&index_json(&docs)).expect("audit");
    assert_eq!(audit.text_bytes, expected);
}

#[test]
fn test_malformed_entries_are_reported_but_still_load() {
    let raw = r#"[
        {"title": "Fine", "text": "ok", "url": "/a", "feed": "F"},
        {"title": 7, "text": "ok", "url": "/b"},
        "not an object"
    ]"#;

    let audit = audit_index(raw).expect("audit");
    assert_eq!(audit.documents, 3);
    assert_eq!(
        audit.malformed,
        vec![
            MalformedEntry {
                position: 1,
                fields: vec!["title", "feed"],
            },
            MalformedEntry {
                position: 2,
                fields: vec!["title", "text", "url", "feed"],
            },
        ]
    );
    // Blank feed labels are counted under the empty label
    assert_eq!(audit.feeds.get(""), Some(&2));

    let (_dir, path) = write_raw_index(raw);
    let index = load_index_file(&path).expect("malformed entries still load");
    assert_eq!(index.len(), 3);
}

#[test]
fn test_audit_rejects_what_the_loader_rejects() {
    assert!(matches!(audit_index("nope"), Err(LoadError::Parse { .. })));
    assert_eq!(
        audit_index("null").unwrap_err(),
        LoadError::NotAnArray { found: "null" }
    );
}
