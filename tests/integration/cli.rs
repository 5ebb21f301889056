//! The `podsift` binary, run against index artifacts on disk.

use super::common::{episodes, write_index, write_raw_index};
use podsift::NO_RESULTS_MESSAGE;
use std::path::Path;
use std::process::{Command, Output};

/// Run the podsift binary with the given arguments, colors off.
fn run_podsift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_podsift"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run podsift")
}

fn search(index: &Path, extra: &[&str]) -> Output {
    let index = index.to_str().expect("temp path is UTF-8");
    let mut args = vec!["search", "--index", index];
    args.extend_from_slice(extra);
    run_podsift(&args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// SEARCH
// ============================================================================

#[test]
fn test_search_prints_ranked_matches_in_index_order() {
    let (_dir, path) = write_index(&episodes());
    let output = search(&path, &["cat"]);
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let first = out.find(" 1. Episode One [ShowA]").expect("first match listed");
    let second = out
        .find(" 2. Interview: A Catalan Chef [ShowA]")
        .expect("second match listed");
    assert!(first < second, "{}", out);
    assert!(out.contains("/episodes/episode-one.html"), "{}", out);
    assert!(!out.contains(" 3."), "{}", out);
}

#[test]
fn test_search_limit_caps_output() {
    let (_dir, path) = write_index(&episodes());
    let output = search(&path, &["--limit", "1", "cat"]);
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains(" 1. Episode One"), "{}", out);
    assert!(!out.contains("Catalan"), "{}", out);
}

#[test]
fn test_search_without_matches_prints_placeholder() {
    let (_dir, path) = write_index(&episodes());
    let output = search(&path, &["xyz123"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), NO_RESULTS_MESSAGE);
}

#[test]
fn test_search_short_query_prints_notice() {
    let (_dir, path) = write_index(&episodes());
    let output = search(&path, &["c"]);
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(
        out.contains("Query shorter than 2 characters; nothing to show."),
        "{}",
        out
    );
    assert!(!out.contains(NO_RESULTS_MESSAGE), "{}", out);
    assert!(!out.contains("Episode One"), "{}", out);
}

#[test]
fn test_search_min_len_flag_moves_the_threshold() {
    let (_dir, path) = write_index(&episodes());
    let output = search(&path, &["--min-len", "4", "cat"]);
    assert!(stdout(&output).contains("Query shorter than 4 characters"));
}

#[test]
fn test_search_missing_file_exits_with_status_1() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = search(&dir.path().join("missing.json"), &["cat"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error:"), "{}", err);
    assert!(err.contains("failed to read index"), "{}", err);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_search_invalid_artifact_exits_with_status_1() {
    let (_dir, path) = write_raw_index("[{\"title\": ");
    let output = search(&path, &["cat"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid index JSON"));
}

// ============================================================================
// INSPECT
// ============================================================================

#[test]
fn test_inspect_clean_artifact() {
    let (_dir, path) = write_index(&episodes());
    let output = run_podsift(&["inspect", path.to_str().expect("UTF-8 path")]);
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("INDEX"), "{}", out);
    assert!(out.contains("Documents   5"), "{}", out);
    assert!(out.contains("[ShowA]"), "{}", out);
    assert!(out.contains("[ShowB]"), "{}", out);
    assert!(out.contains("All entries have four string fields"), "{}", out);
}

#[test]
fn test_inspect_reports_malformed_entries() {
    let raw = r#"[
        {"title": "Fine", "text": "ok", "url": "/a", "feed": "F"},
        {"title": 7, "text": "ok", "url": "/b"},
        "not an object"
    ]"#;
    let (_dir, path) = write_raw_index(raw);
    let output = run_podsift(&["inspect", path.to_str().expect("UTF-8 path")]);
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("Documents   3"), "{}", out);
    assert!(out.contains("DATA QUALITY"), "{}", out);
    assert!(out.contains("2 entries will render with blank fields"), "{}", out);
    assert!(out.contains("#1      missing or not text: title, feed"), "{}", out);
    assert!(
        out.contains("#2      missing or not text: title, text, url, feed"),
        "{}",
        out
    );
    assert!(out.contains("[no feed]"), "{}", out);
}

#[test]
fn test_inspect_non_array_exits_with_status_1() {
    let (_dir, path) = write_raw_index(r#"{"documents": []}"#);
    let output = run_podsift(&["inspect", path.to_str().expect("UTF-8 path")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("index must be a JSON array, found an object"));
}

#[test]
fn test_inspect_missing_file_exits_with_status_1() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.json");
    let output = run_podsift(&["inspect", missing.to_str().expect("UTF-8 path")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read index"));
}
