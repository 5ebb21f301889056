//! Match predicate and ordering against a realistic corpus.

use super::common::{episode_index, episodes, titles};
use podsift::{search, SearchIndex, SearchOptions};

#[test]
fn test_matches_title_only() {
    let index = episode_index();
    let outcome = search(&index, "mailbag", &SearchOptions::default());
    assert_eq!(titles(outcome.documents()), vec!["Mailbag"]);
}

#[test]
fn test_matches_text_only() {
    let index = episode_index();
    let outcome = search(&index, "olive oil", &SearchOptions::default());
    assert_eq!(titles(outcome.documents()), vec!["Interview: A Catalan Chef"]);
}

#[test]
fn test_title_and_text_matches_keep_index_order() {
    // "cat" is in Episode One's text and in "Catalan" in the third title
    let index = episode_index();
    let outcome = search(&index, "cat", &SearchOptions::default());
    assert_eq!(
        titles(outcome.documents()),
        vec!["Episode One", "Interview: A Catalan Chef"]
    );
}

#[test]
fn test_query_case_is_ignored() {
    let index = episode_index();
    let lower = search(&index, "rust", &SearchOptions::default());
    let upper = search(&index, "RUST", &SearchOptions::default());
    let mixed = search(&index, "RuSt", &SearchOptions::default());
    assert_eq!(titles(lower.documents()), vec!["The Rust Episode"]);
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn test_match_spans_word_boundaries() {
    let index = episode_index();
    let outcome = search(&index, "e rust ep", &SearchOptions::default());
    assert_eq!(titles(outcome.documents()), vec!["The Rust Episode"]);
}

#[test]
fn test_surrounding_whitespace_is_part_of_the_query() {
    let index = episode_index();
    // " rust" occurs in "the rust episode", "rust  " does not
    let leading = search(&index, " rust", &SearchOptions::default());
    assert_eq!(leading.documents().len(), 1);
    assert!(search(&index, "rust  ", &SearchOptions::default())
        .documents()
        .is_empty());
}

#[test]
fn test_feed_label_is_not_searched() {
    let index = episode_index();
    assert!(search(&index, "showb", &SearchOptions::default())
        .documents()
        .is_empty());
}

#[test]
fn test_reordered_index_reorders_results() {
    let mut docs = episodes();
    docs.reverse();
    let index = SearchIndex::new(docs);
    let outcome = search(&index, "cat", &SearchOptions::default());
    assert_eq!(
        titles(outcome.documents()),
        vec!["Interview: A Catalan Chef", "Episode One"]
    );
}

#[test]
fn test_limit_option_caps_results() {
    let index = episode_index();
    let options = SearchOptions {
        max_results: 2,
        ..SearchOptions::default()
    };
    // "e " ends a word in most titles and texts
    let outcome = search(&index, "e ", &options);
    assert_eq!(outcome.documents().len(), 2);
    assert_eq!(outcome.documents()[0].title, "Episode One");
}
