//! Search is a pure function of (index, query): no keystroke history.

use super::common::{episode_index, episodes, loaded_widget, titles};
use podsift::{search, SearchIndex, SearchOptions};

#[test]
fn test_repeated_queries_agree() {
    let index = episode_index();
    let options = SearchOptions::default();
    let first = search(&index, "show", &options);
    for _ in 0..5 {
        assert_eq!(search(&index, "show", &options), first);
    }
}

#[test]
fn test_rebuilt_index_gives_same_results() {
    let a = SearchIndex::new(episodes());
    let b = SearchIndex::new(episodes());
    let options = SearchOptions::default();
    for query in ["ca", "the", "episode", "zzz"] {
        assert_eq!(
            titles(search(&a, query, &options).documents()),
            titles(search(&b, query, &options).documents()),
        );
    }
}

#[test]
fn test_query_sequence_does_not_leak_between_keystrokes() {
    // Typing "c", "ca", "cat" must end where typing "cat" directly ends
    let mut typed = loaded_widget(episodes());
    for prefix in ["c", "ca", "cat"] {
        typed.on_query_changed(prefix);
    }

    let mut direct = loaded_widget(episodes());
    direct.on_query_changed("cat");

    assert_eq!(typed.region().content, direct.region().content);
    assert_eq!(typed.state(), direct.state());
}

#[test]
fn test_backspacing_widens_results_again() {
    let mut widget = loaded_widget(episodes());
    let narrow = widget.on_query_changed("catalan");
    let wide = widget.on_query_changed("ca");
    assert_eq!(narrow, 1);
    assert!(wide > narrow);
}
