//! Runtime contracts for the query engine.
//!
//! Debug-mode assertions that verify what every query result must satisfy.
//! They cost nothing in release builds (the bodies sit behind
//! `cfg!(debug_assertions)`), and they catch a broken filter the moment a
//! test or a dev build runs it.
//!
//! | Contract                 | Property                                           |
//! |--------------------------|----------------------------------------------------|
//! | `check_results_bounded`  | `results.len() <= max_results`                     |
//! | `check_results_match`    | every result's title or text contains the query    |
//! | `check_order_preserved`  | results appear in strictly increasing index order  |
//! | `check_prefix_complete`  | no matching document was skipped before the last result |
//!
//! # Usage
//!
//! ```ignore
//! use podsift::contracts::*;
//!
//! // In debug builds, this panics if any contract is violated
//! check_search_results(&index, &query, &results, options.max_results);
//! ```

use crate::types::{SearchDocument, SearchIndex};

/// Check that no more than `max_results` documents came back.
#[inline]
pub fn check_results_bounded(results: &[&SearchDocument], max_results: usize) {
    debug_assert!(
        results.len() <= max_results,
        "Contract violation: {} results exceed cap {}",
        results.len(),
        max_results
    );
}

/// Check that every result satisfies the match predicate.
#[inline]
pub fn check_results_match(results: &[&SearchDocument], query_lower: &str) {
    for (i, doc) in results.iter().enumerate() {
        debug_assert!(
            doc.title.to_lowercase().contains(query_lower)
                || doc.text.to_lowercase().contains(query_lower),
            "Contract violation: results[{}] '{}' does not contain '{}'",
            i,
            doc.title,
            query_lower
        );
    }
}

/// Position of a result within the index, by identity.
fn position_in(index: &SearchIndex, doc: &SearchDocument) -> Option<usize> {
    index
        .entries()
        .iter()
        .position(|entry| std::ptr::eq(&entry.doc, doc))
}

/// Check that results are drawn from the index in index order.
pub fn check_order_preserved(index: &SearchIndex, results: &[&SearchDocument]) {
    let mut last: Option<usize> = None;
    for (i, doc) in results.iter().enumerate() {
        let position = position_in(index, doc);
        debug_assert!(
            position.is_some(),
            "Contract violation: results[{}] is not an entry of the index",
            i
        );
        if let (Some(prev), Some(curr)) = (last, position) {
            debug_assert!(
                prev < curr,
                "Contract violation: results[{}] at index {} does not follow index {}",
                i,
                curr,
                prev
            );
        }
        last = position.or(last);
    }
}

/// Check that the results are exactly the first matches in index order.
pub fn check_prefix_complete(index: &SearchIndex, results: &[&SearchDocument], query_lower: &str) {
    let Some(last) = results.last().and_then(|doc| position_in(index, doc)) else {
        return;
    };
    let expected = index.entries()[..=last]
        .iter()
        .filter(|entry| entry.matches(query_lower))
        .count();
    debug_assert_eq!(
        expected,
        results.len(),
        "Contract violation: {} documents match before index {}, but {} were returned",
        expected,
        last,
        results.len()
    );
}

/// Run every query contract. No-op in release builds.
#[inline]
pub fn check_search_results(
    index: &SearchIndex,
    query_lower: &str,
    results: &[&SearchDocument],
    max_results: usize,
) {
    if cfg!(debug_assertions) {
        check_results_bounded(results, max_results);
        check_results_match(results, query_lower);
        check_order_preserved(index, results);
        check_prefix_complete(index, results, query_lower);
    }
}
