//! Keyword filter over collected records.

use tracing::info;

use crate::record::Anecdote;

/// Returns at most `limit` records whose body contains `term`
/// case-insensitively, in their original order.
///
/// The category field is ignored for matching but retained in the returned
/// records. An empty result is a valid outcome, not an error.
pub fn find_matching<'a>(records: &'a [Anecdote], term: &str, limit: usize) -> Vec<&'a Anecdote> {
    let needle = term.to_lowercase();
    let mut matches: Vec<&Anecdote> = records
        .iter()
        .filter(|record| record.body.to_lowercase().contains(&needle))
        .collect();
    info!(term, total = matches.len(), "keyword filter finished");
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Anecdote> {
        vec![
            Anecdote::new("Animals", "A cat walks into a bar"),
            Anecdote::new("Work", "The deadline was yesterday"),
            Anecdote::new("Animals", "Another CAT story"),
            Anecdote::new("Cats", "This one is about dogs"),
        ]
    }

    #[test]
    fn matches_are_case_insensitive() {
        let records = sample();
        let hits = find_matching(&records, "cat", 10);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].body, "A cat walks into a bar");
        assert_eq!(hits[1].body, "Another CAT story");
    }

    #[test]
    fn category_is_not_searched() {
        let records = sample();
        // "Cats" appears only as a category; no body contains it.
        let hits = find_matching(&records, "cats", 10);
        assert!(hits.is_empty());
    }

    #[test]
    fn at_most_limit_results_in_original_order() {
        let records: Vec<Anecdote> = (0..10)
            .map(|i| Anecdote::new("N", format!("joke number {i}")))
            .collect();
        let hits = find_matching(&records, "joke", 3);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].body, "joke number 0");
        assert_eq!(hits[1].body, "joke number 1");
        assert_eq!(hits[2].body, "joke number 2");
    }

    #[test]
    fn no_match_yields_empty() {
        let records = sample();
        assert!(find_matching(&records, "quantum", 5).is_empty());
    }
}
