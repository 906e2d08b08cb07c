use std::collections::HashSet;

use proptest::prelude::*;

use traytrack::test_utils::fixtures::{MemoryStore, record};
use traytrack::{MatchSource, SearchEngine};

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z]{1,8}(-[A-Z0-9]{1,4})?", 0..150)
}

fn store_from(labels: &[String]) -> MemoryStore {
    let records = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| record(idx as i64 + 1, label))
        .collect();
    MemoryStore::new(records)
}

proptest! {
    #[test]
    fn test_results_bounded_and_unique(labels in labels(), query in "[A-Za-z%_]{1,10}") {
        let store = store_from(&labels);
        let results = SearchEngine::new(&store).search(&query).unwrap();

        prop_assert!(results.len() <= 50);
        let ids: HashSet<i64> = results.iter().map(|r| r.id()).collect();
        prop_assert_eq!(ids.len(), results.len());
    }

    #[test]
    fn test_results_sorted_by_score(labels in labels(), query in "[A-Z]{1,8}") {
        let store = store_from(&labels);
        let results = SearchEngine::new(&store).search(&query).unwrap();

        for pair in results.windows(2) {
            prop_assert!(pair[0].rank_score() >= pair[1].rank_score());
        }
        let first_exact = results.iter().position(|r| r.source == MatchSource::Exact);
        if let Some(pos) = first_exact {
            prop_assert!(results[pos..].iter().all(|r| r.source == MatchSource::Exact));
        }
    }

    #[test]
    fn test_fuzzy_scores_within_threshold(labels in labels(), query in "[A-Z]{1,8}") {
        let store = store_from(&labels);
        let results = SearchEngine::new(&store).search(&query).unwrap();

        for result in results.iter().filter(|r| r.source == MatchSource::Fuzzy) {
            let score = result.score.unwrap();
            prop_assert!((0.25..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_blank_query_never_touches_store(labels in labels(), blank in "[ \t\n]{0,6}") {
        let store = store_from(&labels);
        let results = SearchEngine::new(&store).search(&blank).unwrap();

        prop_assert!(results.is_empty());
        prop_assert_eq!(store.substring_calls(), 0);
        prop_assert_eq!(store.pool_calls(), 0);
    }

    #[test]
    fn test_search_is_deterministic(labels in labels(), query in "[A-Z]{1,8}") {
        let store = store_from(&labels);
        let engine = SearchEngine::new(&store);
        prop_assert_eq!(engine.search(&query).unwrap(), engine.search(&query).unwrap());
    }
}
