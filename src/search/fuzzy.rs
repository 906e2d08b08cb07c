//! Edit-distance ranking over a candidate pool

use super::levenshtein;
use super::{SearchField, SearchRecord, SearchResult};

/// Relevance for a fuzzy hit: 1.0 at distance 0, decreasing toward 0.
#[allow(clippy::cast_precision_loss)]
pub fn score(distance: usize) -> f64 {
    1.0 / (1.0 + distance as f64)
}

/// Smallest distance between the (already lower-cased) query and the
/// record's fuzzy fields, each lower-cased.
pub fn min_distance(query_lower: &str, record: &SearchRecord) -> usize {
    SearchField::FUZZY
        .iter()
        .map(|field| levenshtein::distance(&field.value(record).to_lowercase(), query_lower))
        .min()
        .unwrap_or(usize::MAX)
}

/// Keep candidates within `max_distance`, closest first (ties keep pool
/// order), at most `cap` of them.
pub fn rank(
    query: &str,
    candidates: Vec<SearchRecord>,
    max_distance: usize,
    cap: usize,
) -> Vec<SearchResult> {
    let query = query.to_lowercase();

    let mut scored: Vec<(usize, SearchRecord)> = candidates
        .into_iter()
        .map(|record| (min_distance(&query, &record), record))
        .filter(|(dist, _)| *dist <= max_distance)
        .collect();

    // Stable: equal distances stay in pool order.
    scored.sort_by_key(|(dist, _)| *dist);
    scored.truncate(cap);

    scored
        .into_iter()
        .map(|(dist, record)| SearchResult::fuzzy(record, dist))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchSource;
    use crate::test_utils::fixtures::record;

    #[test]
    fn score_curve() {
        assert!((score(0) - 1.0).abs() < f64::EPSILON);
        assert!((score(1) - 0.5).abs() < f64::EPSILON);
        assert!((score(3) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn lower_cases_both_sides() {
        let r = record(1, "PERFORATED");
        assert_eq!(min_distance("perforatd", &r), 1);
    }

    #[test]
    fn takes_minimum_over_fields() {
        let mut r = record(1, "CABLE TRAY");
        r.make = Some("Acme".to_string());
        r.size = Some("600".to_string());
        assert_eq!(min_distance("acme", &r), 0);
        assert_eq!(min_distance("601", &r), 1);
    }

    #[test]
    fn serial_and_code_not_compared() {
        let mut r = record(1, "zzzzzzzzzz");
        r.serial_no = Some("acme".to_string());
        r.order_code = Some("acme".to_string());
        assert!(min_distance("acme", &r) > 3);
    }

    #[test]
    fn threshold_is_inclusive() {
        let three = record(1, "tray");
        let four = record(2, "bend");
        let hits = rank("trxxx", vec![three, four], 3, 50);
        // "trxxx" is 3 edits from "tray" and 5 from "bend".
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), 1);

        let hits = rank("abcd", vec![record(3, "wxyd"), record(4, "wxyz")], 3, 50);
        assert_eq!(hits.iter().map(SearchResult::id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn stable_order_on_ties_and_cap() {
        let candidates = vec![
            record(1, "bendx"),
            record(2, "bending"),
            record(3, "bendy"),
            record(4, "bend"),
        ];
        let hits = rank("bend", candidates, 3, 3);
        let ids: Vec<i64> = hits.iter().map(SearchResult::id).collect();
        assert_eq!(ids, vec![4, 1, 3]);
        assert!(hits.iter().all(|h| h.source == MatchSource::Fuzzy));
    }
}
