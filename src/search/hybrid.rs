//! Merge of fuzzy and substring results

use std::collections::HashSet;

use super::SearchResult;

/// Merge both result lists into one ranked list of at most `cap` entries.
///
/// Fuzzy hits are inserted first and win on id collision; substring hits
/// are only added for ids not yet present. The merged list is then sorted by
/// score, descending, with an absent score counting as 0. The sort is stable,
/// so substring-only hits keep their post-merge order behind every scored
/// fuzzy hit.
pub fn merge_results(
    fuzzy: Vec<SearchResult>,
    exact: Vec<SearchResult>,
    cap: usize,
) -> Vec<SearchResult> {
    let mut seen = HashSet::with_capacity(fuzzy.len() + exact.len());
    let mut merged = Vec::with_capacity(fuzzy.len() + exact.len());

    for result in fuzzy.into_iter().chain(exact) {
        if seen.insert(result.id()) {
            merged.push(result);
        }
    }

    merged.sort_by(|a, b| b.rank_score().total_cmp(&a.rank_score()));
    merged.truncate(cap);
    merged
}
