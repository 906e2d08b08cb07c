//! LIKE pattern construction for the substring stage

/// Characters with wildcard meaning in a SQL LIKE pattern.
const LIKE_WILDCARDS: [char; 2] = ['%', '_'];

/// Wrap `query` as `%query%` after dropping any LIKE wildcard characters it
/// contains, so user input can only ever match literally.
pub fn like_pattern(query: &str) -> String {
    let literal: String = query
        .chars()
        .filter(|c| !LIKE_WILDCARDS.contains(c))
        .collect();
    format!("%{literal}%")
}
