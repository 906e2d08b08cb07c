//! Levenshtein edit distance
//!
//! Strict single-character edits (insert, delete, substitute) at cost 1 each.
//! No transposition. Strings are compared as sequences of Unicode scalar
//! values so multi-byte text counts one edit per character.

/// Edit distance between `a` and `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // (len(a)+1) x (len(b)+1) cost table, row-major.
    let width = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * width];

    for (i, row) in table.chunks_exact_mut(width).enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[..width].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let deletion = table[(i - 1) * width + j] + 1;
            let insertion = table[i * width + j - 1] + 1;
            let substitution = table[(i - 1) * width + j - 1] + cost;
            table[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    table[a.len() * width + b.len()]
}
