//! Damerau-Levenshtein distance, unrestricted (Lowrance-Wagner) variant.
//!
//! Unlike optimal string alignment, a transposed pair may be edited again
//! afterwards, so `"ca" -> "abc"` costs 2 rather than 3. The full matrix is
//! required: the transposition term looks back to arbitrary earlier rows.

use ahash::AHashMap;

use crate::util::numeric::{min3, normalized_similarity};
use crate::util::sequence::CharSeq;

/// Calculate the Damerau-Levenshtein distance between two strings.
///
/// Insertions, deletions, substitutions and transpositions of two characters
/// (adjacent or not) each count as one edit.
pub fn distance(a: &str, b: &str) -> usize {
    seq_distance(&CharSeq::new(a), &CharSeq::new(b))
}

/// [`distance`] over already decoded sequences.
#[allow(clippy::needless_range_loop)]
pub fn seq_distance(a: &[char], b: &[char]) -> usize {
    let len_a = a.len();
    let len_b = b.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    // Row/column 0 hold the sentinel, row/column 1 the empty-prefix distances,
    // so d[i + 1][j + 1] is the distance between a[..i] and b[..j].
    let max_dist = len_a + len_b;
    let mut d = vec![vec![0usize; len_b + 2]; len_a + 2];

    d[0][0] = max_dist;
    for i in 0..=len_a {
        d[i + 1][0] = max_dist;
        d[i + 1][1] = i;
    }
    for j in 0..=len_b {
        d[0][j + 1] = max_dist;
        d[1][j + 1] = j;
    }

    // Last row (1-based) in which each character of `a` was seen.
    let mut last_row_for_char: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=len_a {
        let mut last_match_col = 0;

        for j in 1..=len_b {
            let i1 = last_row_for_char.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let edit = min3(
                d[i][j] + cost,  // substitution
                d[i + 1][j] + 1, // insertion
                d[i][j + 1] + 1, // deletion
            );
            let transposition = d[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1);

            d[i + 1][j + 1] = edit.min(transposition);
        }

        last_row_for_char.insert(a[i - 1], i);
    }

    d[len_a + 1][len_b + 1]
}

/// Damerau-Levenshtein distance normalized to a similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = CharSeq::new(a);
    let b = CharSeq::new(b);
    normalized_similarity(seq_distance(&a, &b), a.len(), b.len())
}
