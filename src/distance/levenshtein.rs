//! Levenshtein distance.

use crate::util::numeric::{min3, normalized_similarity};
use crate::util::sequence::CharSeq;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one string into the other.
/// Only one row of the edit matrix is kept, sized by the shorter input.
pub fn distance(a: &str, b: &str) -> usize {
    seq_distance(&CharSeq::new(a), &CharSeq::new(b))
}

/// [`distance`] over already decoded sequences.
pub fn seq_distance(a: &[char], b: &[char]) -> usize {
    // Iterate over the longer sequence so the row tracks the shorter one.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, &lc) in long.iter().enumerate() {
        // `diagonal` holds the value of the previous row at column j - 1.
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            let above = row[j + 1];

            row[j + 1] = min3(
                above + 1,       // deletion
                row[j] + 1,      // insertion
                diagonal + cost, // substitution
            );
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Levenshtein distance normalized to a similarity in `[0, 1]`.
///
/// 1.0 means identical strings, 0.0 means nothing could be kept.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = CharSeq::new(a);
    let b = CharSeq::new(b);
    normalized_similarity(seq_distance(&a, &b), a.len(), b.len())
}
