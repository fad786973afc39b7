//! Jaro and Jaro-Winkler similarity.

use crate::util::numeric::clamp_unit;
use crate::util::sequence::CharSeq;

/// Maximum number of leading characters that earn the Winkler bonus.
pub const MAX_PREFIX: usize = 4;

/// Bonus per shared leading character.
pub const PREFIX_SCALE: f64 = 0.1;

/// Calculate the Jaro similarity between two strings.
///
/// Equal strings (including two empty strings) score 1.0; strings with no
/// matching characters inside the match window score 0.0.
pub fn jaro(a: &str, b: &str) -> f64 {
    seq_jaro(&CharSeq::new(a), &CharSeq::new(b))
}

/// [`jaro`] over already decoded sequences.
#[allow(clippy::needless_range_loop)]
pub fn seq_jaro(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 1.0;
    }

    let len_a = a.len();
    let len_b = b.len();
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let window = (len_a.max(len_b) / 2).saturating_sub(1).max(1);

    let mut a_matched = vec![false; len_a];
    let mut b_matched = vec![false; len_b];
    let mut matches = 0usize;

    for i in 0..len_a {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len_b);

        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both sides' matched characters in their original order.
    let a_chars = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_chars = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let half_transpositions = a_chars.zip(b_chars).filter(|(x, y)| x != y).count();
    let transpositions = half_transpositions as f64 / 2.0;

    let m = matches as f64;
    let score = (m / len_a as f64 + m / len_b as f64 + (m - transpositions) / m) / 3.0;

    clamp_unit(score)
}

/// Calculate the Jaro-Winkler similarity between two strings.
///
/// Adds `prefix_len * 0.1 * (1 - jaro)` to the Jaro score, where `prefix_len`
/// is the number of equal leading characters, capped at four.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    seq_jaro_winkler(&CharSeq::new(a), &CharSeq::new(b))
}

/// [`jaro_winkler`] over already decoded sequences.
pub fn seq_jaro_winkler(a: &CharSeq, b: &CharSeq) -> f64 {
    let jaro_score = seq_jaro(a, b);
    let prefix_len = a.common_prefix_len(b, MAX_PREFIX) as f64;

    clamp_unit(jaro_score + prefix_len * PREFIX_SCALE * (1.0 - jaro_score))
}
