//! N-gram vectorization.
//!
//! A string is turned into a sparse frequency vector by sliding a window of
//! `n` code points across it one position at a time.

use ahash::AHashMap;

use crate::error::{Result, TypoError};
use crate::util::numeric::cosine_from_parts;
use crate::util::sequence::CharSeq;

/// Sparse mapping from n-gram to occurrence count.
#[derive(Debug, Clone, Default)]
pub struct NGramVector {
    counts: AHashMap<String, usize>,
}

impl NGramVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        NGramVector {
            counts: AHashMap::new(),
        }
    }

    /// Occurrence count of `gram`, zero when absent.
    pub fn get(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Whether `gram` occurs at least once.
    pub fn contains(&self, gram: &str) -> bool {
        self.counts.contains_key(gram)
    }

    /// Number of distinct grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no gram was produced.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of windows observed.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(gram, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(gram, count)| (gram.as_str(), *count))
    }

    /// Iterate over the distinct grams.
    pub fn grams(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Dot product over the grams both vectors share.
    pub fn dot(&self, other: &NGramVector) -> f64 {
        // Probe the larger map with the smaller one.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .counts
            .iter()
            .filter_map(|(gram, &count)| {
                large
                    .counts
                    .get(gram)
                    .map(|&other_count| count as f64 * other_count as f64)
            })
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&count| (count as f64) * (count as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine of the angle between the two vectors, `0.0` if either is empty.
    pub fn cosine(&self, other: &NGramVector) -> f64 {
        cosine_from_parts(self.dot(other), self.norm(), other.norm())
    }

    fn increment(&mut self, gram: String) {
        *self.counts.entry(gram).or_insert(0) += 1;
    }
}

/// Check that `n` is a usable gram width.
pub fn validate_gram_width(n: usize) -> Result<()> {
    if n == 0 {
        return Err(TypoError::invalid_argument(
            "gram width must be a positive integer",
        ));
    }
    Ok(())
}

/// Count every n-gram of width `n` in `s`.
///
/// Fails with [`TypoError::InvalidArgument`] when `n` is zero. A string
/// shorter than `n` code points has no grams and yields an empty vector.
pub fn vectorize(s: &str, n: usize) -> Result<NGramVector> {
    validate_gram_width(n)?;
    Ok(seq_vectorize(&CharSeq::new(s), n))
}

/// [`vectorize`] over an already decoded sequence; `n` must be positive.
pub(crate) fn seq_vectorize(seq: &[char], n: usize) -> NGramVector {
    let mut vector = NGramVector::new();
    if n == 0 || n > seq.len() {
        return vector;
    }

    for window in seq.windows(n) {
        vector.increment(window.iter().collect());
    }

    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectorize_bigrams() {
        let vector = vectorize("banana", 2).unwrap();

        assert_eq!(vector.len(), 3);
        assert_eq!(vector.get("ba"), 1);
        assert_eq!(vector.get("an"), 2);
        assert_eq!(vector.get("na"), 2);
        assert_eq!(vector.get("nb"), 0);
        assert_eq!(vector.total(), 5);

        let mut pairs: Vec<(&str, usize)> = vector.iter().collect();
        pairs.sort();
        assert_eq!(pairs, [("an", 2), ("ba", 1), ("na", 2)]);
    }

    #[test]
    fn test_vectorize_zero_width_is_invalid() {
        let err = vectorize("abc", 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_vectorize_width_exceeds_length() {
        let vector = vectorize("ab", 5).unwrap();
        assert!(vector.is_empty());
        assert_eq!(vector.norm(), 0.0);

        assert!(vectorize("", 1).unwrap().is_empty());
    }

    #[test]
    fn test_vectorize_whole_string() {
        let vector = vectorize("abc", 3).unwrap();
        assert_eq!(vector.len(), 1);
        assert!(vector.contains("abc"));
    }

    #[test]
    fn test_vectorize_multibyte() {
        let vector = vectorize("größe", 2).unwrap();
        assert_eq!(vector.total(), 4);
        assert_eq!(vector.get("öß"), 1);
    }

    #[test]
    fn test_dot_and_norm() {
        let a = vectorize("aab", 1).unwrap();
        let b = vectorize("abb", 1).unwrap();

        assert!((a.dot(&b) - 4.0).abs() < 1e-9);
        assert!((a.norm() - 5.0_f64.sqrt()).abs() < 1e-9);
        assert!((a.cosine(&b) - 0.8).abs() < 1e-9);
        assert_eq!(a.cosine(&NGramVector::new()), 0.0);
    }
}
