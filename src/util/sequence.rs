//! Code-point sequences.
//!
//! All algorithms in this crate index strings by Unicode scalar value rather
//! than by byte. [`CharSeq`] is the one place a `&str` is decoded, so a
//! multi-byte character always counts as a single position.

use std::ops::Deref;

/// An indexable sequence of `char`s decoded from a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CharSeq {
    chars: Vec<char>,
}

impl CharSeq {
    /// Decode `s` into code points.
    pub fn new(s: &str) -> Self {
        CharSeq {
            chars: s.chars().collect(),
        }
    }

    /// Length of the common prefix with `other`, capped at `limit`.
    ///
    /// Positions are compared pairwise, so the result does not depend on which
    /// side is `self`.
    pub fn common_prefix_len(&self, other: &CharSeq, limit: usize) -> usize {
        self.chars
            .iter()
            .zip(other.chars.iter())
            .take(limit)
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl Deref for CharSeq {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}
