//! Cosine similarity over n-gram frequency vectors.

use crate::error::Result;
use crate::ngram::{seq_vectorize, validate_gram_width};
use crate::util::sequence::CharSeq;

/// Calculate the cosine similarity of the width-`n` gram vectors of `a` and `b`.
///
/// Fails only when `n` is zero. If either string has fewer than `n`
/// characters its vector has zero magnitude and the similarity is `0.0`.
pub fn similarity(a: &str, b: &str, n: usize) -> Result<f64> {
    validate_gram_width(n)?;

    let va = seq_vectorize(&CharSeq::new(a), n);
    let vb = seq_vectorize(&CharSeq::new(b), n);

    Ok(va.cosine(&vb))
}
