//! Similarity measures returning scores in `[0, 1]`.
//!
//! Jaro and Jaro-Winkler work on characters directly. Cosine similarity works
//! on n-gram frequency vectors from [`crate::ngram`]; the corpus-weighted
//! variant lives on [`crate::corpus::CorpusIndex`].

pub mod cosine;
pub mod jaro;
