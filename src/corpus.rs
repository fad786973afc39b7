//! Corpus-aware TF-IDF similarity.
//!
//! A [`CorpusIndex`] is built once from a reference corpus. Construction
//! vectorizes every document, counts in how many documents each n-gram
//! occurs and derives an inverse document frequency for it:
//!
//! ```text
//! idf(gram) = ln(total_documents / documents_containing(gram))
//! ```
//!
//! After construction nothing inside the index changes, so a shared reference
//! (or an `Arc`) can be read from any number of threads without locking.
//!
//! Similarity between two strings weighs each distinct gram of a string by
//! its IDF and takes the cosine of the resulting vectors. Grams the corpus
//! never saw weigh zero. The gram width configured at construction is used
//! for every lookup.

use ahash::AHashMap;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypoError};
use crate::ngram::{NGramVector, seq_vectorize, validate_gram_width};
use crate::util::numeric::cosine_from_parts;
use crate::util::sequence::CharSeq;

/// Sparse mapping from n-gram to IDF weight.
#[derive(Debug, Clone, Default)]
pub struct WeightedVector {
    weights: AHashMap<String, f64>,
}

impl WeightedVector {
    /// Weight of `gram`, zero when absent.
    pub fn get(&self, gram: &str) -> f64 {
        self.weights.get(gram).copied().unwrap_or(0.0)
    }

    /// Number of distinct grams.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the vector has no grams.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Dot product over the grams both vectors share.
    pub fn dot(&self, other: &WeightedVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .weights
            .iter()
            .filter_map(|(gram, weight)| large.weights.get(gram).map(|w| weight * w))
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Cosine of the angle between the two vectors, `0.0` on zero magnitude.
    pub fn cosine(&self, other: &WeightedVector) -> f64 {
        cosine_from_parts(self.dot(other), self.norm(), other.norm())
    }
}

/// A corpus document ranked against a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// Position of the document in the corpus.
    pub index: usize,
    /// The document text.
    pub document: String,
    /// TF-IDF cosine similarity to the query.
    pub score: f64,
}

/// Immutable IDF table built from a reference corpus.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    gram_width: usize,
    documents: Vec<String>,
    idf: AHashMap<String, f64>,
    /// Weighted vector of each document, aligned with `documents`.
    document_vectors: Vec<WeightedVector>,
}

impl CorpusIndex {
    /// Build an index over `corpus` using grams of width `gram_width`.
    ///
    /// Fails with [`TypoError::InvalidArgument`] if the corpus is empty or the
    /// gram width is zero.
    pub fn new<I, S>(corpus: I, gram_width: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        validate_gram_width(gram_width)?;

        let documents: Vec<String> = corpus.into_iter().map(Into::into).collect();
        if documents.is_empty() {
            return Err(TypoError::invalid_argument(
                "corpus must contain at least one document",
            ));
        }

        let vectors: Vec<NGramVector> = documents
            .iter()
            .map(|doc| seq_vectorize(&CharSeq::new(doc), gram_width))
            .collect();

        let mut document_frequency: AHashMap<&str, usize> = AHashMap::new();
        for vector in &vectors {
            for gram in vector.grams() {
                *document_frequency.entry(gram).or_insert(0) += 1;
            }
        }

        let total = documents.len() as f64;
        let idf: AHashMap<String, f64> = document_frequency
            .into_iter()
            .map(|(gram, df)| (gram.to_string(), (total / df as f64).ln()))
            .collect();

        debug!(
            "built corpus index: {} documents, {} distinct {}-grams",
            documents.len(),
            idf.len(),
            gram_width
        );

        let mut index = CorpusIndex {
            gram_width,
            documents,
            idf,
            document_vectors: Vec::new(),
        };
        let document_vectors = vectors.iter().map(|vector| index.weigh(vector)).collect();
        index.document_vectors = document_vectors;

        Ok(index)
    }

    /// Gram width used for construction and lookup.
    pub fn gram_width(&self) -> usize {
        self.gram_width
    }

    /// Number of documents in the corpus.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct grams seen in the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// The corpus documents, in the order they were supplied.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// IDF of `gram`, or `None` if no document contains it.
    pub fn idf(&self, gram: &str) -> Option<f64> {
        self.idf.get(gram).copied()
    }

    /// IDF-weighted vector of `s`: one entry per distinct gram, valued by its IDF.
    pub fn weighted_vector(&self, s: &str) -> WeightedVector {
        self.weigh(&seq_vectorize(&CharSeq::new(s), self.gram_width))
    }

    /// TF-IDF cosine similarity of `a` and `b`, in `[0, 1]`.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.weighted_vector(a).cosine(&self.weighted_vector(b))
    }

    /// The `limit` corpus documents most similar to `query`.
    ///
    /// Documents scoring zero are left out. Ties keep corpus order.
    pub fn closest(&self, query: &str, limit: usize) -> Vec<ScoredDocument> {
        let query_vector = self.weighted_vector(query);

        let mut scored: Vec<(usize, f64)> = self
            .document_vectors
            .par_iter()
            .enumerate()
            .map(|(i, vector)| (i, query_vector.cosine(vector)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(limit);

        debug!(
            "closest documents for {:?}: {} of {} scored above zero",
            query,
            scored.len(),
            self.documents.len()
        );

        scored
            .into_iter()
            .map(|(index, score)| ScoredDocument {
                index,
                document: self.documents[index].clone(),
                score,
            })
            .collect()
    }

    fn weigh(&self, vector: &NGramVector) -> WeightedVector {
        let weights = vector
            .grams()
            .map(|gram| (gram.to_string(), self.idf(gram).unwrap_or(0.0)))
            .collect();
        WeightedVector { weights }
    }
}
