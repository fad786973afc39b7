//! Typo classification on top of the individual algorithms.
//!
//! [`TypoClassifier`] is the single evaluation contract of the crate: it runs
//! one configured [`Algorithm`], maps its output onto a similarity in
//! `[0, 1]` and compares that against a threshold. Distance-valued algorithms
//! are normalized here as `1 - distance / max(|a|, |b|)`; the distance
//! functions themselves stay raw.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corpus::CorpusIndex;
use crate::distance::{damerau, levenshtein};
use crate::error::{Result, TypoError};
use crate::ngram::validate_gram_width;
use crate::similarity::{cosine, jaro};
use crate::util::numeric::normalized_similarity;
use crate::util::sequence::CharSeq;

/// The scoring strategies a classifier can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Levenshtein edit distance.
    Levenshtein,
    /// Unrestricted Damerau-Levenshtein distance.
    DamerauLevenshtein,
    /// Jaro similarity.
    Jaro,
    /// Jaro-Winkler similarity.
    JaroWinkler,
    /// Cosine similarity of n-gram frequency vectors.
    Cosine,
    /// Cosine similarity of IDF-weighted n-gram vectors; needs a corpus.
    TfIdf,
}

impl Algorithm {
    /// Every algorithm, in a stable order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Levenshtein,
        Algorithm::DamerauLevenshtein,
        Algorithm::Jaro,
        Algorithm::JaroWinkler,
        Algorithm::Cosine,
        Algorithm::TfIdf,
    ];

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::DamerauLevenshtein => "damerau_levenshtein",
            Algorithm::Jaro => "jaro",
            Algorithm::JaroWinkler => "jaro_winkler",
            Algorithm::Cosine => "cosine",
            Algorithm::TfIdf => "tf_idf",
        }
    }

    /// Whether the raw output is an edit distance rather than a similarity.
    pub fn is_distance(&self) -> bool {
        matches!(
            self,
            Algorithm::Levenshtein | Algorithm::DamerauLevenshtein
        )
    }

    /// Whether the algorithm needs a [`CorpusIndex`].
    pub fn requires_corpus(&self) -> bool {
        matches!(self, Algorithm::TfIdf)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for the typo classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Algorithm used for scoring.
    pub algorithm: Algorithm,
    /// Minimum normalized score (0.0 to 1.0) for a pair to count as a typo.
    pub threshold: f64,
    /// Gram width for cosine similarity.
    pub gram_width: usize,
    /// Maximum number of candidates returned by [`TypoClassifier::rank`].
    pub max_suggestions: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            algorithm: Algorithm::JaroWinkler,
            threshold: 0.8,
            gram_width: 2,
            max_suggestions: 5,
        }
    }
}

impl ClassifierConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(TypoError::invalid_argument(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        validate_gram_width(self.gram_width)?;
        if self.max_suggestions == 0 {
            return Err(TypoError::config("max_suggestions must be at least 1"));
        }
        Ok(())
    }
}

/// Raw and normalized output of one algorithm on one pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The algorithm that produced the values.
    pub algorithm: Algorithm,
    /// Raw output: an edit distance or a similarity.
    pub value: f64,
    /// Similarity in `[0, 1]`.
    pub score: f64,
}

/// Outcome of classifying an input against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Input and target are the same string.
    ///
    /// Decided on the strings alone: the score may still fall below the
    /// threshold, e.g. under cosine scoring of strings shorter than the gram
    /// width, so `Exact` does not imply that [`TypoClassifier::is_typo`] holds.
    Exact,
    /// Different strings whose score reaches the threshold.
    Typo,
    /// Score below the threshold.
    Distinct,
}

/// Full classification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The classified input.
    pub input: String,
    /// The target it was compared against.
    pub target: String,
    /// Algorithm used.
    pub algorithm: Algorithm,
    /// Normalized score.
    pub score: f64,
    /// Threshold applied.
    pub threshold: f64,
    /// Resulting verdict.
    pub verdict: Verdict,
}

/// A candidate that scored at or above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The candidate string.
    pub candidate: String,
    /// Normalized score against the input.
    pub score: f64,
}

impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher scores come first, then candidates in lexical order
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.candidate.cmp(&other.candidate))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Threshold-based typo classifier.
///
/// The classifier borrows its corpus, so a single [`CorpusIndex`] can back
/// any number of classifiers.
#[derive(Debug, Clone)]
pub struct TypoClassifier<'a> {
    config: ClassifierConfig,
    corpus: Option<&'a CorpusIndex>,
}

impl<'a> TypoClassifier<'a> {
    /// Create a classifier without a corpus.
    ///
    /// Fails if the configuration is invalid or asks for TF-IDF scoring.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a classifier that scores TF-IDF against `corpus`.
    pub fn with_corpus(config: ClassifierConfig, corpus: &'a CorpusIndex) -> Result<Self> {
        Self::build(config, Some(corpus))
    }

    fn build(config: ClassifierConfig, corpus: Option<&'a CorpusIndex>) -> Result<Self> {
        config.validate()?;
        if config.algorithm.requires_corpus() && corpus.is_none() {
            return Err(TypoError::invalid_argument(format!(
                "{} scoring requires a corpus index",
                config.algorithm
            )));
        }
        Ok(TypoClassifier { config, corpus })
    }

    /// The active configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Run the configured algorithm on `input` and `target`.
    pub fn measure(&self, input: &str, target: &str) -> Result<Measurement> {
        let algorithm = self.config.algorithm;

        let (value, score) = match algorithm {
            Algorithm::Levenshtein | Algorithm::DamerauLevenshtein => {
                let a = CharSeq::new(input);
                let b = CharSeq::new(target);
                let distance = if algorithm == Algorithm::Levenshtein {
                    levenshtein::seq_distance(&a, &b)
                } else {
                    damerau::seq_distance(&a, &b)
                };
                (
                    distance as f64,
                    normalized_similarity(distance, a.len(), b.len()),
                )
            }
            Algorithm::Jaro => {
                let s = jaro::jaro(input, target);
                (s, s)
            }
            Algorithm::JaroWinkler => {
                let s = jaro::jaro_winkler(input, target);
                (s, s)
            }
            Algorithm::Cosine => {
                let s = cosine::similarity(input, target, self.config.gram_width)?;
                (s, s)
            }
            Algorithm::TfIdf => {
                let corpus = self.corpus.ok_or_else(|| {
                    TypoError::invalid_argument("tf_idf scoring requires a corpus index")
                })?;
                let s = corpus.similarity(input, target);
                (s, s)
            }
        };

        trace!("{algorithm} {input:?} vs {target:?}: value={value} score={score}");

        Ok(Measurement {
            algorithm,
            value,
            score,
        })
    }

    /// Normalized similarity of `input` and `target` in `[0, 1]`.
    pub fn score(&self, input: &str, target: &str) -> Result<f64> {
        Ok(self.measure(input, target)?.score)
    }

    /// Whether the normalized score reaches the threshold.
    pub fn is_typo(&self, input: &str, target: &str) -> Result<bool> {
        Ok(self.score(input, target)? >= self.config.threshold)
    }

    /// Classify `input` against `target`.
    pub fn classify(&self, input: &str, target: &str) -> Result<Classification> {
        let score = self.score(input, target)?;
        let verdict = if input == target {
            Verdict::Exact
        } else if score >= self.config.threshold {
            Verdict::Typo
        } else {
            Verdict::Distinct
        };

        Ok(Classification {
            input: input.to_string(),
            target: target.to_string(),
            algorithm: self.config.algorithm,
            score,
            threshold: self.config.threshold,
            verdict,
        })
    }

    /// Candidates scoring at or above the threshold, best first.
    ///
    /// Candidates are scored in parallel. At most `max_suggestions` are
    /// returned; equal scores are ordered by candidate text.
    pub fn rank<S>(&self, input: &str, candidates: &[S]) -> Result<Vec<Suggestion>>
    where
        S: AsRef<str> + Sync,
    {
        let scored: Vec<Suggestion> = candidates
            .par_iter()
            .map(|candidate| {
                let candidate = candidate.as_ref();
                self.score(input, candidate).map(|score| Suggestion {
                    candidate: candidate.to_string(),
                    score,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut suggestions: Vec<Suggestion> = scored
            .into_iter()
            .filter(|s| s.score >= self.config.threshold)
            .collect();
        suggestions.sort();
        suggestions.truncate(self.config.max_suggestions);

        debug!(
            "ranked {} candidates for {:?} with {}: {} kept",
            candidates.len(),
            input,
            self.config.algorithm,
            suggestions.len()
        );

        Ok(suggestions)
    }

    /// The best candidate at or above the threshold, if any.
    pub fn best_match<S>(&self, input: &str, candidates: &[S]) -> Result<Option<Suggestion>>
    where
        S: AsRef<str> + Sync,
    {
        Ok(self.rank(input, candidates)?.into_iter().next())
    }
}

/// Whether `input` looks like a typo of `target` under Jaro-Winkler.
///
/// Fails if `threshold` lies outside `[0, 1]`.
pub fn is_typo(input: &str, target: &str, threshold: f64) -> Result<bool> {
    let config = ClassifierConfig {
        threshold,
        ..Default::default()
    };
    TypoClassifier::new(config)?.is_typo(input, target)
}
