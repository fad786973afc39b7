//! # typomatch
//!
//! A string-similarity toolkit for typo detection and fuzzy matching of short
//! strings such as usernames, SKUs and search queries.
//!
//! ## Algorithms
//!
//! - Levenshtein and unrestricted Damerau-Levenshtein edit distance
//! - Jaro and Jaro-Winkler similarity
//! - Cosine similarity of n-gram frequency vectors
//! - TF-IDF cosine similarity against a reference corpus
//!
//! Every algorithm indexes strings by code point. [`TypoClassifier`] wraps any
//! of them behind one threshold-based contract.
//!
//! ```
//! use typomatch::classifier::is_typo;
//! use typomatch::distance::{damerau, levenshtein};
//!
//! assert_eq!(levenshtein::distance("kitten", "sitting"), 3);
//! assert_eq!(damerau::distance("ab", "ba"), 1);
//! assert!(is_typo("MARHTA", "MARTHA", 0.9).unwrap());
//! ```

pub mod classifier;
pub mod cli;
pub mod corpus;
pub mod distance;
pub mod error;
pub mod ngram;
pub mod similarity;
pub mod util;

pub mod prelude {
    pub use crate::classifier::{
        Algorithm, ClassifierConfig, Classification, Suggestion, TypoClassifier, Verdict, is_typo,
    };
    pub use crate::corpus::CorpusIndex;
    pub use crate::error::{Result, TypoError};
    pub use crate::ngram::{NGramVector, vectorize};
}

pub use classifier::TypoClassifier;
pub use corpus::CorpusIndex;
pub use error::{Result, TypoError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
