//! Edit-distance algorithms.
//!
//! Both algorithms count whole code points, never bytes, and return a plain
//! `usize`. Use [`crate::util::numeric::normalized_similarity`] (or the
//! per-module `similarity` helpers) to map a distance onto `[0, 1]`.

pub mod damerau;
pub mod levenshtein;
