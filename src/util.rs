//! Shared utility modules used across the similarity algorithms.

pub mod numeric;
pub mod sequence;
