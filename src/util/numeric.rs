//! Numeric helpers shared by the distance and similarity algorithms.

/// Minimum of three values.
#[inline]
pub fn min3(a: usize, b: usize, c: usize) -> usize {
    a.min(b).min(c)
}

/// Convert an edit distance into a similarity in `[0, 1]`.
///
/// Computed as `1 - distance / max(len_a, len_b)`. Two empty strings are
/// identical and score `1.0`.
pub fn normalized_similarity(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }

    clamp_unit(1.0 - distance as f64 / max_len as f64)
}

/// Cosine from a precomputed dot product and the two vector norms.
///
/// A zero-magnitude vector has no direction; the cosine is defined as `0.0`
/// in that case instead of dividing by zero.
pub fn cosine_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    clamp_unit(dot / (norm_a * norm_b))
}

/// Clamp a score to `[0, 1]`, mapping NaN to `0.0`.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
