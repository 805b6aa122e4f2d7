//! Chain-code lengths along ordered point sequences.
//!
//! Distances are plain Euclidean norms between consecutive points, so steps
//! are not restricted to the `1` / `sqrt(2)` increments of a Freeman
//! 8-direction code.

use crate::Error;
use crate::geom::Point2d;

/// Length of each segment `points[i] -> points[i + 1]`.
pub fn chain_code_lengths(points: &[Point2d]) -> Vec<f64> {
    points.windows(2).map(|w| w[1].distance(w[0])).collect()
}

/// Running arc length, `0.0` at index 0. Empty input yields an empty vector.
pub fn cumulative_arc_length(points: &[Point2d]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len());
    if points.is_empty() {
        return out;
    }

    let mut acc = 0.0;
    out.push(acc);
    for w in points.windows(2) {
        acc += w[1].distance(w[0]);
        out.push(acc);
    }
    out
}

/// Rejects empty or decreasing arc-length parametrizations.
pub fn check_arc_length(arc: &[f64]) -> Result<(), Error> {
    if arc.is_empty() {
        return Err(Error::EmptyInput);
    }

    // A NaN entry is reported as a decrease at its own index.
    if arc[0].is_nan() {
        return Err(Error::NonMonotonicArcLength { index: 0 });
    }
    for (i, w) in arc.windows(2).enumerate() {
        if w[1].is_nan() || w[1] < w[0] {
            return Err(Error::NonMonotonicArcLength { index: i + 1 });
        }
    }
    Ok(())
}
