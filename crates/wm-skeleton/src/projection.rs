//! Normal-vector projection matching for interior side1 points.
//!
//! For a side1 point with unit normal `n`, each side2 candidate `j` in the
//! search window scores `dp[j] = dir(i, j) . n`, where `dir` is the unit
//! vector from the candidate to the side1 point. The sign of `dp` depends on
//! which side of the body side1 is, so it is flipped to make the best
//! opposing candidate a minimum. The flip is voted per frame.

use tracing::debug;
use wm_core::Vec2d;

use crate::cross::CrossDistances;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionSign {
    /// Scores used as computed.
    Negative,
    /// Scores negated before the minimum search.
    Positive,
}

impl ProjectionSign {
    fn factor(self) -> f64 {
        match self {
            Self::Negative => 1.0,
            Self::Positive => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionMatch {
    /// Matched side2 index.
    pub index: usize,
    /// Signed projection score of the match.
    pub value: f64,
    pub sign: ProjectionSign,
}

/// Best side2 partner for side1 point `i1` within `[lo, hi]`.
///
/// With `sign == None` the sign is chosen so that the window's scores sum to
/// a non-positive value. Degenerate candidates (coincident points) never
/// become a match unless every candidate is degenerate. The window is clipped
/// to side2; an inverted window shrinks to its upper end.
pub fn projection_index(
    normal: Vec2d,
    cross: &CrossDistances,
    i1: usize,
    (lo, hi): (usize, usize),
    sign: Option<ProjectionSign>,
) -> ProjectionMatch {
    let Some(last2) = cross.n2().checked_sub(1) else {
        return ProjectionMatch {
            index: 0,
            value: f64::NAN,
            sign: sign.unwrap_or(ProjectionSign::Negative),
        };
    };
    let hi = hi.min(last2);
    let lo = lo.min(hi);

    let mut dp: Vec<f64> = (lo..=hi)
        .map(|j| {
            if cross.is_degenerate(i1, j) {
                f64::NAN
            } else {
                cross.direction(i1, j).dot(normal)
            }
        })
        .collect();

    let sign = sign.unwrap_or_else(|| {
        let sum: f64 = dp.iter().filter(|v| v.is_finite()).sum();
        if sum > 0.0 {
            ProjectionSign::Positive
        } else {
            ProjectionSign::Negative
        }
    });

    let factor = sign.factor();
    for v in &mut dp {
        *v = if v.is_finite() { *v * factor } else { f64::INFINITY };
    }

    let best = local_minima(&dp)
        .into_iter()
        .min_by(|&a, &b| {
            cross
                .distance(i1, lo + a)
                .total_cmp(&cross.distance(i1, lo + b))
        })
        .or_else(|| argmin(&dp))
        .unwrap_or(0);

    ProjectionMatch {
        index: lo + best,
        value: dp[best],
        sign,
    }
}

/// Matches every interior side1 point; entries 0 and `n1 - 1` are set to the
/// forced end pairs.
///
/// Points whose tentative sign disagrees with the frame majority are
/// recomputed with the majority sign (ties go to [`ProjectionSign::Negative`]).
pub fn match_by_projection(
    normals: &[Vec2d],
    cross: &CrossDistances,
    bounds: &[(usize, usize)],
) -> Vec<usize> {
    let n1 = cross.n1();
    let n2 = cross.n2();
    let mut matches = vec![0usize; n1];
    if n1 == 0 || n2 == 0 {
        return matches;
    }
    matches[n1 - 1] = n2 - 1;
    if n1 < 3 {
        return matches;
    }

    let mut signs = vec![ProjectionSign::Negative; n1];
    for i in 1..n1 - 1 {
        let m = projection_index(normals[i], cross, i, bounds[i], None);
        matches[i] = m.index;
        signs[i] = m.sign;
    }

    let Some(majority) = majority_sign(&signs[1..n1 - 1]) else {
        return matches;
    };

    for i in 1..n1 - 1 {
        if signs[i] != majority {
            let m = projection_index(normals[i], cross, i, bounds[i], Some(majority));
            matches[i] = m.index;
        }
    }

    matches
}

/// Majority of `signs`, or `None` when they all agree. Ties go to
/// [`ProjectionSign::Negative`].
pub fn majority_sign(signs: &[ProjectionSign]) -> Option<ProjectionSign> {
    let positives = signs
        .iter()
        .filter(|&&s| s == ProjectionSign::Positive)
        .count();
    let negatives = signs.len() - positives;
    if positives == 0 || negatives == 0 {
        return None;
    }

    let majority = if positives > negatives {
        ProjectionSign::Positive
    } else {
        ProjectionSign::Negative
    };
    debug!(positives, negatives, ?majority, "projection signs disagree");
    Some(majority)
}

/// Indices `j` with `v[j - 1] > v[j] < v[j + 1]`.
fn local_minima(v: &[f64]) -> Vec<usize> {
    if v.len() < 3 {
        return Vec::new();
    }
    (1..v.len() - 1)
        .filter(|&j| v[j] < v[j - 1] && v[j] < v[j + 1])
        .collect()
}

/// First index of the smallest finite value.
fn argmin(v: &[f64]) -> Option<usize> {
    v.iter()
        .enumerate()
        .filter(|(_, x)| x.is_finite())
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
}
