//! Endpoint matching by walking both sides in lock-step.
//!
//! Near the head and tail the body curves too sharply for normal projection
//! to find the opposing point. Instead, two cursors start at a known pair and
//! step toward the interior. Each step advances side1, side2, or both,
//! following the smallest resulting width.

use wm_core::Point2d;

use crate::cross::CrossDistances;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkStep {
    Side1,
    Side2,
    Both,
}

/// Pairs visited while walking from `(start1, start2)` until either cursor
/// reaches its end (inclusive). The walk direction is taken from
/// `start1 -> end1`; the start pair itself is not emitted.
pub fn partners_via_walk(
    (start1, end1): (usize, usize),
    (start2, end2): (usize, usize),
    cross: &CrossDistances,
    side1: &[Point2d],
    side2: &[Point2d],
) -> Vec<(usize, usize)> {
    let backward = end1 < start1;
    let advance = |c: usize| if backward { c - 1 } else { c + 1 };

    let mut pairs = Vec::with_capacity(start1.abs_diff(end1) + start2.abs_diff(end2));
    let mut c1 = start1;
    let mut c2 = start2;
    let mut prev_width = cross.distance(c1, c2);

    while c1 != end1 && c2 != end2 {
        let next1 = advance(c1);
        let next2 = advance(c2);

        let d_n1n2 = cross.distance(next1, next2);
        let d_n1c2 = cross.distance(next1, c2);
        let d_c1n2 = cross.distance(c1, next2);

        let step = if d_n1c2 == d_c1n2 || (d_n1n2 <= d_n1c2 && d_n1n2 <= d_c1n2) {
            WalkStep::Both
        } else if (side1[next1] - side1[c1]).dot(side2[next2] - side2[c2]) > 0.0 {
            // Sides run the same way: follow the smaller width.
            if d_n1c2 < d_c1n2 {
                WalkStep::Side1
            } else {
                WalkStep::Side2
            }
        } else if d_n1c2 > prev_width && d_c1n2 > prev_width {
            WalkStep::Both
        } else if d_n1c2 < d_c1n2 {
            WalkStep::Side1
        } else {
            WalkStep::Side2
        };

        match step {
            WalkStep::Side1 => c1 = next1,
            WalkStep::Side2 => c2 = next2,
            WalkStep::Both => {
                c1 = next1;
                c2 = next2;
            }
        }

        pairs.push((c1, c2));
        prev_width = cross.distance(c1, c2);
    }

    pairs
}

/// Replaces the end matches with walked pairs and selects the side1 indices
/// that carry a match.
///
/// The first and last `ceil(n1 * end_fraction)` side1 points are walked
/// (twice as many on side2); points strictly between the two walked regions
/// keep their projection match. Both end pairs are always kept and forced to
/// `(0, 0)` and `(n1 - 1, n2 - 1)`.
pub fn update_ends_by_walking(
    cross: &CrossDistances,
    matches: &mut [usize],
    side1: &[Point2d],
    side2: &[Point2d],
    end_fraction: f64,
) -> (Vec<usize>, Vec<usize>) {
    let n1 = side1.len();
    let n2 = side2.len();
    if n1 == 0 || n2 == 0 {
        return (Vec::new(), Vec::new());
    }

    let walk1 = ((n1 as f64 * end_fraction).ceil() as usize).min(n1 - 1);
    let walk2 = (2 * walk1).min(n2 - 1);

    let mut keep = vec![false; n1];

    for (p1, p2) in partners_via_walk((0, walk1), (0, walk2), cross, side1, side2) {
        matches[p1] = p2;
        keep[p1] = true;
    }

    let back1 = n1 - 1 - walk1;
    let back2 = n2 - 1 - walk2;
    for (p1, p2) in partners_via_walk((n1 - 1, back1), (n2 - 1, back2), cross, side1, side2) {
        matches[p1] = p2;
        keep[p1] = true;
    }

    for k in keep.iter_mut().take(back1).skip(walk1 + 1) {
        *k = true;
    }

    keep[0] = true;
    keep[n1 - 1] = true;
    matches[0] = 0;
    matches[n1 - 1] = n2 - 1;

    keep.iter()
        .enumerate()
        .filter(|(_, k)| **k)
        .map(|(i, _)| (i, matches[i]))
        .unzip()
}
