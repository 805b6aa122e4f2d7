use rayon::prelude::*;
use tracing::{debug, trace_span};
use wm_core::{Error, Point2d, compute_normal_vectors};
use wm_filter::smooth_polyline;

use crate::bounds::search_bounds;
use crate::config::SkeletonConfig;
use crate::cross::CrossDistances;
use crate::projection::match_by_projection;
use crate::repair::repair_ordering;
use crate::walk::update_ends_by_walking;

/// The two long sides of one frame's contour, both traced head to tail.
/// `None` marks a frame without a detection.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourFrame {
    pub side1: Option<Vec<Point2d>>,
    pub side2: Option<Vec<Point2d>>,
}

/// Midline and widths of one frame.
///
/// All vectors are index-aligned: `points[k]` is the midpoint of
/// `side1[side1_indices[k]]` and `side2[side2_indices[k]]` (after smoothing),
/// and `widths[k]` is the distance between them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkeletonFrame {
    pub points: Vec<Point2d>,
    pub widths: Vec<f64>,
    pub side1_indices: Vec<usize>,
    pub side2_indices: Vec<usize>,
}

impl SkeletonFrame {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SkeletonExtractor {
    cfg: SkeletonConfig,
}

impl SkeletonExtractor {
    pub fn new(cfg: SkeletonConfig) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &SkeletonConfig {
        &self.cfg
    }

    /// Skeleton and widths for one frame.
    ///
    /// Returns `None` when either side is missing or has fewer than two
    /// finite points.
    pub fn compute(
        &self,
        side1: Option<&[Point2d]>,
        side2: Option<&[Point2d]>,
    ) -> Option<SkeletonFrame> {
        let (side1, side2) = (side1?, side2?);

        let s1 = finite_points(side1);
        let s2 = finite_points(side2);
        if s1.len() < 2 || s2.len() < 2 {
            debug!(n1 = s1.len(), n2 = s2.len(), "too few valid contour points");
            return None;
        }

        let _span = trace_span!("skeleton", n1 = s1.len(), n2 = s2.len()).entered();
        let cfg = &self.cfg;

        let (s1, s2) = {
            let _s = trace_span!("smooth").entered();
            (
                smooth_polyline(
                    &s1,
                    cfg.smoothing_fraction,
                    cfg.smoothing_order,
                    &cfg.smoothing_edge,
                ),
                smooth_polyline(
                    &s2,
                    cfg.smoothing_fraction,
                    cfg.smoothing_order,
                    &cfg.smoothing_edge,
                ),
            )
        };

        let cross = {
            let _s = trace_span!("cross_distances").entered();
            CrossDistances::new(&s1, &s2)
        };

        let mut matches = {
            let _s = trace_span!("projection").entered();
            let bounds = search_bounds(s1.len(), s2.len(), cfg.back_search, cfg.forward_search);
            let normals = compute_normal_vectors(&s1);
            match_by_projection(&normals, &cross, &bounds)
        };

        let (i1, i2) = {
            let _s = trace_span!("walk_ends").entered();
            update_ends_by_walking(&cross, &mut matches, &s1, &s2, cfg.end_walk_fraction)
        };
        let (i1, i2) = repair_ordering(i1, i2);

        let (points, widths) = i1
            .iter()
            .zip(&i2)
            .map(|(&a, &b)| (s1[a].midpoint(s2[b]), cross.distance(a, b)))
            .unzip();

        Some(SkeletonFrame {
            points,
            widths,
            side1_indices: i1,
            side2_indices: i2,
        })
    }

    /// [`Self::compute`] over a whole recording, frames in parallel.
    /// Output slot `k` belongs to `frames[k]`.
    pub fn compute_all(&self, frames: &[ContourFrame]) -> Vec<Option<SkeletonFrame>> {
        frames
            .par_iter()
            .map(|f| self.compute(f.side1.as_deref(), f.side2.as_deref()))
            .collect()
    }
}

fn finite_points(side: &[Point2d]) -> Vec<Point2d> {
    side.iter().copied().filter(|p| p.is_finite()).collect()
}
