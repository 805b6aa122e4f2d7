//! Umbrella crate for the `worm-metrology` workspace.
//!
//! Re-exports the contour geometry, smoothing, skeleton and resampling crates,
//! and adds [`normalize_skeletons`], which turns per-frame skeletons of
//! varying length into fixed-size arrays.

use ndarray::{Array2, Array3};
use tracing::debug;

pub use wm_core::*;
pub use wm_filter::*;
pub use wm_resample::*;
pub use wm_skeleton::*;

/// Skeletons and widths of a recording resampled to a fixed point count.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSkeletons {
    /// Shape `(n_points, 2, frames)`.
    pub skeleton: Array3<f64>,
    /// Shape `(n_points, frames)`.
    pub widths: Array2<f64>,
}

/// Resamples every skeleton and its widths along the skeleton's own
/// chain-code length. Missing frames become NaN columns.
pub fn normalize_skeletons(
    resampler: &Resampler,
    frames: &[Option<SkeletonFrame>],
) -> Result<NormalizedSkeletons, Error> {
    let xy: Vec<Option<Vec<Point2d>>> = frames
        .iter()
        .map(|f| f.as_ref().map(|s| s.points.clone()))
        .collect();
    let widths: Vec<Option<Vec<f64>>> = frames
        .iter()
        .map(|f| f.as_ref().map(|s| s.widths.clone()))
        .collect();

    let missing = frames.iter().filter(|f| f.is_none()).count();
    debug!(
        frames = frames.len(),
        missing,
        n_points = resampler.n_points(),
        "normalizing skeletons"
    );

    Ok(NormalizedSkeletons {
        skeleton: resampler.normalize_frames_xy(&xy),
        widths: resampler.normalize_frames(&widths, &xy)?,
    })
}
