use ndarray::{Array2, Array3};
use rayon::prelude::*;
use tracing::warn;
use wm_core::{Error, Point2d};

use crate::resample::Resampler;

impl Resampler {
    /// Normalizes every frame's curve along its own chain-code length.
    ///
    /// Output shape is `(n_points, 2, frames)` with x at `[.., 0, ..]` and y
    /// at `[.., 1, ..]`. Missing frames are NaN columns.
    pub fn normalize_frames_xy(&self, frames: &[Option<Vec<Point2d>>]) -> Array3<f64> {
        let columns: Vec<Vec<Point2d>> = frames
            .par_iter()
            .map(|f| self.normalize_curve(f.as_deref()))
            .collect();

        Array3::from_shape_fn((self.n_points(), 2, frames.len()), |(k, c, f)| {
            let p = columns[f][k];
            if c == 0 { p.x } else { p.y }
        })
    }

    /// Normalizes a per-frame scalar profile along the chain-code length of
    /// the matching frame of `xy`.
    ///
    /// Output shape is `(n_points, frames)`. A frame whose profile is missing,
    /// whose curve is missing, or whose lengths disagree becomes a NaN column;
    /// only differing frame counts are an error.
    pub fn normalize_frames(
        &self,
        profiles: &[Option<Vec<f64>>],
        xy: &[Option<Vec<Point2d>>],
    ) -> Result<Array2<f64>, Error> {
        if profiles.len() != xy.len() {
            return Err(Error::SizeMismatch {
                expected: xy.len(),
                actual: profiles.len(),
            });
        }

        let columns: Vec<Vec<f64>> = profiles
            .par_iter()
            .zip(xy.par_iter())
            .enumerate()
            .map(|(frame, (values, curve))| {
                self.normalize_profile(values.as_deref(), curve.as_deref())
                    .unwrap_or_else(|err| {
                        warn!(frame, %err, "frame normalization failed");
                        vec![f64::NAN; self.n_points()]
                    })
            })
            .collect();

        Ok(Array2::from_shape_fn(
            (self.n_points(), profiles.len()),
            |(k, f)| columns[f][k],
        ))
    }
}
