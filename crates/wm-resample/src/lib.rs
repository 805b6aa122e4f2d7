//! Arc-length normalization of per-frame curves.
//!
//! A heterocardinal quantity (point count varies per frame) is resampled at
//! `N` positions evenly spaced in chain-code length between the first and last
//! point of that frame. The result is homocardinal: every frame has exactly
//! `N` values and frames stack into a rectangular array.
//!
//! Missing frames normalize to `N` NaN values, so a recording with gaps still
//! yields an `(N, frames)` or `(N, 2, frames)` array with NaN columns at the
//! gaps. Interpolation is linear; no smoothing is applied.

mod batch;
mod resample;

pub use resample::{N_POINTS_NORMALIZED, Resampler, interp, linspace};
