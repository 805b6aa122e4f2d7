//! 1D filtering primitives for contour smoothing.
//!
//! Signals are indexed so that sample `signal[i]` sits at position `x = i`.
//! Convolution kernels have odd length `2*radius + 1` and are centered on the
//! output sample.
//!
//! [`SavGolKernel`] holds the least-squares projection of a Savitzky-Golay
//! filter. Its center row is the usual smoothing kernel; its other rows
//! evaluate the fitted polynomial away from the window center, which is how
//! [`SmoothingEdge::Interp`] treats the first and last half-window.

pub mod conv1d;
pub mod savgol;
pub mod smooth;

pub use conv1d::convolve_f64;
pub use savgol::SavGolKernel;
pub use smooth::{SmoothingEdge, round_to_odd, smooth_polyline, smooth_signal, smoothing_window};
