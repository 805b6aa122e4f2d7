use tracing::debug;
use wm_core::{BorderMode, Point2d};

use crate::conv1d::convolve_f64;
use crate::savgol::SavGolKernel;

/// How the first and last half-window of a signal are smoothed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmoothingEdge {
    /// Evaluate the polynomial fitted to the first/last full window.
    #[default]
    Interp,
    /// Extend the signal with a border rule and convolve.
    Border(BorderMode<f64>),
}

/// Odd integer `2*floor(v/2) + 1`; never less than 1.
pub fn round_to_odd(v: f64) -> usize {
    if v.is_nan() || v < 0.0 {
        return 1;
    }
    2 * (v / 2.0).floor() as usize + 1
}

/// Filter window for a side of `n` points, or `None` when the side is too
/// short for a polynomial of `order`.
pub fn smoothing_window(n: usize, fraction: f64, order: usize) -> Option<usize> {
    let mut window = round_to_odd(n as f64 * fraction);
    if window > n {
        window = if n % 2 == 1 { n } else { n.saturating_sub(1) };
    }
    (window > order).then_some(window)
}

pub fn smooth_signal(
    signal: &[f64],
    kernel: &SavGolKernel,
    edge: &SmoothingEdge,
    out: &mut [f64],
) {
    match edge {
        SmoothingEdge::Border(border) => {
            convolve_f64(signal, &kernel.coeffs, kernel.radius, border, out);
        }
        SmoothingEdge::Interp => {
            convolve_f64(
                signal,
                &kernel.coeffs,
                kernel.radius,
                &BorderMode::Clamp,
                out,
            );
            kernel.interp_edges(signal, out);
        }
    }
}

/// Savitzky-Golay smoothing of the x and y coordinates of a polyline.
///
/// The window is `round_to_odd(len * fraction)`, clipped to the polyline
/// length. Polylines too short for the requested order are returned as-is.
pub fn smooth_polyline(
    points: &[Point2d],
    fraction: f64,
    order: usize,
    edge: &SmoothingEdge,
) -> Vec<Point2d> {
    let n = points.len();
    let Some(window) = smoothing_window(n, fraction, order) else {
        debug!(n, order, "polyline too short to smooth");
        return points.to_vec();
    };

    let kernel = match SavGolKernel::new(window, order) {
        Ok(k) => k,
        Err(err) => {
            debug!(n, window, order, %err, "smoothing skipped");
            return points.to_vec();
        }
    };

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut sx = vec![0.0; n];
    let mut sy = vec![0.0; n];
    smooth_signal(&xs, &kernel, edge, &mut sx);
    smooth_signal(&ys, &kernel, edge, &mut sy);

    sx.into_iter()
        .zip(sy)
        .map(|(x, y)| Point2d { x, y })
        .collect()
}

#[cfg(test)]
mod tests {
    use wm_core::{BorderMode, Point2d};

    use super::{SmoothingEdge, round_to_odd, smooth_polyline, smoothing_window};

    #[test]
    fn round_to_odd_values() {
        assert_eq!(round_to_odd(0.0), 1);
        assert_eq!(round_to_odd(1.9), 1);
        assert_eq!(round_to_odd(2.0), 3);
        assert_eq!(round_to_odd(5.5), 5);
        assert_eq!(round_to_odd(6.2), 7);
        assert_eq!(round_to_odd(-3.0), 1);
        assert_eq!(round_to_odd(f64::NAN), 1);
    }

    #[test]
    fn window_from_side_length() {
        assert_eq!(smoothing_window(100, 1.0 / 12.0, 3), Some(9));
        assert_eq!(smoothing_window(60, 1.0 / 12.0, 3), Some(5));
        assert_eq!(smoothing_window(30, 1.0 / 12.0, 3), None);
        assert_eq!(smoothing_window(6, 1.0, 3), Some(5));
        assert_eq!(smoothing_window(0, 1.0 / 12.0, 3), None);
    }

    #[test]
    fn smoothing_keeps_straight_line_and_endpoints() {
        let pts: Vec<Point2d> = (0..48)
            .map(|i| Point2d::new(i as f64 * 0.5, 3.0 + i as f64 * 0.25))
            .collect();
        let out = smooth_polyline(&pts, 1.0 / 12.0, 3, &SmoothingEdge::Interp);
        assert_eq!(out.len(), pts.len());
        for (a, b) in out.iter().zip(&pts) {
            assert!(a.distance(*b) < 1e-9);
        }
    }

    #[test]
    fn smoothing_reduces_zigzag_noise() {
        let pts: Vec<Point2d> = (0..120)
            .map(|i| {
                let jitter = if i % 2 == 0 { 0.5 } else { -0.5 };
                Point2d::new(i as f64, jitter)
            })
            .collect();

        for edge in [
            SmoothingEdge::Interp,
            SmoothingEdge::Border(BorderMode::Reflect101),
        ] {
            let out = smooth_polyline(&pts, 1.0 / 12.0, 3, &edge);
            let interior_max = out[10..110]
                .iter()
                .map(|p| p.y.abs())
                .fold(0.0_f64, f64::max);
            assert!(interior_max < 0.2, "{edge:?}: {interior_max}");
        }
    }

    #[test]
    fn short_polyline_is_returned_unchanged() {
        let pts = vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 5.0),
            Point2d::new(2.0, 0.0),
        ];
        let out = smooth_polyline(&pts, 1.0 / 12.0, 3, &SmoothingEdge::Interp);
        assert_eq!(out, pts);
    }
}
