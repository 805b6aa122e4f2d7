use wm_core::{Error, Point2d, check_arc_length, cumulative_arc_length};

/// Points per frame after normalization.
pub const N_POINTS_NORMALIZED: usize = 49;

/// `n` evenly spaced values from `start` to `end` inclusive. The last value
/// is exactly `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Piecewise-linear interpolation of `(xp, fp)` at `x`.
///
/// `xp` must be non-decreasing. Positions before the first or after the last
/// sample take the end values.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len();
    if n == 0 {
        return f64::NAN;
    }

    // First sample strictly beyond `x`.
    let j = xp.partition_point(|&v| v <= x);
    if j == 0 {
        return fp[0];
    }
    if j == n {
        return fp[n - 1];
    }

    let (x0, x1) = (xp[j - 1], xp[j]);
    let t = (x - x0) / (x1 - x0);
    fp[j - 1] + t * (fp[j] - fp[j - 1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct Resampler {
    n_points: usize,
}

impl Default for Resampler {
    fn default() -> Self {
        Self {
            n_points: N_POINTS_NORMALIZED,
        }
    }
}

impl Resampler {
    pub fn new(n_points: usize) -> Result<Self, Error> {
        if n_points < 2 {
            return Err(Error::InvalidParameter {
                name: "n_points",
                reason: "must be at least 2",
            });
        }
        Ok(Self { n_points })
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Evenly spaced arc-length positions over `arc`.
    pub fn positions(&self, arc: &[f64]) -> Vec<f64> {
        match (arc.first(), arc.last()) {
            (Some(&a), Some(&b)) => linspace(a, b, self.n_points),
            _ => vec![f64::NAN; self.n_points],
        }
    }

    /// Scalar profile sampled at `arc`, resampled to `n_points` values.
    pub fn resample_profile(&self, values: &[f64], arc: &[f64]) -> Result<Vec<f64>, Error> {
        check_inputs(values.len(), arc)?;
        Ok(self
            .positions(arc)
            .into_iter()
            .map(|s| interp(s, arc, values))
            .collect())
    }

    /// Curve sampled at `arc`, resampled to `n_points` points. x and y are
    /// interpolated independently.
    pub fn resample_curve(&self, points: &[Point2d], arc: &[f64]) -> Result<Vec<Point2d>, Error> {
        check_inputs(points.len(), arc)?;
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        Ok(self
            .positions(arc)
            .into_iter()
            .map(|s| Point2d {
                x: interp(s, arc, &xs),
                y: interp(s, arc, &ys),
            })
            .collect())
    }

    /// Curve resampled along its own chain-code length. Missing or empty
    /// input gives `n_points` NaN points.
    pub fn normalize_curve(&self, points: Option<&[Point2d]>) -> Vec<Point2d> {
        match points {
            Some(pts) if !pts.is_empty() => {
                let arc = cumulative_arc_length(pts);
                self.resample_curve(pts, &arc)
                    .unwrap_or_else(|_| vec![Point2d::NAN; self.n_points])
            }
            _ => vec![Point2d::NAN; self.n_points],
        }
    }

    /// Scalar profile resampled along the chain-code length of `xy`, the
    /// curve it was measured on (e.g. widths along a skeleton).
    ///
    /// Missing or empty input gives `n_points` NaN values; a profile whose
    /// length differs from the curve is an error.
    pub fn normalize_profile(
        &self,
        values: Option<&[f64]>,
        xy: Option<&[Point2d]>,
    ) -> Result<Vec<f64>, Error> {
        match (values, xy) {
            (Some(v), Some(pts)) if !pts.is_empty() => {
                let arc = cumulative_arc_length(pts);
                self.resample_profile(v, &arc)
            }
            _ => Ok(vec![f64::NAN; self.n_points]),
        }
    }
}

impl TryFrom<usize> for Resampler {
    type Error = Error;

    fn try_from(n_points: usize) -> Result<Self, Error> {
        Self::new(n_points)
    }
}

impl From<Resampler> for usize {
    fn from(r: Resampler) -> usize {
        r.n_points
    }
}

fn check_inputs(len: usize, arc: &[f64]) -> Result<(), Error> {
    if len != arc.len() {
        return Err(Error::SizeMismatch {
            expected: arc.len(),
            actual: len,
        });
    }
    check_arc_length(arc)
}

#[cfg(test)]
mod tests {
    use wm_core::{Error, Point2d, cumulative_arc_length};

    use super::{N_POINTS_NORMALIZED, Resampler, interp, linspace};

    #[test]
    fn linspace_endpoints_and_spacing() {
        let v = linspace(1.0, 3.0, 5);
        assert_eq!(v, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_eq!(linspace(2.0, 2.0, 3), vec![2.0; 3]);
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn interp_inside_outside_and_repeated_knots() {
        let xp = [0.0, 1.0, 1.0, 3.0];
        let fp = [0.0, 10.0, 20.0, 40.0];

        assert_eq!(interp(-1.0, &xp, &fp), 0.0);
        assert_eq!(interp(0.5, &xp, &fp), 5.0);
        assert_eq!(interp(1.0, &xp, &fp), 20.0);
        assert_eq!(interp(2.0, &xp, &fp), 30.0);
        assert_eq!(interp(3.0, &xp, &fp), 40.0);
        assert_eq!(interp(9.0, &xp, &fp), 40.0);
        assert!(interp(0.0, &[], &[]).is_nan());
    }

    #[test]
    fn straight_line_ten_to_five() {
        let pts: Vec<Point2d> = (0..10)
            .map(|i| Point2d::new(i as f64, 2.0 * i as f64))
            .collect();
        let arc = cumulative_arc_length(&pts);
        let r = Resampler::new(5).expect("valid count");

        let out = r.resample_curve(&pts, &arc).expect("valid curve");
        let expected_x = [0.0, 2.25, 4.5, 6.75, 9.0];
        assert_eq!(out.len(), 5);
        for (p, ex) in out.iter().zip(expected_x) {
            assert!((p.x - ex).abs() < 1e-9, "{p:?}");
            assert!((p.y - 2.0 * ex).abs() < 1e-9, "{p:?}");
        }
    }

    #[test]
    fn resampling_evenly_spaced_curve_is_idempotent() {
        let r = Resampler::default();
        let pts: Vec<Point2d> = (0..N_POINTS_NORMALIZED)
            .map(|i| Point2d::new(0.5 * i as f64, -3.0 + 0.25 * i as f64))
            .collect();

        let once = r.normalize_curve(Some(&pts));
        let twice = r.normalize_curve(Some(&once));
        for ((a, b), c) in once.iter().zip(&twice).zip(&pts) {
            assert!(a.distance(*c) < 1e-9);
            assert!(a.distance(*b) < 1e-9);
        }
    }

    #[test]
    fn profile_along_other_curve() {
        let skeleton: Vec<Point2d> = [0.0, 1.0, 3.0, 6.0]
            .into_iter()
            .map(|x| Point2d::new(x, 0.0))
            .collect();
        let widths = [2.0, 4.0, 4.0, 1.0];
        let r = Resampler::new(4).expect("valid count");

        let out = r
            .normalize_profile(Some(&widths), Some(&skeleton))
            .expect("matching lengths");
        for (v, ex) in out.iter().zip([2.0, 4.0, 3.0, 1.0]) {
            assert!((v - ex).abs() < 1e-12, "{out:?}");
        }
    }

    #[test]
    fn missing_frames_give_full_nan_vectors() {
        let r = Resampler::default();
        let curve = r.normalize_curve(None);
        assert_eq!(curve.len(), N_POINTS_NORMALIZED);
        assert!(curve.iter().all(|p| p.x.is_nan() && p.y.is_nan()));

        let empty = r.normalize_curve(Some(&[]));
        assert_eq!(empty.len(), N_POINTS_NORMALIZED);

        let prof = r.normalize_profile(None, None).expect("missing is not an error");
        assert_eq!(prof.len(), N_POINTS_NORMALIZED);
        assert!(prof.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn single_point_repeats() {
        let r = Resampler::new(3).expect("valid count");
        let out = r.normalize_curve(Some(&[Point2d::new(1.0, 2.0)]));
        assert_eq!(out, vec![Point2d::new(1.0, 2.0); 3]);
    }

    #[test]
    fn mismatched_inputs_are_errors() {
        let r = Resampler::default();
        assert_eq!(
            r.resample_profile(&[1.0, 2.0], &[0.0, 1.0, 2.0]),
            Err(Error::SizeMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            r.resample_profile(&[1.0, 2.0], &[1.0, 0.0]),
            Err(Error::NonMonotonicArcLength { index: 1 })
        );
        assert!(Resampler::new(1).is_err());
    }

    #[test]
    fn point_count_conversion_is_validated() {
        assert_eq!(Resampler::try_from(7).map(|r| r.n_points()), Ok(7));
        assert!(Resampler::try_from(0).is_err());
        assert!(Resampler::try_from(1).is_err());
        assert_eq!(usize::from(Resampler::default()), N_POINTS_NORMALIZED);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_short_point_counts() {
        let r: Resampler = serde_json::from_str("12").expect("valid count");
        assert_eq!(r.n_points(), 12);
        assert_eq!(
            serde_json::to_string(&Resampler::default()).expect("serializable"),
            "49"
        );
        assert!(serde_json::from_str::<Resampler>("0").is_err());
        assert!(serde_json::from_str::<Resampler>("1").is_err());
    }
}
