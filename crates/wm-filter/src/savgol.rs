use nalgebra::DMatrix;
use wm_core::Error;

/// Savitzky-Golay least-squares smoothing operator.
///
/// Conventions:
/// - `window = 2*radius + 1` samples, `order < window`.
/// - `projection` is the `window x window` hat matrix `A (A^T A)^-1 A^T` of a
///   polynomial basis over the window. Row `j` evaluates the least-squares
///   polynomial at window offset `j`.
/// - `coeffs` is the center row, i.e. the convolution kernel for interior
///   samples. It is symmetric and sums to 1.
#[derive(Debug, Clone)]
pub struct SavGolKernel {
    pub order: usize,
    pub radius: usize,
    pub coeffs: Vec<f64>,
    projection: DMatrix<f64>,
}

impl SavGolKernel {
    pub fn new(window: usize, order: usize) -> Result<Self, Error> {
        if window % 2 == 0 {
            return Err(Error::InvalidParameter {
                name: "window",
                reason: "must be odd",
            });
        }
        if order >= window {
            return Err(Error::InvalidParameter {
                name: "order",
                reason: "must be less than the window length",
            });
        }

        let radius = window / 2;
        // Offsets scaled into [-1, 1]; the hat matrix does not depend on the
        // basis scale, the conditioning of A^T A does.
        let scale = if radius == 0 { 1.0 } else { radius as f64 };
        let a = DMatrix::from_fn(window, order + 1, |j, p| {
            let t = (j as f64 - radius as f64) / scale;
            t.powi(p as i32)
        });

        let ata = a.transpose() * &a;
        let inv = ata.try_inverse().ok_or(Error::InvalidParameter {
            name: "order",
            reason: "polynomial basis is singular over the window",
        })?;
        let projection = &a * inv * a.transpose();

        let coeffs = projection.row(radius).iter().copied().collect();

        Ok(Self {
            order,
            radius,
            coeffs,
            projection,
        })
    }

    pub fn window(&self) -> usize {
        2 * self.radius + 1
    }

    /// Fitted value at window offset `j` for samples `window_samples`.
    pub fn eval_at(&self, j: usize, window_samples: &[f64]) -> f64 {
        debug_assert_eq!(window_samples.len(), self.window());
        self.projection
            .row(j)
            .iter()
            .zip(window_samples)
            .map(|(h, s)| h * s)
            .sum()
    }

    /// Overwrites the first and last `radius` outputs with values of the
    /// polynomial fitted to the first and last full window of `signal`.
    ///
    /// Requires `signal.len() >= window`.
    pub fn interp_edges(&self, signal: &[f64], out: &mut [f64]) {
        let w = self.window();
        let n = signal.len();
        assert!(n >= w, "signal shorter than the filter window");
        assert_eq!(out.len(), n, "out must match signal length");

        let head = &signal[..w];
        for (j, out_j) in out.iter_mut().enumerate().take(self.radius) {
            *out_j = self.eval_at(j, head);
        }

        let tail = &signal[n - w..];
        for j in self.radius + 1..w {
            out[n - w + j] = self.eval_at(j, tail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SavGolKernel;

    #[test]
    fn known_cubic_coefficients_window5() {
        // Classic 5-point quadratic/cubic smoothing weights: (-3, 12, 17, 12, -3) / 35.
        let k = SavGolKernel::new(5, 3).expect("valid kernel");
        let expected = [-3.0, 12.0, 17.0, 12.0, -3.0].map(|v| v / 35.0);
        for (c, e) in k.coeffs.iter().zip(expected) {
            assert!((c - e).abs() < 1e-10, "{c} vs {e}");
        }
    }

    #[test]
    fn coefficients_sum_to_one_and_are_symmetric() {
        let k = SavGolKernel::new(11, 3).expect("valid kernel");
        let sum: f64 = k.coeffs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-10);
        for i in 0..k.radius {
            assert!((k.coeffs[i] - k.coeffs[k.window() - 1 - i]).abs() < 1e-10);
        }
    }

    #[test]
    fn reproduces_cubic_exactly_including_edges() {
        let k = SavGolKernel::new(7, 3).expect("valid kernel");
        let signal: Vec<f64> = (0..12)
            .map(|i| {
                let x = i as f64;
                0.5 * x * x * x - 2.0 * x * x + x - 4.0
            })
            .collect();

        let mut out = vec![0.0; signal.len()];
        k.interp_edges(&signal, &mut out);
        for j in 0..k.radius {
            assert!((out[j] - signal[j]).abs() < 1e-8);
            let t = signal.len() - 1 - j;
            assert!((out[t] - signal[t]).abs() < 1e-8);
        }

        let center: f64 = signal[2..9]
            .iter()
            .zip(&k.coeffs)
            .map(|(s, c)| s * c)
            .sum();
        assert!((center - signal[5]).abs() < 1e-8);
    }

    #[test]
    fn rejects_even_window_and_large_order() {
        assert!(SavGolKernel::new(4, 2).is_err());
        assert!(SavGolKernel::new(3, 3).is_err());
    }
}
