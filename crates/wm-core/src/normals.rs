use crate::geom::{Point2d, Vec2d};

/// Discrete derivative with unit spacing.
///
/// Central differences in the interior, one-sided first differences at the
/// two ends. A single sample has zero gradient.
pub fn gradient(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let mut out = vec![0.0; n];
            out[0] = values[1] - values[0];
            out[n - 1] = values[n - 1] - values[n - 2];
            for i in 1..n - 1 {
                out[i] = 0.5 * (values[i + 1] - values[i - 1]);
            }
            out
        }
    }
}

/// Unit normal at every point of an ordered curve.
///
/// The normal is the tangent (from [`gradient`]) rotated clockwise. Points
/// with a zero tangent get the zero vector rather than NaN.
pub fn compute_normal_vectors(points: &[Point2d]) -> Vec<Vec2d> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let dx = gradient(&xs);
    let dy = gradient(&ys);

    dx.iter()
        .zip(&dy)
        .map(|(&x, &y)| Vec2d { x, y }.perp().normalize())
        .collect()
}
