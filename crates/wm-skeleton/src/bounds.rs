/// Inclusive side2 search window `[lo, hi]` for every side1 index.
///
/// Side1 index `i` sits at fraction `p = i / (n1 - 1)` of its side. The
/// window spans `floor((p - back) * n2)` to `ceil((p + forward) * n2)`,
/// clipped to `[0, n2 - 1]`. A window inverted by negative fractions
/// shrinks to its upper end.
pub fn search_bounds(n1: usize, n2: usize, back: f64, forward: f64) -> Vec<(usize, usize)> {
    if n2 == 0 {
        return Vec::new();
    }

    let last2 = (n2 - 1) as f64;
    (0..n1)
        .map(|i| {
            let p = if n1 > 1 {
                i as f64 / (n1 - 1) as f64
            } else {
                0.0
            };
            let lo = ((p - back) * n2 as f64).floor().clamp(0.0, last2);
            let hi = ((p + forward) * n2 as f64).ceil().clamp(0.0, last2);
            (lo.min(hi) as usize, hi as usize)
        })
        .collect()
}
