use wm_core::BorderMode;

pub fn convolve_f64(
    signal: &[f64],
    kernel: &[f64],
    radius: usize,
    border: &BorderMode<f64>,
    out: &mut [f64],
) {
    assert_eq!(out.len(), signal.len(), "out must match signal length");
    assert_eq!(
        kernel.len(),
        2 * radius + 1,
        "kernel len must be 2*radius+1"
    );

    let n = signal.len();
    if n == 0 {
        return;
    }

    let interior_start = radius.min(n);
    let interior_end = n.saturating_sub(radius).max(interior_start);

    // Borders go through the extension rule.
    for i in (0..interior_start).chain(interior_end..n) {
        out[i] = convolve_at_border(signal, kernel, radius, border, i);
    }

    // Full kernel footprint is in bounds for `i` in `[radius, n - radius)`.
    for (i, out_i) in out
        .iter_mut()
        .enumerate()
        .take(interior_end)
        .skip(interior_start)
    {
        let window = &signal[i - radius..=i + radius];
        *out_i = window
            .iter()
            .zip(kernel.iter().rev())
            .map(|(s, k)| s * k)
            .sum();
    }
}

fn convolve_at_border(
    signal: &[f64],
    kernel: &[f64],
    radius: usize,
    border: &BorderMode<f64>,
    i: usize,
) -> f64 {
    let mut acc = 0.0;
    for (k, &kv) in kernel.iter().enumerate() {
        let idx = i as isize + radius as isize - k as isize;
        let v = border
            .sample(signal, idx)
            .expect("non-empty signal maps every index");
        acc += v * kv;
    }
    acc
}
