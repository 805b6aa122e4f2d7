use tracing::debug;

/// Drops matches that cross their neighbors.
///
/// An interior pair is kept when its side2 index is `>=` the previous and
/// `<=` the next retained side2 index. The pass repeats until nothing is
/// dropped, so the retained side2 indices are non-decreasing. The first and
/// last pairs are always kept.
pub fn repair_ordering(mut i1: Vec<usize>, mut i2: Vec<usize>) -> (Vec<usize>, Vec<usize>) {
    debug_assert_eq!(i1.len(), i2.len());

    let initial = i1.len();
    loop {
        let n = i2.len();
        if n < 3 {
            break;
        }

        let keep: Vec<bool> = (0..n)
            .map(|k| k == 0 || k == n - 1 || (i2[k - 1] <= i2[k] && i2[k] <= i2[k + 1]))
            .collect();
        if keep.iter().all(|&k| k) {
            break;
        }

        i1 = retain_by(&i1, &keep);
        i2 = retain_by(&i2, &keep);
    }

    if i1.len() < initial {
        debug!(dropped = initial - i1.len(), kept = i1.len(), "ordering repair");
    }
    (i1, i2)
}

fn retain_by(v: &[usize], keep: &[bool]) -> Vec<usize> {
    v.iter()
        .zip(keep)
        .filter(|(_, k)| **k)
        .map(|(x, _)| *x)
        .collect()
}
