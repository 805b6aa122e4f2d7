use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wm_core::Point2d;
use wm_resample::Resampler;

fn recording(frames: usize) -> (Vec<Option<Vec<Point2d>>>, Vec<Option<Vec<f64>>>) {
    let xy: Vec<Option<Vec<Point2d>>> = (0..frames)
        .map(|k| {
            if k % 50 == 7 {
                return None;
            }
            let n = 80 + k % 40;
            let pts = (0..n)
                .map(|i| {
                    let t = i as f64 / (n - 1) as f64;
                    Point2d::new(250.0 * t, 20.0 * (4.0 * t + 0.01 * k as f64).sin())
                })
                .collect();
            Some(pts)
        })
        .collect();
    let widths = xy
        .iter()
        .map(|f| f.as_ref().map(|pts| vec![8.0; pts.len()]))
        .collect();
    (xy, widths)
}

fn bench_normalize(c: &mut Criterion) {
    let (xy, widths) = recording(1000);
    let r = Resampler::default();

    c.bench_function("wm_resample_frames_xy_1000", |b| {
        b.iter(|| {
            let out = r.normalize_frames_xy(black_box(&xy));
            black_box(out.len());
        });
    });

    c.bench_function("wm_resample_frames_1000", |b| {
        b.iter(|| {
            let out = r
                .normalize_frames(black_box(&widths), black_box(&xy))
                .expect("same frame count");
            black_box(out.len());
        });
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
