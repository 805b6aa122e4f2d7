use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wm_core::Point2d;
use wm_skeleton::{ContourFrame, SkeletonConfig, SkeletonExtractor};

fn bent_body(n1: usize, n2: usize) -> (Vec<Point2d>, Vec<Point2d>) {
    let side = |n: usize, sign: f64| {
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                let w = 12.0 * (std::f64::consts::PI * t).sin().sqrt();
                Point2d {
                    x: 300.0 * t,
                    y: 25.0 * (5.0 * t).sin() + sign * w,
                }
            })
            .collect::<Vec<_>>()
    };
    (side(n1, 1.0), side(n2, -1.0))
}

fn bench_single_frame(c: &mut Criterion) {
    let (s1, s2) = bent_body(220, 240);
    let ex = SkeletonExtractor::new(SkeletonConfig::default()).expect("valid config");

    c.bench_function("wm_skeleton_compute_220x240", |b| {
        b.iter(|| {
            let sk = ex.compute(Some(black_box(&s1)), Some(black_box(&s2)));
            black_box(sk.map(|s| s.len()));
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let (s1, s2) = bent_body(180, 200);
    let frames: Vec<ContourFrame> = (0..256)
        .map(|_| ContourFrame {
            side1: Some(s1.clone()),
            side2: Some(s2.clone()),
        })
        .collect();
    let ex = SkeletonExtractor::new(SkeletonConfig::default()).expect("valid config");

    c.bench_function("wm_skeleton_compute_all_256", |b| {
        b.iter(|| {
            let out = ex.compute_all(black_box(&frames));
            black_box(out.len());
        });
    });
}

criterion_group!(benches, bench_single_frame, bench_batch);
criterion_main!(benches);
