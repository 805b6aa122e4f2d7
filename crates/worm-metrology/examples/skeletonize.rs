//! Example: skeletons and widths for a recording of worm contours.
//!
//! Reads a JSON array of frames, each `{"side1": [[x, y], ...], "side2": ...}`
//! with `null` for frames without a detection. Both sides run head to tail.
//! Every frame is skeletonized, then skeletons and widths are resampled to a
//! fixed number of points along the skeleton.
//!
//! Results are written to a JSON file next to the input.
//! Total timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p worm-metrology --features serde --example skeletonize -- --help
//!   cargo run -p worm-metrology --features serde --example skeletonize -- --input contours.json

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use worm_metrology::{
    ContourFrame, N_POINTS_NORMALIZED, Point2d, Resampler, SkeletonConfig, SkeletonExtractor,
    normalize_skeletons,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Compute worm skeletons and widths from per-frame contours")]
struct Args {
    /// Path to the contour JSON
    #[arg(long)]
    input: String,

    /// Optional skeleton config JSON; missing fields take their defaults
    #[arg(long)]
    config: Option<String>,

    /// Points per frame after arc-length normalization
    #[arg(long, default_value_t = N_POINTS_NORMALIZED)]
    n_points: usize,

    /// Output JSON path (default: <input stem>_skeletons.json next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FrameDto {
    side1: Option<Vec<[f64; 2]>>,
    side2: Option<Vec<[f64; 2]>>,
}

#[derive(Serialize)]
struct SkeletonDto {
    points: Vec<[f64; 2]>,
    widths: Vec<f64>,
}

#[derive(Serialize)]
struct Results {
    n_frames: usize,
    n_valid: usize,
    elapsed_ms: f64,
    /// Raw skeletons, `null` for frames without one.
    skeletons: Vec<Option<SkeletonDto>>,
    /// `[frame][point] -> [x, y]`, NaN written as `null`.
    normalized_skeletons: Vec<Vec<[Option<f64>; 2]>>,
    /// `[frame][point]`, NaN written as `null`.
    normalized_widths: Vec<Vec<Option<f64>>>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_points(side: Option<Vec<[f64; 2]>>) -> Option<Vec<Point2d>> {
    side.map(|pts| pts.into_iter().map(Point2d::from).collect())
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

fn load_config(path: Option<&str>) -> Result<SkeletonConfig> {
    let Some(path) = path else {
        return Ok(SkeletonConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let in_path = &args.input;
    let out_path = args.out.clone().unwrap_or_else(|| {
        let p = Path::new(in_path);
        let stem = p.file_stem().unwrap_or_default().to_string_lossy();
        let dir = p.parent().unwrap_or(Path::new("."));
        dir.join(format!("{stem}_skeletons.json"))
            .to_string_lossy()
            .into_owned()
    });

    let text = std::fs::read_to_string(in_path).with_context(|| format!("reading {in_path}"))?;
    let dtos: Vec<FrameDto> =
        serde_json::from_str(&text).with_context(|| format!("parsing {in_path}"))?;
    let frames: Vec<ContourFrame> = dtos
        .into_iter()
        .map(|f| ContourFrame {
            side1: to_points(f.side1),
            side2: to_points(f.side2),
        })
        .collect();

    let cfg = load_config(args.config.as_deref())?;
    println!("loaded {in_path}: {} frames", frames.len());
    println!(
        "config: back={:.2}, forward={:.2}, end_walk={:.2}, n_points={}",
        cfg.back_search, cfg.forward_search, cfg.end_walk_fraction, args.n_points
    );

    let extractor = SkeletonExtractor::new(cfg).context("invalid skeleton config")?;
    let resampler = Resampler::new(args.n_points).context("invalid point count")?;

    let t0 = Instant::now();
    let skeletons = extractor.compute_all(&frames);
    let normalized = normalize_skeletons(&resampler, &skeletons)?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let n_valid = skeletons.iter().filter(|s| s.is_some()).count();
    println!(
        "{n_valid}/{} frames skeletonized  ({elapsed_ms:.2} ms)",
        frames.len()
    );

    let n_frames = frames.len();
    let results = Results {
        n_frames,
        n_valid,
        elapsed_ms,
        skeletons: skeletons
            .into_iter()
            .map(|s| {
                s.map(|s| SkeletonDto {
                    points: s.points.iter().map(|p| [p.x, p.y]).collect(),
                    widths: s.widths,
                })
            })
            .collect(),
        normalized_skeletons: (0..n_frames)
            .map(|f| {
                (0..resampler.n_points())
                    .map(|k| {
                        [
                            finite(normalized.skeleton[[k, 0, f]]),
                            finite(normalized.skeleton[[k, 1, f]]),
                        ]
                    })
                    .collect()
            })
            .collect(),
        normalized_widths: normalized
            .widths
            .columns()
            .into_iter()
            .map(|col| col.iter().copied().map(finite).collect())
            .collect(),
    };

    let out_file =
        std::fs::File::create(&out_path).with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &results)
        .with_context(|| format!("writing JSON to {out_path}"))?;

    println!("results written to {out_path}");
    Ok(())
}
