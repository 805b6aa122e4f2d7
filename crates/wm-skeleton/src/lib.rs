//! Midline skeleton and width profile from the two sides of a worm contour.
//!
//! Each frame supplies two ordered point sequences tracing the long sides of
//! the body from head to tail. [`SkeletonExtractor::compute`] pairs every
//! retained side1 point with an opposing side2 point and reports the pair
//! midpoints (the skeleton) and pair distances (the widths).
//!
//! Pipeline per frame:
//! - Savitzky-Golay smoothing of both sides ([`wm_filter::smooth_polyline`]).
//! - Side1 x side2 distance matrix with unit directions ([`CrossDistances`]).
//! - A proportional side2 search window per side1 index ([`search_bounds`]).
//! - Normal-projection matching of interior points with a per-frame sign
//!   vote ([`match_by_projection`]).
//! - Head and tail re-matched by walking both sides ([`update_ends_by_walking`]).
//! - Crossing pairs removed ([`repair_ordering`]).
//!
//! Frames are independent; [`SkeletonExtractor::compute_all`] runs them in
//! parallel. Missing or degenerate frames yield `None`, never an error.

mod bounds;
mod config;
mod cross;
mod extractor;
mod projection;
mod repair;
mod walk;

pub use bounds::search_bounds;
pub use config::SkeletonConfig;
pub use cross::CrossDistances;
pub use extractor::{ContourFrame, SkeletonExtractor, SkeletonFrame};
pub use projection::{
    ProjectionMatch, ProjectionSign, majority_sign, match_by_projection, projection_index,
};
pub use repair::repair_ordering;
pub use walk::{partners_via_walk, update_ends_by_walking};
