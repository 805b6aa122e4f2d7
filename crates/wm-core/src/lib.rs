//! Foundational primitives for worm contour metrology.
//!
//! ## Coordinates
//! Points are `f64` image coordinates. Contour sides, skeletons and other
//! per-frame curves are plain ordered slices of [`Point2d`]; a frame with no
//! detection is represented by the caller as `None`, never as an empty slice.
//!
//! ## Chain-Code Lengths
//! Arc length along a curve is the running sum of Euclidean distances between
//! consecutive points. The cumulative value at index 0 is 0 by definition and
//! the sequence is non-decreasing.
//!
//! ## Border Modes
//! 1D filtering supports clamp, constant fill, and reflect-101 extension.
//! Reflect-101 mirrors around edge samples without repeating edge elements.

mod border;
mod chain;
mod error;
mod geom;
mod normals;

pub use border::{BorderMode, map_index};
pub use chain::{chain_code_lengths, check_arc_length, cumulative_arc_length};
pub use error::Error;
pub use geom::{Point2d, Vec2d};
pub use normals::{compute_normal_vectors, gradient};
