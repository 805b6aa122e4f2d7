use wm_core::Error;
use wm_filter::SmoothingEdge;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkeletonConfig {
    /// Savitzky-Golay window as a fraction of side length. `0.0` disables
    /// smoothing.
    pub smoothing_fraction: f64,
    pub smoothing_order: usize,
    pub smoothing_edge: SmoothingEdge,
    /// Fraction of side2 searched behind the proportional position.
    pub back_search: f64,
    /// Fraction of side2 searched ahead of the proportional position.
    pub forward_search: f64,
    /// Fraction of side1 re-matched by walking at each end. Side2 walks
    /// twice as many points.
    pub end_walk_fraction: f64,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            smoothing_fraction: 1.0 / 12.0,
            smoothing_order: 3,
            smoothing_edge: SmoothingEdge::Interp,
            back_search: 0.3,
            forward_search: 0.3,
            end_walk_fraction: 0.15,
        }
    }
}

impl SkeletonConfig {
    pub fn validate(&self) -> Result<(), Error> {
        check_fraction("smoothing_fraction", self.smoothing_fraction)?;
        check_fraction("back_search", self.back_search)?;
        check_fraction("forward_search", self.forward_search)?;
        check_fraction("end_walk_fraction", self.end_walk_fraction)?;
        if self.smoothing_order == 0 {
            return Err(Error::InvalidParameter {
                name: "smoothing_order",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn check_fraction(name: &'static str, v: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: "must lie in [0, 1]",
        })
    }
}
