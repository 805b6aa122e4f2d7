use wm_core::{Point2d, Vec2d};

/// Pairwise distances and unit directions from every side2 point to every
/// side1 point, stored row-major with one row per side1 point.
#[derive(Debug, Clone)]
pub struct CrossDistances {
    n1: usize,
    n2: usize,
    dist: Vec<f64>,
    dir: Vec<Vec2d>,
}

impl CrossDistances {
    pub fn new(side1: &[Point2d], side2: &[Point2d]) -> Self {
        let n1 = side1.len();
        let n2 = side2.len();
        let mut dist = Vec::with_capacity(n1 * n2);
        let mut dir = Vec::with_capacity(n1 * n2);

        for &p in side1 {
            for &q in side2 {
                let v = p - q;
                let d = v.norm();
                dist.push(d);
                // Coincident points keep a zero direction.
                dir.push(if d > 0.0 { v / d } else { Vec2d::default() });
            }
        }

        Self { n1, n2, dist, dir }
    }

    pub fn n1(&self) -> usize {
        self.n1
    }

    pub fn n2(&self) -> usize {
        self.n2
    }

    #[inline]
    pub fn distance(&self, i1: usize, i2: usize) -> f64 {
        self.dist[i1 * self.n2 + i2]
    }

    #[inline]
    pub fn direction(&self, i1: usize, i2: usize) -> Vec2d {
        self.dir[i1 * self.n2 + i2]
    }

    /// `true` when the pair has no usable direction.
    #[inline]
    pub fn is_degenerate(&self, i1: usize, i2: usize) -> bool {
        let d = self.distance(i1, i2);
        !(d > 0.0 && d.is_finite())
    }
}
