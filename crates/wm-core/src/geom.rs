use core::ops::{Div, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const NAN: Self = Self {
        x: f64::NAN,
        y: f64::NAN,
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: 0.5 * (self.x + other.x),
            y: 0.5 * (self.y + other.y),
        }
    }
}

impl Vec2d {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalize(self) -> Self {
        let n = self.norm();
        if n == 0.0 || !n.is_finite() {
            Self::default()
        } else {
            self / n
        }
    }

    /// Clockwise perpendicular `(y, -x)`.
    pub fn perp(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }
}

/// Displacement from `rhs` to `self`.
impl Sub for Point2d {
    type Output = Vec2d;

    fn sub(self, rhs: Point2d) -> Vec2d {
        Vec2d::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2d {
    type Output = Vec2d;

    fn mul(self, k: f64) -> Vec2d {
        Vec2d::new(self.x * k, self.y * k)
    }
}

impl Div<f64> for Vec2d {
    type Output = Vec2d;

    fn div(self, k: f64) -> Vec2d {
        Vec2d::new(self.x / k, self.y / k)
    }
}

impl From<(f64, f64)> for Point2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::{Point2d, Vec2d};

    #[test]
    fn vec_ops_and_normalize() {
        let a = Vec2d::new(3.0, 4.0);
        let b = Vec2d::new(1.0, -2.0);

        assert_eq!(a * 2.0, Vec2d::new(6.0, 8.0));
        assert_eq!(a / 2.0, Vec2d::new(1.5, 2.0));
        assert!((a.dot(b) + 5.0).abs() < 1e-12);
        assert!((a.norm() - 5.0).abs() < 1e-12);

        let n = a.normalize();
        assert!((n.norm() - 1.0).abs() < 1e-12);

        let z = Vec2d::default().normalize();
        assert_eq!(z, Vec2d::default());

        assert_eq!(a.perp(), Vec2d { x: 4.0, y: -3.0 });
        assert!(a.dot(a.perp()).abs() < 1e-12);
    }

    #[test]
    fn point_ops() {
        let p = Point2d::new(2.0, 3.0);
        assert_eq!(p - Point2d::new(1.0, 1.0), Vec2d::new(1.0, 2.0));
        assert_eq!(Point2d::from([2.0, 3.0]), p);
        assert_eq!(Point2d::from((2.0, 3.0)), p);

        let q = Point2d::new(5.0, 7.0);
        assert!((p.distance(q) - 5.0).abs() < 1e-12);
        assert_eq!(p.midpoint(q), Point2d::new(3.5, 5.0));

        assert!(p.is_finite());
        assert!(!Point2d::NAN.is_finite());
    }
}
