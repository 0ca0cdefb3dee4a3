//! Float-side point and segment types.
//!
//! World geometry is integer; these types exist for the non-decision side of
//! the system: offset deltas, distances, and sector-border segments whose
//! endpoints are described in continuous coordinates.

use super::IntPoint2;
use num_traits::Float;

/// A 2D point with floating-point coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPoint2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> FloatPoint2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the dot product with another point treated as a vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the Euclidean norm.
    #[inline]
    pub fn norm(self) -> F {
        self.dot(self).sqrt()
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        ((other.x - self.x) * (other.x - self.x) + (other.y - self.y) * (other.y - self.y)).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Returns a normalized (unit length) copy.
    ///
    /// Returns `None` if the vector is too small to normalize reliably.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let n = self.norm();
        if n > F::epsilon() {
            Some(Self::new(self.x / n, self.y / n))
        } else {
            None
        }
    }
}

impl FloatPoint2<f64> {
    /// Rounds to the nearest integer point.
    #[inline]
    pub fn round_to_int(self) -> IntPoint2 {
        IntPoint2::new(self.x.round() as i64, self.y.round() as i64)
    }
}

/// A 2D line segment with floating-point endpoints.
///
/// Used for sector-border segments supplied by the sector-adjacency layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatSegment2<F> {
    pub first: FloatPoint2<F>,
    pub second: FloatPoint2<F>,
}

impl<F: Float> FloatSegment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(first: FloatPoint2<F>, second: FloatPoint2<F>) -> Self {
        Self { first, second }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            first: FloatPoint2::new(x1, y1),
            second: FloatPoint2::new(x2, y2),
        }
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.first.distance(self.second)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `first`
    /// - `t = 1` returns `second`
    #[inline]
    pub fn point_at(self, t: F) -> FloatPoint2<F> {
        self.first.lerp(self.second, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp() {
        let a: FloatPoint2<f64> = FloatPoint2::new(0.0, 0.0);
        let b = FloatPoint2::new(10.0, 20.0);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_to_int() {
        let p = FloatPoint2::new(2.5_f64, -1.4);
        assert_eq!(p.round_to_int(), IntPoint2::new(3, -1));
    }

    #[test]
    fn test_segment_point_at() {
        let s: FloatSegment2<f64> = FloatSegment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.point_at(0.25).x, 2.5, epsilon = 1e-12);
        assert_relative_eq!(s.length(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero() {
        let v: FloatPoint2<f64> = FloatPoint2::new(0.0, 0.0);
        assert!(v.normalize().is_none());
    }

    #[test]
    fn test_f32_support() {
        let s: FloatSegment2<f32> = FloatSegment2::from_coords(0.0, 0.0, 3.0, 4.0);
        assert!((s.length() - 5.0).abs() < 1e-6);
    }
}
