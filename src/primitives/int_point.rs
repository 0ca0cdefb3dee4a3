//! Exact integer 2D point type.

use super::FloatPoint2;
use std::ops::{Add, Neg, Sub};

/// A 2D point with fixed-point integer world coordinates.
///
/// Integer coordinates are used for every containment and intersection
/// decision so that predicates are exact and deterministic. Products are
/// widened to `i128`, which cannot overflow for any pair of `i64` inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IntPoint2 {
    pub x: i64,
    pub y: i64,
}

impl IntPoint2 {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Computes the dot product with another point treated as a vector.
    #[inline]
    pub fn dot(self, other: Self) -> i128 {
        self.x as i128 * other.x as i128 + self.y as i128 * other.y as i128
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> i128 {
        self.x as i128 * other.y as i128 - self.y as i128 * other.x as i128
    }

    /// Returns the squared Euclidean norm, exactly.
    #[inline]
    pub fn norm_squared(self) -> i128 {
        self.dot(self)
    }

    /// Returns the Euclidean norm as a float.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.norm_squared() as f64).sqrt()
    }

    /// Returns the squared distance to another point, exactly.
    #[inline]
    pub fn distance_squared(self, other: Self) -> i128 {
        (other - self).norm_squared()
    }

    /// Returns the Euclidean distance to another point as a float.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).norm()
    }

    /// Converts to a float point for non-decision arithmetic.
    #[inline]
    pub fn to_float(self) -> FloatPoint2<f64> {
        FloatPoint2::new(self.x as f64, self.y as f64)
    }
}

impl Add for IntPoint2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for IntPoint2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for IntPoint2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let p = IntPoint2::new(3, -4);
        assert_eq!(p.x, 3);
        assert_eq!(p.y, -4);
    }

    #[test]
    fn test_cross_sign() {
        let a = IntPoint2::new(1, 0);
        let b = IntPoint2::new(0, 1);
        assert_eq!(a.cross(b), 1);
        assert_eq!(b.cross(a), -1);
    }

    #[test]
    fn test_cross_no_overflow() {
        let a = IntPoint2::new(i64::MAX, i64::MAX);
        let b = IntPoint2::new(i64::MIN, i64::MAX);
        // Would overflow i64 many times over; must stay exact in i128.
        let expected = i64::MAX as i128 * i64::MAX as i128 - i64::MAX as i128 * i64::MIN as i128;
        assert_eq!(a.cross(b), expected);
    }

    #[test]
    fn test_norm() {
        let p = IntPoint2::new(3, 4);
        assert_eq!(p.norm_squared(), 25);
        assert_relative_eq!(p.norm(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance() {
        let a = IntPoint2::new(1, 1);
        let b = IntPoint2::new(4, 5);
        assert_eq!(a.distance_squared(b), 25);
        assert_relative_eq!(a.distance(b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = IntPoint2::new(1, 2);
        let b = IntPoint2::new(3, 4);
        assert_eq!(a + b, IntPoint2::new(4, 6));
        assert_eq!(b - a, IntPoint2::new(2, 2));
        assert_eq!(-a, IntPoint2::new(-1, -2));
    }
}
