//! Exact integer 2D line segment type.

use super::{FloatSegment2, IntPoint2};

/// A 2D line segment between two integer points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntSegment2 {
    pub first: IntPoint2,
    pub second: IntPoint2,
}

impl IntSegment2 {
    /// Creates a new segment from two points.
    #[inline]
    pub const fn new(first: IntPoint2, second: IntPoint2) -> Self {
        Self { first, second }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub const fn from_coords(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self {
            first: IntPoint2::new(x1, y1),
            second: IntPoint2::new(x2, y2),
        }
    }

    /// Returns the direction vector from first to second.
    #[inline]
    pub fn direction(self) -> IntPoint2 {
        self.second - self.first
    }

    /// Returns the squared length of the segment, exactly.
    #[inline]
    pub fn length_squared(self) -> i128 {
        self.first.distance_squared(self.second)
    }

    /// Returns the length of the segment as a float.
    #[inline]
    pub fn length(self) -> f64 {
        self.first.distance(self.second)
    }

    /// Returns the reversed segment (endpoints swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.second, self.first)
    }

    /// Returns `true` if `other` is the same undirected segment.
    #[inline]
    pub fn same_edge(self, other: Self) -> bool {
        self == other || self == other.reversed()
    }

    /// Returns `true` if the segment has zero length.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.first == self.second
    }

    /// Converts to a float segment for non-decision arithmetic.
    #[inline]
    pub fn to_float(self) -> FloatSegment2<f64> {
        FloatSegment2::new(self.first.to_float(), self.second.to_float())
    }
}

impl From<(IntPoint2, IntPoint2)> for IntSegment2 {
    fn from((first, second): (IntPoint2, IntPoint2)) -> Self {
        Self::new(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let s = IntSegment2::from_coords(0, 0, 3, 4);
        assert_eq!(s.length_squared(), 25);
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_reversed_same_edge() {
        let s = IntSegment2::from_coords(1, 2, 3, 4);
        let r = s.reversed();
        assert_eq!(r.first, IntPoint2::new(3, 4));
        assert!(s.same_edge(r));
        assert!(s.same_edge(s));
        assert!(!s.same_edge(IntSegment2::from_coords(1, 2, 3, 5)));
    }

    #[test]
    fn test_degenerate() {
        assert!(IntSegment2::from_coords(5, 5, 5, 5).is_degenerate());
        assert!(!IntSegment2::from_coords(0, 0, 1, 0).is_degenerate());
    }
}
