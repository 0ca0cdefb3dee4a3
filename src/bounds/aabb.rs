//! Integer axis-aligned bounding boxes.

use crate::primitives::{IntPoint2, IntSegment2};

/// An axis-aligned bounding box with integer coordinates.
///
/// Bounds are inclusive on both ends; a box built from a single point
/// contains that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntAabb {
    pub min: IntPoint2,
    pub max: IntPoint2,
}

impl IntAabb {
    /// Creates a bounding box from min and max corners.
    #[inline]
    pub const fn new(min: IntPoint2, max: IntPoint2) -> Self {
        Self { min, max }
    }

    /// Creates an empty bounding box suitable as an accumulator.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            min: IntPoint2::new(i64::MAX, i64::MAX),
            max: IntPoint2::new(i64::MIN, i64::MIN),
        }
    }

    /// Creates a bounding box around a single segment.
    #[inline]
    pub fn from_segment(seg: IntSegment2) -> Self {
        Self {
            min: IntPoint2::new(
                seg.first.x.min(seg.second.x),
                seg.first.y.min(seg.second.y),
            ),
            max: IntPoint2::new(
                seg.first.x.max(seg.second.x),
                seg.first.y.max(seg.second.y),
            ),
        }
    }

    /// Creates a bounding box around a set of points.
    pub fn from_points(points: &[IntPoint2]) -> Self {
        let mut aabb = Self::empty();
        for &p in points {
            aabb.expand_point(p);
        }
        aabb
    }

    /// Expands to include a point.
    #[inline]
    pub fn expand_point(&mut self, p: IntPoint2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Expands to include another bounding box.
    #[inline]
    pub fn expand(&mut self, other: Self) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    /// Returns the union of two bounding boxes.
    #[inline]
    pub fn merged(self, other: Self) -> Self {
        let mut out = self;
        out.expand(other);
        out
    }

    /// Returns `true` if the point lies within the box (boundary included).
    #[inline]
    pub fn contains_point(&self, p: IntPoint2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Returns `true` if the two boxes overlap (touching counts).
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Returns the extent along each axis.
    #[inline]
    pub fn extent(&self) -> IntPoint2 {
        self.max - self.min
    }

    /// Returns the index of the longest axis: 0 for x, 1 for y.
    #[inline]
    pub fn longest_axis(&self) -> usize {
        let e = self.extent();
        if e.x >= e.y {
            0
        } else {
            1
        }
    }

    /// Returns the center point, rounded toward negative infinity.
    #[inline]
    pub fn center(&self) -> IntPoint2 {
        IntPoint2::new(
            self.min.x + (self.max.x - self.min.x) / 2,
            self.min.y + (self.max.y - self.min.y) / 2,
        )
    }
}
