//! Closed integer contours.
//!
//! A contour is an implicitly closed ring of integer vertices. Land contours
//! are stored counter-clockwise and hole contours clockwise; the tree layer
//! normalizes winding when it assembles nodes from boolean output.

use crate::bounds::IntAabb;
use crate::predicates::{point_in_ring, PointContainment};
use crate::primitives::{IntPoint2, IntSegment2};

/// An implicitly closed polygon ring with integer vertices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    points: Vec<IntPoint2>,
}

impl Contour {
    /// Creates a contour from a vertex list.
    ///
    /// The ring is implicitly closed; do not repeat the first vertex at the
    /// end. A trailing duplicate of the first vertex is dropped.
    pub fn new(mut points: Vec<IntPoint2>) -> Self {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        points.dedup();
        Self { points }
    }

    /// Creates a contour from float coordinates, rounding to the grid.
    ///
    /// Consecutive vertices that round to the same point collapse to one.
    pub fn from_float_ring(ring: &[[f64; 2]]) -> Self {
        let points = ring
            .iter()
            .map(|&[x, y]| IntPoint2::new(x.round() as i64, y.round() as i64))
            .collect();
        Self::new(points)
    }

    /// The vertices of the ring, without a closing duplicate.
    #[inline]
    pub fn points(&self) -> &[IntPoint2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the contour has enough vertices to enclose area.
    #[inline]
    pub fn is_valid_ring(&self) -> bool {
        self.points.len() >= 3
    }

    /// Twice the signed area, exactly.
    ///
    /// Positive for counter-clockwise winding.
    pub fn signed_area_doubled(&self) -> i128 {
        let n = self.points.len();
        if n < 3 {
            return 0;
        }
        let mut sum: i128 = 0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.cross(b);
        }
        sum
    }

    /// The unsigned area as a float.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.signed_area_doubled().unsigned_abs() as f64) / 2.0
    }

    /// Returns `true` if the winding is counter-clockwise.
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area_doubled() > 0
    }

    /// Reverses the winding in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Iterates over the edges of the ring, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = IntSegment2> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| IntSegment2::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Tests a point against the ring, distinguishing the boundary.
    #[inline]
    pub fn contains_point(&self, p: IntPoint2) -> PointContainment {
        point_in_ring(&self.points, p)
    }

    /// The bounding box of the vertices.
    #[inline]
    pub fn aabb(&self) -> IntAabb {
        IntAabb::from_points(&self.points)
    }

    /// Converts to a float ring for the boolean engine.
    pub fn to_float_ring(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.x as f64, p.y as f64])
            .collect()
    }
}

impl From<Vec<IntPoint2>> for Contour {
    fn from(points: Vec<IntPoint2>) -> Self {
        Self::new(points)
    }
}

/// Builds an axis-aligned rectangle contour, counter-clockwise.
pub fn rect_contour(min: IntPoint2, max: IntPoint2) -> Contour {
    Contour::new(vec![
        min,
        IntPoint2::new(max.x, min.y),
        max,
        IntPoint2::new(min.x, max.y),
    ])
}
