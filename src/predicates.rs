//! Exact geometric predicates over integer coordinates.
//!
//! Every decision the query layer makes goes through these functions. All
//! arithmetic widens to `i128`, so there is no tolerance parameter and no
//! rounding: a point is on a segment or it is not.

use crate::primitives::{IntPoint2, IntSegment2};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are exactly collinear.
    Collinear,
}

/// Computes the exact orientation of three points.
///
/// Returns the orientation of the triangle `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right
/// - `Collinear` if `c` is exactly on the line
#[inline]
pub fn orient2d(a: IntPoint2, b: IntPoint2, c: IntPoint2) -> Orientation {
    match cross_sign(a, b, c) {
        1 => Orientation::CounterClockwise,
        -1 => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

/// Sign of the cross product of (b - a) and (c - a): -1, 0, or 1.
#[inline]
pub(crate) fn cross_sign(a: IntPoint2, b: IntPoint2, c: IntPoint2) -> i32 {
    let cross = (b - a).cross(c - a);
    match cross.cmp(&0) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Returns `true` if `p` lies on the closed segment `[a, b]`.
#[inline]
pub fn point_on_segment(p: IntPoint2, seg: IntSegment2) -> bool {
    let (a, b) = (seg.first, seg.second);
    cross_sign(a, b, p) == 0 && in_box(p, a, b)
}

/// Returns `true` if `p` lies on the open segment `(a, b)` (endpoints excluded).
#[inline]
pub fn point_interior_to_segment(p: IntPoint2, seg: IntSegment2) -> bool {
    p != seg.first && p != seg.second && point_on_segment(p, seg)
}

#[inline]
fn in_box(p: IntPoint2, a: IntPoint2, b: IntPoint2) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

/// Result of a point-in-ring containment test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointContainment {
    /// The point is strictly outside the ring.
    Outside,
    /// The point is exactly on the ring boundary.
    On,
    /// The point is strictly inside the ring.
    Inside,
}

/// Tests a point against a closed ring, distinguishing the boundary exactly.
///
/// The ring is implicitly closed (last vertex connects to the first) and may
/// have either winding. Rings with fewer than 3 vertices contain nothing.
///
/// The boundary case is reported separately because land/hole containment
/// semantics differ exactly there: land includes its boundary, holes exclude
/// theirs.
pub fn point_in_ring(ring: &[IntPoint2], p: IntPoint2) -> PointContainment {
    if ring.len() < 3 {
        return PointContainment::Outside;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[j];
        let b = ring[i];

        if point_on_segment(p, IntSegment2::new(a, b)) {
            return PointContainment::On;
        }

        // Edge crosses the horizontal line through p; toggle when the
        // crossing is strictly to the right of p. The orientation sign
        // decides the side exactly.
        if (a.y > p.y) != (b.y > p.y) {
            let side = cross_sign(a, b, p);
            if (side > 0) == (b.y > a.y) {
                inside = !inside;
            }
        }
        j = i;
    }

    if inside {
        PointContainment::Inside
    } else {
        PointContainment::Outside
    }
}

/// Tests whether two segments cross, for containment purposes.
///
/// Counts a proper interior crossing, and a T-contact where an endpoint of
/// one segment lies strictly inside the other. Does NOT count shared
/// endpoints or collinear overlap; those are classified by the callers
/// (exact-edge match first, then endpoint containment), which keeps partial
/// edge overlaps conservatively rejected without this predicate firing on
/// every adjacent contour edge.
pub fn segments_cross(s: IntSegment2, t: IntSegment2) -> bool {
    let (p, q) = (s.first, s.second);
    let (a, b) = (t.first, t.second);

    let d1 = cross_sign(a, b, p);
    let d2 = cross_sign(a, b, q);

    // Collinear segments never "cross"; overlap is handled by the caller.
    if d1 == 0 && d2 == 0 {
        return false;
    }

    let d3 = cross_sign(p, q, a);
    let d4 = cross_sign(p, q, b);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    // T-contacts with an endpoint strictly interior to the other segment.
    (d1 == 0 && point_interior_to_segment(p, t))
        || (d2 == 0 && point_interior_to_segment(q, t))
        || (d3 == 0 && point_interior_to_segment(a, s))
        || (d4 == 0 && point_interior_to_segment(b, s))
}

/// Tests whether a barrier blocks a line-of-sight segment.
///
/// Asymmetric on purpose: contact at a sight endpoint never blocks (waypoints
/// are barrier vertices, and crossover points sit on barrier edges), and
/// collinear overlap never blocks (a sight running along a wall is visible).
/// A sight passing through a barrier vertex in its interior is blocked, which
/// errs conservative on grazing contacts.
pub fn sight_blocked_by(sight: IntSegment2, barrier: IntSegment2) -> bool {
    let (p, q) = (sight.first, sight.second);
    let (a, b) = (barrier.first, barrier.second);

    let d1 = cross_sign(a, b, p);
    let d2 = cross_sign(a, b, q);

    if d1 == 0 && d2 == 0 {
        return false;
    }

    let d3 = cross_sign(p, q, a);
    let d4 = cross_sign(p, q, b);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    // Barrier endpoint in the sight interior blocks; sight endpoint touching
    // the barrier does not.
    (d3 == 0 && point_interior_to_segment(a, sight))
        || (d4 == 0 && point_interior_to_segment(b, sight))
}
