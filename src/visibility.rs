//! Per-land-node visibility graph.
//!
//! Waypoints are the vertices of a land contour and its immediate child hole
//! contours; barriers are the edges of the same rings. Every waypoint pair is
//! tested for line of sight against the barriers, and the pairwise Euclidean
//! distances are stored in a growing lower-triangular matrix. Not-visible
//! entries are NaN, so one matrix serves as both adjacency and cost table.

use crate::primitives::{IntPoint2, IntSegment2};
use crate::spatial::SegmentBvh;
use crate::tree::{NodeId, PolyTree};

/// Line-of-sight graph over one land region's waypoints.
#[derive(Debug, Clone)]
pub struct VisibilityGraph {
    waypoints: Vec<IntPoint2>,
    barriers: SegmentBvh,
    // rows[i] has i + 1 entries; rows[i][i] is 0. Entries are Euclidean
    // distance when visible, NaN when not. Rows are append-only.
    rows: Vec<Vec<f64>>,
}

impl VisibilityGraph {
    /// Builds the graph for one land node of a finalized tree.
    pub fn build(tree: &PolyTree, land: NodeId) -> Self {
        debug_assert!(tree.node(land).is_land());
        let mut waypoints: Vec<IntPoint2> =
            tree.node(land).contour().points().to_vec();
        for &hole in tree.node(land).children() {
            waypoints.extend(tree.node(hole).contour().points());
        }

        let mut graph = Self {
            waypoints: Vec::with_capacity(waypoints.len()),
            barriers: tree.barrier_bvh(land).clone(),
            rows: Vec::with_capacity(waypoints.len()),
        };
        for p in waypoints {
            graph.add_waypoint(p);
        }
        graph
    }

    /// The waypoints, in insertion order.
    #[inline]
    pub fn waypoints(&self) -> &[IntPoint2] {
        &self.waypoints
    }

    #[inline]
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// The barrier segments line of sight is tested against.
    #[inline]
    pub fn barriers(&self) -> &[IntSegment2] {
        self.barriers.segments()
    }

    /// Tests line of sight between two points.
    ///
    /// A sight running exactly along a barrier, or merely touching one at a
    /// sight endpoint, is visible; crossing one is not.
    #[inline]
    pub fn line_of_sight(&self, a: IntPoint2, b: IntPoint2) -> bool {
        a == b || !self.barriers.blocks_sight(IntSegment2::new(a, b))
    }

    /// The matrix entry for a waypoint pair: Euclidean distance when the
    /// pair is mutually visible, NaN otherwise. Symmetric; zero on the
    /// diagonal.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.rows[hi][lo]
    }

    /// `true` when the pair is mutually visible.
    #[inline]
    pub fn is_visible(&self, a: usize, b: usize) -> bool {
        !self.distance(a, b).is_nan()
    }

    /// Appends a waypoint, computing its matrix row against every existing
    /// waypoint. Returns the new waypoint's index.
    ///
    /// Points are not deduplicated; callers own that policy.
    pub(crate) fn add_waypoint(&mut self, p: IntPoint2) -> usize {
        let idx = self.waypoints.len();
        let mut row = Vec::with_capacity(idx + 1);
        for &q in &self.waypoints {
            row.push(if self.line_of_sight(p, q) {
                p.distance(q)
            } else {
                f64::NAN
            });
        }
        row.push(0.0);
        self.waypoints.push(p);
        self.rows.push(row);
        idx
    }
}
