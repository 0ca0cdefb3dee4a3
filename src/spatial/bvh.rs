//! Bounding volume hierarchy over line segments.
//!
//! Flat-array BVH built by median split on the longest axis. Query traversal
//! prunes by bounding box and hands overlapping segments to an exact
//! predicate, so acceleration never changes an answer, only how fast it
//! arrives.

use crate::bounds::IntAabb;
use crate::predicates::{segments_cross, sight_blocked_by};
use crate::primitives::IntSegment2;

const MAX_LEAF_SIZE: usize = 8;

#[derive(Debug, Clone)]
enum BvhNode {
    Leaf {
        bounds: IntAabb,
        first: u32,
        count: u32,
    },
    Internal {
        bounds: IntAabb,
        left: u32,
        right: u32,
    },
}

impl BvhNode {
    #[inline]
    fn bounds(&self) -> IntAabb {
        match self {
            BvhNode::Leaf { bounds, .. } | BvhNode::Internal { bounds, .. } => *bounds,
        }
    }
}

/// A BVH over a fixed set of segments.
///
/// Built once from a contour's edges or a node's barrier set; the segment
/// set never changes afterwards.
#[derive(Debug, Clone)]
pub struct SegmentBvh {
    segments: Vec<IntSegment2>,
    nodes: Vec<BvhNode>,
    indices: Vec<u32>,
}

impl SegmentBvh {
    /// Builds a BVH over the given segments.
    pub fn new(segments: Vec<IntSegment2>) -> Self {
        let mut bvh = Self {
            indices: (0..segments.len() as u32).collect(),
            segments,
            nodes: Vec::new(),
        };
        if !bvh.segments.is_empty() {
            let n = bvh.segments.len();
            bvh.build_recursive(0, n);
        }
        bvh
    }

    /// The segments this BVH was built over, in insertion order.
    #[inline]
    pub fn segments(&self) -> &[IntSegment2] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Builds the subtree over `indices[first..first + count]` and returns
    /// its node index.
    fn build_recursive(&mut self, first: usize, count: usize) -> u32 {
        let mut bounds = IntAabb::empty();
        for &i in &self.indices[first..first + count] {
            bounds.expand(IntAabb::from_segment(self.segments[i as usize]));
        }

        if count <= MAX_LEAF_SIZE {
            self.nodes.push(BvhNode::Leaf {
                bounds,
                first: first as u32,
                count: count as u32,
            });
            return (self.nodes.len() - 1) as u32;
        }

        // Median split on the longest axis of the centroid spread.
        let axis = bounds.longest_axis();
        let segments = &self.segments;
        let centroid = |i: u32| {
            let s = segments[i as usize];
            if axis == 0 {
                s.first.x + s.second.x
            } else {
                s.first.y + s.second.y
            }
        };
        let mid = count / 2;
        self.indices[first..first + count]
            .select_nth_unstable_by_key(mid, |&i| centroid(i));

        let left = self.build_recursive(first, mid);
        let right = self.build_recursive(first + mid, count - mid);
        self.nodes.push(BvhNode::Internal {
            bounds,
            left,
            right,
        });
        (self.nodes.len() - 1) as u32
    }

    /// Visits every segment whose bounds overlap `query`, stopping early
    /// when the predicate returns `true`.
    pub fn any_overlapping(
        &self,
        query: IntAabb,
        mut pred: impl FnMut(IntSegment2) -> bool,
    ) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        // Root is pushed last during construction.
        let mut stack = vec![(self.nodes.len() - 1) as u32];
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx as usize];
            if !node.bounds().intersects(&query) {
                continue;
            }
            match *node {
                BvhNode::Leaf { first, count, .. } => {
                    for &i in &self.indices[first as usize..(first + count) as usize] {
                        let seg = self.segments[i as usize];
                        if IntAabb::from_segment(seg).intersects(&query) && pred(seg) {
                            return true;
                        }
                    }
                }
                BvhNode::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        false
    }

    /// Returns `true` if any stored segment crosses `seg`.
    #[inline]
    pub fn crosses(&self, seg: IntSegment2) -> bool {
        self.any_overlapping(IntAabb::from_segment(seg), |s| segments_cross(seg, s))
    }

    /// Returns `true` if `seg` exactly matches a stored segment, in either
    /// direction.
    #[inline]
    pub fn contains_edge(&self, seg: IntSegment2) -> bool {
        self.any_overlapping(IntAabb::from_segment(seg), |s| s.same_edge(seg))
    }

    /// Returns `true` if any stored segment blocks the sight segment.
    #[inline]
    pub fn blocks_sight(&self, sight: IntSegment2) -> bool {
        self.any_overlapping(IntAabb::from_segment(sight), |s| {
            sight_blocked_by(sight, s)
        })
    }
}
