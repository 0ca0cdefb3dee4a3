//! Hierarchical polygon tree.
//!
//! A `PolyTree` is the output of every boolean operation: an arena of nodes
//! alternating between land and hole levels, rooted at a contourless hole
//! that represents the infinite void outside all terrain. Node 0 is always
//! that root; an empty tree is just the root with no children.
//!
//! Winding is normalized on insertion: land contours are counter-clockwise,
//! hole contours clockwise.

use std::sync::OnceLock;

use crate::clip::FloatShapes;
use crate::contour::Contour;
use crate::spatial::SegmentBvh;

/// Index of a node within its `PolyTree` arena.
pub type NodeId = usize;

/// One node of a polygon tree: a contour plus its place in the hierarchy.
#[derive(Debug)]
pub struct PolyNode {
    contour: Contour,
    is_hole: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    edge_bvh: OnceLock<SegmentBvh>,
    barrier_bvh: OnceLock<SegmentBvh>,
}

impl PolyNode {
    fn new(contour: Contour, is_hole: bool, parent: Option<NodeId>) -> Self {
        Self {
            contour,
            is_hole,
            parent,
            children: Vec::new(),
            edge_bvh: OnceLock::new(),
            barrier_bvh: OnceLock::new(),
        }
    }

    /// The node's contour. Empty for the root.
    #[inline]
    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    #[inline]
    pub fn is_hole(&self) -> bool {
        self.is_hole
    }

    #[inline]
    pub fn is_land(&self) -> bool {
        !self.is_hole
    }

    /// The parent node id. `None` only for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ids of the immediate children.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A hierarchical polygon decomposition with a contourless root hole.
#[derive(Debug)]
pub struct PolyTree {
    nodes: Vec<PolyNode>,
}

impl PolyTree {
    /// The root node id.
    pub const ROOT: NodeId = 0;

    /// Creates a tree holding only the contourless root hole.
    pub fn new_root() -> Self {
        Self {
            nodes: vec![PolyNode::new(Contour::default(), true, None)],
        }
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &PolyNode {
        &self.nodes[id]
    }

    #[inline]
    pub fn root(&self) -> &PolyNode {
        &self.nodes[Self::ROOT]
    }

    /// Total number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the tree holds no terrain at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Ids of every node except the root, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        1..self.nodes.len()
    }

    /// Appends a child under `parent`, inferring hole-ness from depth parity
    /// and normalizing winding (land counter-clockwise, holes clockwise).
    pub fn add_child(&mut self, parent: NodeId, mut contour: Contour) -> NodeId {
        let is_hole = !self.nodes[parent].is_hole;
        let wants_ccw = !is_hole;
        if contour.is_valid_ring() && contour.is_counter_clockwise() != wants_ccw {
            contour.reverse();
        }
        let id = self.nodes.len();
        self.nodes.push(PolyNode::new(contour, is_hole, Some(parent)));
        self.nodes[parent].children.push(id);
        id
    }

    /// Builds a tree from boolean-engine output shapes.
    ///
    /// Each shape is an outer land ring followed by its hole rings. Shapes
    /// nested inside another shape's hole arrive as independent shapes, so
    /// lands are re-nested here by containment: a land's parent is the
    /// smallest hole that contains it, or the root. Inserting lands largest
    /// first guarantees a containing hole exists before its islands.
    pub(crate) fn from_shapes(shapes: FloatShapes) -> Self {
        let mut lands: Vec<(Contour, Vec<Contour>)> = Vec::new();
        for shape in shapes {
            let mut rings = shape.into_iter();
            let Some(outer) = rings.next() else { continue };
            let outer = Contour::from_float_ring(&outer);
            if !outer.is_valid_ring() {
                continue;
            }
            let holes = rings
                .map(|r| Contour::from_float_ring(&r))
                .filter(Contour::is_valid_ring)
                .collect();
            lands.push((outer, holes));
        }
        lands.sort_by_key(|(outer, _)| {
            std::cmp::Reverse(outer.signed_area_doubled().unsigned_abs())
        });

        let mut tree = Self::new_root();
        for (outer, holes) in lands {
            let parent = tree.smallest_containing_hole(&outer);
            let land = tree.add_child(parent, outer);
            for hole in holes {
                tree.add_child(land, hole);
            }
        }
        tree
    }

    /// Finds the smallest already-inserted hole containing `contour`, falling
    /// back to the root.
    fn smallest_containing_hole(&self, contour: &Contour) -> NodeId {
        let mut best = Self::ROOT;
        let mut best_area = u128::MAX;
        for id in self.node_ids() {
            let node = &self.nodes[id];
            if !node.is_hole {
                continue;
            }
            let area = node.contour.signed_area_doubled().unsigned_abs();
            if area < best_area && ring_contains_contour(&node.contour, contour) {
                best = id;
                best_area = area;
            }
        }
        best
    }

    /// Rebuilds the tree without subtrees whose contour area is at or below
    /// `min_area`. Degenerate contours are dropped regardless.
    pub fn prune(self, min_area: f64) -> Self {
        let mut out = Self::new_root();
        let mut stack: Vec<(NodeId, NodeId)> = self.nodes[Self::ROOT]
            .children
            .iter()
            .map(|&c| (c, Self::ROOT))
            .collect();
        while let Some((old_id, new_parent)) = stack.pop() {
            let node = &self.nodes[old_id];
            if !node.contour.is_valid_ring() || node.contour.area() <= min_area {
                continue;
            }
            let new_id = out.add_child(new_parent, node.contour.clone());
            for &c in &node.children {
                stack.push((c, new_id));
            }
        }
        out
    }

    /// Collects contours across the tree.
    ///
    /// With `include_outer` every non-root contour is returned; without it,
    /// the outermost land level is skipped and collection starts at depth 2
    /// (the holes of top-level lands, and everything below them).
    pub fn flatten_to_contours(&self, include_outer: bool) -> Vec<Contour> {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = self.nodes[Self::ROOT]
            .children
            .iter()
            .map(|&c| (c, 1))
            .collect();
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            if include_outer || depth >= 2 {
                out.push(node.contour.clone());
            }
            for &c in &node.children {
                stack.push((c, depth + 1));
            }
        }
        out
    }

    /// Panics unless the tree upholds the structural invariant: node 0 is a
    /// contourless hole, every other node has a valid contour, and hole-ness
    /// alternates between parent and child.
    ///
    /// Every consumer of a finalized navmesh may assume this holds; a
    /// violation is a construction bug, not a recoverable condition.
    pub fn assert_is_contourless_root_hole(&self) {
        let root = &self.nodes[Self::ROOT];
        assert!(root.is_hole, "root must be a hole");
        assert!(root.contour.is_empty(), "root must be contourless");
        assert!(root.parent.is_none(), "root must have no parent");
        for id in self.node_ids() {
            let node = &self.nodes[id];
            assert!(
                node.contour.is_valid_ring(),
                "non-root node {id} has a degenerate contour"
            );
            let parent = node
                .parent
                .unwrap_or_else(|| panic!("non-root node {id} has no parent"));
            assert_ne!(
                node.is_hole, self.nodes[parent].is_hole,
                "node {id} does not alternate hole-ness with its parent"
            );
            assert!(
                self.nodes[parent].children.contains(&id),
                "node {id} missing from parent's child list"
            );
        }
    }

    /// The BVH over this node's own contour edges, built on first use.
    pub fn edge_bvh(&self, id: NodeId) -> &SegmentBvh {
        let node = &self.nodes[id];
        if let Some(bvh) = node.edge_bvh.get() {
            return bvh;
        }
        let segments = node.contour.edges().collect();
        node.edge_bvh.get_or_init(|| SegmentBvh::new(segments))
    }

    /// The BVH over this node's barriers, built on first use.
    ///
    /// For a land node the barriers are its own contour edges plus the edges
    /// of every immediate child hole: together the walls an entity inside
    /// this region cannot cross.
    pub fn barrier_bvh(&self, id: NodeId) -> &SegmentBvh {
        let node = &self.nodes[id];
        if let Some(bvh) = node.barrier_bvh.get() {
            return bvh;
        }
        let mut segments: Vec<_> = node.contour.edges().collect();
        for &child in &node.children {
            segments.extend(self.nodes[child].contour.edges());
        }
        node.barrier_bvh.get_or_init(|| SegmentBvh::new(segments))
    }
}

/// Tests whether `inner` lies inside the ring of `outer`.
///
/// Scans `inner`'s vertices for the first strict classification; a ring with
/// every vertex on the boundary counts as contained.
fn ring_contains_contour(outer: &Contour, inner: &Contour) -> bool {
    use crate::predicates::PointContainment;
    for &p in inner.points() {
        match outer.contains_point(p) {
            PointContainment::Inside => return true,
            PointContainment::Outside => return false,
            PointContainment::On => continue,
        }
    }
    !inner.is_empty()
}
