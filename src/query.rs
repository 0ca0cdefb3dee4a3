//! Tree query layer: deepest-node picking, containment, enumeration.
//!
//! Land containment is boundary-inclusive and hole containment is
//! boundary-exclusive, so a point on an edge shared between land and hole is
//! always land. Entities standing exactly on a wall therefore resolve to the
//! walkable side and never oscillate between regions.

use crate::predicates::PointContainment;
use crate::primitives::{IntPoint2, IntSegment2};
use crate::tree::{NodeId, PolyTree};

/// How a segment relates to a single polygon ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentContainment {
    /// Entirely outside the ring.
    Outside,
    /// Exactly coincident with a ring edge.
    On,
    /// Entirely in the ring interior.
    In,
    /// Crosses the boundary, or touches it without being an exact edge.
    Intersects,
}

/// Descends the tree to the deepest node containing `p`.
///
/// Returns the node id and whether that node is a hole. Land nodes include
/// their boundary; hole nodes exclude theirs. A point outside all terrain
/// resolves to the root hole.
pub fn pick_deepest_polynode(tree: &PolyTree, p: IntPoint2) -> (NodeId, bool) {
    debug_assert!(tree.root().is_hole() && tree.root().contour().is_empty());
    let mut current = PolyTree::ROOT;
    'descend: loop {
        for &child in tree.node(current).children() {
            let node = tree.node(child);
            let c = node.contour().contains_point(p);
            let contained = if node.is_hole() {
                c == PointContainment::Inside
            } else {
                c != PointContainment::Outside
            };
            if contained {
                current = child;
                continue 'descend;
            }
        }
        return (current, tree.node(current).is_hole());
    }
}

/// Deepest-node descent for trees whose polygons describe hole shapes.
///
/// The inclusion rule flips: nodes at land depth are boundary-exclusive and
/// nodes at hole depth boundary-inclusive, so a point on a shared edge
/// resolves to the hole side.
pub fn pick_deepest_polynode_given_hole_shape(tree: &PolyTree, p: IntPoint2) -> (NodeId, bool) {
    debug_assert!(tree.root().is_hole() && tree.root().contour().is_empty());
    let mut current = PolyTree::ROOT;
    'descend: loop {
        for &child in tree.node(current).children() {
            let node = tree.node(child);
            let c = node.contour().contains_point(p);
            let contained = if node.is_hole() {
                c != PointContainment::Outside
            } else {
                c == PointContainment::Inside
            };
            if contained {
                current = child;
                continue 'descend;
            }
        }
        return (current, tree.node(current).is_hole());
    }
}

/// Single-level land containment: inside or on the land contour, and neither
/// inside nor on any immediate child hole.
///
/// Stricter about hole boundaries than the tree descent: here a point resting
/// on a child hole's contour is rejected, so the test answers "is this point
/// in this node's own region" rather than "which side of a shared wall".
pub fn point_in_land_polygon_nonrecursive(tree: &PolyTree, land: NodeId, p: IntPoint2) -> bool {
    let node = tree.node(land);
    if node.contour().contains_point(p) == PointContainment::Outside {
        return false;
    }
    node.children()
        .iter()
        .all(|&hole| tree.node(hole).contour().contains_point(p) == PointContainment::Outside)
}

/// Classifies a segment against one node's contour ring.
///
/// An exact edge match is `On` and takes priority over everything else. Any
/// boundary contact short of an exact match, including a sub-span of an edge
/// or an endpoint resting on the ring, is `Intersects`: only segments whose
/// relation to the boundary is unambiguous classify as `In` or `Outside`.
pub fn segment_in_polygon(tree: &PolyTree, node: NodeId, seg: IntSegment2) -> SegmentContainment {
    let bvh = tree.edge_bvh(node);
    if bvh.contains_edge(seg) {
        return SegmentContainment::On;
    }
    if bvh.crosses(seg) {
        return SegmentContainment::Intersects;
    }

    let contour = tree.node(node).contour();
    let c1 = contour.contains_point(seg.first);
    let c2 = contour.contains_point(seg.second);
    match (c1, c2) {
        (PointContainment::On, _) | (_, PointContainment::On) => SegmentContainment::Intersects,
        (PointContainment::Inside, PointContainment::Inside) => SegmentContainment::In,
        (PointContainment::Outside, PointContainment::Outside) => SegmentContainment::Outside,
        // One endpoint in, one out, with no detected crossing: the segment
        // still pierces the boundary somewhere.
        (PointContainment::Inside, PointContainment::Outside)
        | (PointContainment::Outside, PointContainment::Inside) => SegmentContainment::Intersects,
    }
}

/// Single-level land containment for a segment.
///
/// The segment must sit in the land ring (exactly on its boundary counts),
/// and must relate to every immediate child hole as fully outside or exactly
/// on the hole boundary.
pub fn segment_in_land_polygon_nonrecursive(
    tree: &PolyTree,
    land: NodeId,
    seg: IntSegment2,
) -> bool {
    match segment_in_polygon(tree, land, seg) {
        SegmentContainment::On => true,
        SegmentContainment::Outside | SegmentContainment::Intersects => false,
        SegmentContainment::In => tree.node(land).children().iter().all(|&hole| {
            matches!(
                segment_in_polygon(tree, hole, seg),
                SegmentContainment::Outside | SegmentContainment::On
            )
        }),
    }
}

/// Lazy iterator over the land nodes of a tree.
///
/// Yields each land in stack order: root children first, then the islands
/// inside their holes, recursively.
pub struct LandNodeIter<'t> {
    tree: &'t PolyTree,
    stack: Vec<NodeId>,
}

impl Iterator for LandNodeIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let land = self.stack.pop()?;
        for &hole in self.tree.node(land).children() {
            self.stack.extend(self.tree.node(hole).children());
        }
        Some(land)
    }
}

/// Iterates every land node, lazily.
pub fn enumerate_land_nodes(tree: &PolyTree) -> LandNodeIter<'_> {
    LandNodeIter {
        tree,
        stack: tree.root().children().to_vec(),
    }
}

/// Collects every land node eagerly. Same set as [`enumerate_land_nodes`].
pub fn get_land_nodes(tree: &PolyTree) -> Vec<NodeId> {
    enumerate_land_nodes(tree).collect()
}

/// Iterates every node below the root.
///
/// `root` must be [`PolyTree::ROOT`]; passing any other node is a caller
/// bug and panics.
pub fn enumerate_all_nonroot_nodes(
    tree: &PolyTree,
    root: NodeId,
) -> impl Iterator<Item = NodeId> + '_ {
    assert_eq!(root, PolyTree::ROOT, "enumeration must start at the root");
    tree.node_ids()
}
