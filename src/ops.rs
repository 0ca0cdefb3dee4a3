//! Boolean-operation pipeline: union, punch, and offset.
//!
//! Every operation ends in a `PolyTree` whose root is a contourless hole.
//! Union and difference run through the overlay engine with positive fill;
//! offsetting miters each ring independently and then re-unions the result,
//! so islands merging or splitting between steps is handled by the engine,
//! not by the miter math.

use log::{debug, trace};

use crate::clip::{self, FloatPath};
use crate::contour::Contour;
use crate::error::GeometryError;
use crate::primitives::FloatPoint2;
use crate::tree::PolyTree;

/// Fixed erode/dilate distance used to clean boolean output.
///
/// Small enough to vanish on the integer grid; the cleanup effect comes from
/// the engine pass it forces, which re-resolves self-intersections and
/// micro-slivers.
const CLEANUP_DISTANCE: f64 = 0.05;

const MITER_LIMIT: f64 = 2.0;

/// Positive-fill union of a set of contours.
///
/// ```no_run
/// # use navpoly::{ops::Union, contour::rect_contour, primitives::IntPoint2};
/// let land = rect_contour(IntPoint2::new(0, 0), IntPoint2::new(100, 100));
/// let tree = Union::new().include([land]).execute();
/// ```
#[derive(Debug, Default)]
pub struct Union {
    include: Vec<Contour>,
}

impl Union {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds subject contours.
    pub fn include(mut self, contours: impl IntoIterator<Item = Contour>) -> Self {
        self.include.extend(contours);
        self
    }

    /// Runs the union and assembles the tree.
    ///
    /// An empty subject set yields a valid empty tree.
    pub fn execute(self) -> PolyTree {
        let subject = to_float_paths(&self.include);
        let shapes = clip::union(&subject, &[]);
        debug!(
            "union: {} contours in, {} shapes out",
            self.include.len(),
            shapes.len()
        );
        let tree = PolyTree::from_shapes(shapes);
        tree.assert_is_contourless_root_hole();
        tree
    }
}

/// Subtracts exclusion contours from inclusion contours, then cleans.
///
/// The difference output goes through a fixed micro-erode/dilate pass and an
/// optional caller-supplied erosion or dilation before the tree is built.
#[derive(Debug, Default)]
pub struct Punch {
    include: Vec<Contour>,
    exclude: Vec<Contour>,
}

impl Punch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds land contours.
    pub fn include(mut self, contours: impl IntoIterator<Item = Contour>) -> Self {
        self.include.extend(contours);
        self
    }

    /// Adds contours to subtract.
    pub fn exclude(mut self, contours: impl IntoIterator<Item = Contour>) -> Self {
        self.exclude.extend(contours);
        self
    }

    /// Runs the difference and cleanup pipeline.
    ///
    /// `additional_erosion_dilation` is applied after the fixed cleanup pass:
    /// negative erodes, positive dilates, zero skips the step. A difference
    /// that leaves nothing yields a valid empty tree.
    pub fn execute(self, additional_erosion_dilation: f64) -> Result<PolyTree, GeometryError> {
        if !additional_erosion_dilation.is_finite() {
            return Err(GeometryError::NonFiniteDelta(additional_erosion_dilation));
        }

        let subject = to_float_paths(&self.include);
        let exclusion = to_float_paths(&self.exclude);
        let shapes = clip::difference(&subject, &exclusion);
        debug!(
            "punch: {} include, {} exclude, {} shapes out",
            self.include.len(),
            self.exclude.len(),
            shapes.len()
        );
        if shapes.is_empty() {
            return Ok(PolyTree::new_root());
        }

        // Re-nest before offsetting so ring windings are normalized (land
        // counter-clockwise, holes clockwise) regardless of engine output.
        let punched = PolyTree::from_shapes(shapes).flatten_to_contours(true);
        if punched.is_empty() {
            // Every ring rounded away to a sliver.
            return Ok(PolyTree::new_root());
        }

        let mut offset = Offset::new()
            .include(punched)
            .erode(CLEANUP_DISTANCE)?
            .dilate(CLEANUP_DISTANCE)?;
        if additional_erosion_dilation != 0.0 {
            offset = offset.erode_or_dilate(additional_erosion_dilation)?;
        }
        let tree = offset.execute()?;
        tree.assert_is_contourless_root_hole();
        Ok(tree)
    }
}

/// One step of an offset sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetStep {
    /// Signed offset: negative erodes, positive dilates.
    ErodeOrDilate(f64),
    /// Prune degenerate subtrees from the preceding step's result.
    Cleanup,
}

/// A sequenced signed-offset operation.
///
/// Each offset step re-runs the engine from scratch on the previous step's
/// output; a cleanup step prunes near-zero-area subtrees instead. The step
/// list is validated as it is built, so `execute` only fails on an empty
/// configuration.
#[derive(Debug, Default)]
pub struct Offset {
    include: Vec<Contour>,
    steps: Vec<OffsetStep>,
}

impl Offset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds contours to offset. Ring winding is respected: counter-clockwise
    /// rings are treated as solid and clockwise rings as holes.
    pub fn include(mut self, contours: impl IntoIterator<Item = Contour>) -> Self {
        self.include.extend(contours);
        self
    }

    /// Appends an erosion step. The delta must be finite and non-negative.
    pub fn erode(self, delta: f64) -> Result<Self, GeometryError> {
        if delta < 0.0 {
            return Err(GeometryError::NegativeDelta(delta));
        }
        self.erode_or_dilate(-delta)
    }

    /// Appends a dilation step. The delta must be finite and non-negative.
    pub fn dilate(self, delta: f64) -> Result<Self, GeometryError> {
        if delta < 0.0 {
            return Err(GeometryError::NegativeDelta(delta));
        }
        self.erode_or_dilate(delta)
    }

    /// Appends a signed offset step: negative erodes, positive dilates.
    pub fn erode_or_dilate(mut self, delta: f64) -> Result<Self, GeometryError> {
        if !delta.is_finite() {
            return Err(GeometryError::NonFiniteDelta(delta));
        }
        self.steps.push(OffsetStep::ErodeOrDilate(delta));
        Ok(self)
    }

    /// Appends a cleanup step.
    pub fn cleanup(mut self) -> Self {
        self.steps.push(OffsetStep::Cleanup);
        self
    }

    /// Runs the step sequence and returns the final tree.
    pub fn execute(self) -> Result<PolyTree, GeometryError> {
        if self.include.is_empty() {
            return Err(GeometryError::EmptyInclude);
        }
        if self.steps.is_empty() {
            return Err(GeometryError::NoSteps);
        }
        for contour in &self.include {
            if !contour.is_valid_ring() {
                return Err(GeometryError::MalformedContour {
                    vertices: contour.len(),
                });
            }
        }

        let mut contours = self.include;
        let mut tree: Option<PolyTree> = None;
        for (i, step) in self.steps.iter().enumerate() {
            match *step {
                OffsetStep::ErodeOrDilate(delta) => {
                    trace!("offset step {i}: delta {delta}");
                    let paths: Vec<FloatPath> = contours
                        .iter()
                        .filter_map(|c| offset_ring(c, delta))
                        .collect();
                    let shapes = clip::union(&paths, &[]);
                    let next = PolyTree::from_shapes(shapes);
                    contours = next.flatten_to_contours(true);
                    tree = Some(next);
                }
                OffsetStep::Cleanup => {
                    // Leading cleanups have nothing to act on.
                    if let Some(t) = tree.take() {
                        trace!("offset step {i}: cleanup");
                        let pruned = t.prune(0.0);
                        contours = pruned.flatten_to_contours(true);
                        tree = Some(pruned);
                    }
                }
            }
        }

        let tree = match tree {
            Some(t) => t,
            // Every step was a leading cleanup; resolve the input as-is.
            None => Union::new().include(contours).execute(),
        };
        tree.assert_is_contourless_root_hole();
        debug!("offset: final tree has {} nodes", tree.node_count());
        Ok(tree)
    }
}

/// Micro-erode/dilate convenience pass over raw contours.
///
/// Forces the engine to re-resolve self-intersections and drop slivers
/// without meaningfully moving any boundary.
pub fn clean_polygons(contours: Vec<Contour>) -> Result<PolyTree, GeometryError> {
    Offset::new()
        .include(contours)
        .erode(CLEANUP_DISTANCE)?
        .dilate(CLEANUP_DISTANCE)?
        .cleanup()
        .execute()
}

/// Offsets one ring by `delta` along its vertex normals.
///
/// Convex corners are mitered up to the miter limit and beveled past it.
/// Because holes are wound opposite to land, the same outward-normal formula
/// dilates land and shrinks holes for a positive delta. Self-intersections in
/// the raw offset ring are left for the engine pass to resolve.
fn offset_ring(contour: &Contour, delta: f64) -> Option<FloatPath> {
    let pts = contour.points();
    let n = pts.len();
    if n < 3 {
        return None;
    }

    let mut out: FloatPath = Vec::with_capacity(n);
    for i in 0..n {
        let prev = pts[(i + n - 1) % n].to_float();
        let cur = pts[i].to_float();
        let next = pts[(i + 1) % n].to_float();

        let (Some(u1), Some(u2)) = (
            FloatPoint2::new(cur.x - prev.x, cur.y - prev.y).normalize(),
            FloatPoint2::new(next.x - cur.x, next.y - cur.y).normalize(),
        ) else {
            continue;
        };
        // Outward normals of the adjacent edges (ring winding decides which
        // side is outward).
        let n1 = FloatPoint2::new(u1.y, -u1.x);
        let n2 = FloatPoint2::new(u2.y, -u2.x);

        match FloatPoint2::new(n1.x + n2.x, n1.y + n2.y).normalize() {
            Some(m) => {
                let cos_half = m.dot(n1);
                if cos_half > 1.0 / MITER_LIMIT {
                    let scale = delta / cos_half;
                    out.push([cur.x + m.x * scale, cur.y + m.y * scale]);
                } else {
                    out.push([cur.x + n1.x * delta, cur.y + n1.y * delta]);
                    out.push([cur.x + n2.x * delta, cur.y + n2.y * delta]);
                }
            }
            None => {
                // 180-degree spike: the normals cancel, so bevel.
                out.push([cur.x + n1.x * delta, cur.y + n1.y * delta]);
                out.push([cur.x + n2.x * delta, cur.y + n2.y * delta]);
            }
        }
    }
    (out.len() >= 3).then_some(out)
}

fn to_float_paths(contours: &[Contour]) -> Vec<FloatPath> {
    contours
        .iter()
        .filter(|c| c.is_valid_ring())
        .map(Contour::to_float_ring)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::rect_contour;
    use crate::primitives::IntPoint2;
    use approx::assert_relative_eq;

    fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> Contour {
        rect_contour(IntPoint2::new(x0, y0), IntPoint2::new(x1, y1))
    }

    fn total_land_area(tree: &PolyTree) -> f64 {
        tree.node_ids()
            .map(|id| {
                let node = tree.node(id);
                let a = node.contour().area();
                if node.is_land() {
                    a
                } else {
                    -a
                }
            })
            .sum()
    }

    #[test]
    fn test_union_overlapping_squares() {
        let tree = Union::new()
            .include([rect(0, 0, 10, 10), rect(5, 0, 15, 10)])
            .execute();
        assert_eq!(tree.root().children().len(), 1);
        assert_relative_eq!(total_land_area(&tree), 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_union_empty_input() {
        let tree = Union::new().execute();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_punch_hole_in_square() {
        let tree = Punch::new()
            .include([rect(0, 0, 100, 100)])
            .exclude([rect(20, 20, 80, 80)])
            .execute(0.0)
            .unwrap();
        assert_eq!(tree.node_count(), 3);
        assert_relative_eq!(total_land_area(&tree), 6400.0, epsilon = 1.0);
    }

    #[test]
    fn test_punch_nothing_excluded() {
        let tree = Punch::new()
            .include([rect(0, 0, 10, 10)])
            .execute(0.0)
            .unwrap();
        assert_relative_eq!(total_land_area(&tree), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_punch_everything_excluded() {
        let tree = Punch::new()
            .include([rect(2, 2, 8, 8)])
            .exclude([rect(0, 0, 10, 10)])
            .execute(0.0)
            .unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_punch_rejects_non_finite() {
        let err = Punch::new()
            .include([rect(0, 0, 10, 10)])
            .execute(f64::NAN)
            .unwrap_err();
        assert!(matches!(err, GeometryError::NonFiniteDelta(_)));
    }

    #[test]
    fn test_offset_dilate_square() {
        let tree = Offset::new()
            .include([rect(0, 0, 10, 10)])
            .dilate(5.0)
            .unwrap()
            .execute()
            .unwrap();
        // Square corners stay mitered below the limit, so the dilation of a
        // 10x10 square by 5 is the 20x20 square.
        assert_relative_eq!(total_land_area(&tree), 400.0, epsilon = 1.0);
    }

    #[test]
    fn test_offset_zero_delta_preserves_area() {
        let tree = Offset::new()
            .include([rect(0, 0, 10, 10)])
            .erode_or_dilate(0.0)
            .unwrap()
            .execute()
            .unwrap();
        assert_relative_eq!(total_land_area(&tree), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_offset_erode_square() {
        let tree = Offset::new()
            .include([rect(0, 0, 10, 10)])
            .erode(3.0)
            .unwrap()
            .execute()
            .unwrap();
        assert_relative_eq!(total_land_area(&tree), 16.0, epsilon = 1.0);
    }

    #[test]
    fn test_offset_erode_to_nothing() {
        let tree = Offset::new()
            .include([rect(0, 0, 10, 10)])
            .erode(20.0)
            .unwrap()
            .execute()
            .unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_offset_rejects_negative_and_non_finite() {
        assert!(matches!(
            Offset::new().erode(-1.0).unwrap_err(),
            GeometryError::NegativeDelta(_)
        ));
        assert!(matches!(
            Offset::new().dilate(-1.0).unwrap_err(),
            GeometryError::NegativeDelta(_)
        ));
        assert!(matches!(
            Offset::new().erode_or_dilate(f64::INFINITY).unwrap_err(),
            GeometryError::NonFiniteDelta(_)
        ));
    }

    #[test]
    fn test_offset_requires_include_and_steps() {
        assert!(matches!(
            Offset::new().dilate(1.0).unwrap().execute().unwrap_err(),
            GeometryError::EmptyInclude
        ));
        assert!(matches!(
            Offset::new()
                .include([rect(0, 0, 10, 10)])
                .execute()
                .unwrap_err(),
            GeometryError::NoSteps
        ));
    }

    #[test]
    fn test_offset_hole_shrinks_when_land_dilates() {
        // Land 0..100 with a CW hole 40..60; dilating by 5 grows the outer
        // ring and shrinks the hole.
        let mut hole = rect(40, 40, 60, 60);
        hole.reverse();
        let tree = Offset::new()
            .include([rect(0, 0, 100, 100), hole])
            .dilate(5.0)
            .unwrap()
            .execute()
            .unwrap();
        // Outer grows to 110x110, hole shrinks to 10x10.
        assert_relative_eq!(total_land_area(&tree), 110.0 * 110.0 - 100.0, epsilon = 2.0);
    }

    #[test]
    fn test_clean_polygons_roundtrip() {
        let tree = clean_polygons(vec![rect(0, 0, 10, 10)]).unwrap();
        assert_relative_eq!(total_land_area(&tree), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cleanup_only_steps_still_resolve() {
        let tree = Offset::new()
            .include([rect(0, 0, 10, 10)])
            .cleanup()
            .execute()
            .unwrap();
        assert_relative_eq!(total_land_area(&tree), 100.0, epsilon = 1e-6);
    }
}
