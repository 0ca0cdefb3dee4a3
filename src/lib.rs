//! Hierarchical navmesh polygon trees and visibility graphs for 2D
//! sector-based pathfinding.
//!
//! Terrain is described by integer contours. Boolean operations ([`ops`])
//! turn them into a [`tree::PolyTree`]: land and hole regions alternating
//! under a contourless root hole. The query layer ([`query`]) answers exact
//! point and segment containment against that tree, with land boundaries
//! included and hole boundaries excluded. Per land region, a
//! [`visibility::VisibilityGraph`] links contour vertices by line of sight,
//! and a [`crossover::CrossoverPointManager`] appends waypoints on sector
//! borders so paths can cross between neighboring sectors.
//!
//! All containment and intersection decisions use exact `i64`/`i128`
//! arithmetic ([`predicates`]); floats appear only in distances, offsets,
//! and visibility costs.
//!
//! ```no_run
//! use navpoly::{IntPoint2, Punch, contour::rect_contour, query};
//!
//! let land = rect_contour(IntPoint2::new(0, 0), IntPoint2::new(1000, 1000));
//! let wall = rect_contour(IntPoint2::new(400, 0), IntPoint2::new(600, 800));
//! let tree = Punch::new()
//!     .include([land])
//!     .exclude([wall])
//!     .execute(0.0)?;
//! let (_node, is_hole) = query::pick_deepest_polynode(&tree, IntPoint2::new(100, 100));
//! assert!(!is_hole);
//! # Ok::<(), navpoly::GeometryError>(())
//! ```

pub mod bounds;
mod clip;
pub mod contour;
pub mod crossover;
pub mod error;
pub mod ops;
pub mod predicates;
pub mod primitives;
pub mod query;
pub mod spatial;
pub mod tree;
pub mod visibility;

pub use contour::Contour;
pub use crossover::{sample_border_points, CrossoverPointManager, CrossoverStats};
pub use error::GeometryError;
pub use ops::{clean_polygons, Offset, OffsetStep, Punch, Union};
pub use primitives::{FloatPoint2, FloatSegment2, IntPoint2, IntSegment2};
pub use tree::{NodeId, PolyNode, PolyTree};
pub use visibility::VisibilityGraph;
