//! Error types for navmesh geometry construction.

use thiserror::Error;

/// Errors that can occur while building navmesh geometry.
///
/// These cover invalid arguments caught at the call that introduced them.
/// Structural invariant violations (for example a finalized tree whose root is
/// not a contourless hole) indicate an upstream construction bug and panic
/// instead of returning a variant here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// An offset delta was NaN or infinite.
    #[error("offset delta must be finite, got {0}")]
    NonFiniteDelta(f64),

    /// A negative delta was passed to an erode/dilate method whose sign is
    /// implied by its name.
    #[error("delta must be non-negative, got {0}")]
    NegativeDelta(f64),

    /// An offset operation was executed with no included contours.
    #[error("offset requires at least one included contour")]
    EmptyInclude,

    /// An offset operation was executed with no erode/dilate steps.
    #[error("offset requires at least one erode/dilate step")]
    NoSteps,

    /// A contour had too few vertices to form a ring.
    #[error("contour has only {vertices} vertices, need at least 3")]
    MalformedContour {
        /// Number of vertices in the offending contour.
        vertices: usize,
    },
}
