//! Geometric primitives: exact integer points and segments, plus float-side
//! helpers for distances and border segments.

mod float;
mod int_point;
mod int_segment;

pub use float::{FloatPoint2, FloatSegment2};
pub use int_point::IntPoint2;
pub use int_segment::IntSegment2;
