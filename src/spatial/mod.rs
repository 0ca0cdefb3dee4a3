//! Spatial acceleration structures.

mod bvh;

pub use bvh::SegmentBvh;
