//! Axis-aligned bounding volumes.

mod aabb;

pub use aabb::IntAabb;
