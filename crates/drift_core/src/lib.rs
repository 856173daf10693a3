//! Drift core primitives
//!
//! Geometry types and event identifiers shared by the animation and
//! scroll crates. Everything here is plain data: no allocation, no
//! platform dependencies.

pub mod events;
pub mod geometry;

pub use geometry::{EdgeInsets, Point, Rect, Size};
