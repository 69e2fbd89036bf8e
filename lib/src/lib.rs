//! Points in the 2D Cartesian plane and the straight-line distance between them.

pub mod point;

pub use point::{create, distance, Point};
