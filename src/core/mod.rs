//! Fundamental coordinate types.

pub mod point;

pub use point::{GridCoord, Point};
