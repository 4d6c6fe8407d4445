//! Walkability queries over the occupancy map.
//!
//! The [`WalkabilityChecker`] is the single source of truth for "is this
//! cell free": point tests, Bresenham line of sight, and corner-safe
//! neighbor enumeration. It works purely in integer grid coordinates; all
//! pixel-center semantics belong to the planner.

pub mod walkability;

pub use walkability::{WalkabilityChecker, DIRECTIONS_8};
