//! Path planning types.

use crate::core::{GridCoord, Point};

/// Path planner configuration
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Diagonal movement cost multiplier (sqrt(2) on a unit grid)
    pub diagonal_cost: f32,
    /// Apply line-of-sight string pulling to the reconstructed path
    pub smooth: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            diagonal_cost: std::f32::consts::SQRT_2,
            smooth: true,
        }
    }
}

/// Result of a path planning call
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Ordered waypoints from start to goal inclusive, pixel-centered
    /// (empty if no path found). Owned by the caller; the planner retains
    /// nothing.
    pub waypoints: Vec<Point>,
    /// Raw A* cells before smoothing (empty for the line-of-sight fast path)
    pub raw_cells: Vec<GridCoord>,
    /// Total path cost in grid units
    pub cost: f32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            waypoints: Vec::new(),
            raw_cells: Vec::new(),
            cost: f32::INFINITY,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Total waypoint-to-waypoint length of the returned path
    pub fn length(&self) -> f32 {
        if self.waypoints.len() < 2 {
            return 0.0;
        }
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }
}

/// Reason for path failure.
///
/// None of these are errors: every failure mode is an expected, recoverable
/// outcome left to the caller (retarget, report, retry later).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// The occupancy map has not finished loading
    MapNotReady,
    /// Start cell is not walkable (or out of bounds)
    StartBlocked,
    /// Goal cell is not walkable (or out of bounds)
    GoalBlocked,
    /// Both endpoints are walkable but no connecting path exists
    NoPath,
}
