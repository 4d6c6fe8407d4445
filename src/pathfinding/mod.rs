//! Path planning over the occupancy map.
//!
//! This module answers "what waypoint sequence gets an entity from A to B":
//!
//! - **A* search** over the implicit graph defined by the walkability
//!   queries, with octile step costs and a Euclidean heuristic
//! - **String pulling** that collapses the raw cell staircase into the
//!   minimal set of genuine turning points
//! - **Frontier**: the priority queue ordering the open set
//!
//! ```rust,ignore
//! use marga_nav::pathfinding::PathPlanner;
//!
//! let planner = PathPlanner::with_defaults(&map);
//! let result = planner.find_path(start, goal);
//! if result.success {
//!     println!("{} waypoints", result.waypoints.len());
//! }
//! ```

pub mod frontier;
pub mod planner;
pub mod smoothing;
pub mod types;

pub use frontier::Frontier;
pub use planner::{find_path, PathPlanner};
pub use smoothing::{path_length, string_pull};
pub use types::{PathFailure, PathResult, PlannerConfig};
