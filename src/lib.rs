//! # Marga-Nav: Grid Navigation for 2D Worlds
//!
//! Navigation core for agents moving through a large 2D world rendered from
//! a pre-rasterized occupancy map. It answers exactly two questions:
//!
//! - **"Is point P traversable?"** — the walkability predicate
//! - **"What waypoints get an entity from A to B?"** — the path planner
//!
//! Everything else in the host application (movement interpolation, world
//! state, rendering) is a consumer of these two interfaces.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{OccupancyMap, PathPlanner, Point};
//!
//! // A fully transparent 16x16 RGBA raster: every cell walkable.
//! let raster = vec![0u8; 16 * 16 * 4];
//! let map = OccupancyMap::from_rgba(16, 16, &raster)?;
//!
//! let planner = PathPlanner::with_defaults(&map);
//! let result = planner.find_path(Point::new(1.2, 1.7), Point::new(14.0, 14.0));
//! assert!(result.success);
//! assert_eq!(result.waypoints.first(), Some(&Point::new(1.5, 1.5)));
//! # Ok::<(), marga_nav::MapError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`](crate::core): coordinate types ([`GridCoord`], [`Point`]) and the single
//!   pixel-center normalization boundary between them
//! - [`grid`]: the immutable [`OccupancyMap`] and the [`OpacitySource`]
//!   raster seam (walkable iff the source pixel is fully transparent)
//! - [`query`]: the [`WalkabilityChecker`] — point tests, Bresenham line of
//!   sight, and corner-safe 8-directional neighbor enumeration
//! - [`pathfinding`]: A* with octile step costs and a Euclidean heuristic,
//!   plus line-of-sight string pulling of the result
//!
//! ## Failure Semantics
//!
//! Nothing here panics during normal operation. An unloaded map degrades to
//! "everything blocked", out-of-bounds coordinates report blocked, and every
//! planning failure is a [`PathFailure`] value with a `log` diagnostic —
//! a planning failure must never interrupt the host's control flow.
//!
//! ## Concurrency
//!
//! `find_path` is synchronous and holds no state across calls. The map is
//! immutable after construction, so any number of concurrent planning calls
//! may share one `OccupancyMap`.

#![forbid(unsafe_code)]

pub mod core;
pub mod grid;
pub mod pathfinding;
pub mod query;

// Re-export main types at crate root
pub use crate::core::{GridCoord, Point};
pub use grid::{MapError, OccupancyMap, OpacitySource, RgbaBuffer};
pub use pathfinding::{find_path, PathFailure, PathPlanner, PathResult, PlannerConfig};
pub use query::WalkabilityChecker;
