//! A* path planner implementation.

use log::{debug, trace};
use std::collections::{HashMap, HashSet};

use crate::core::{GridCoord, Point};
use crate::grid::OccupancyMap;
use crate::query::WalkabilityChecker;

use super::frontier::Frontier;
use super::smoothing::string_pull;
use super::types::{PathFailure, PathResult, PlannerConfig};

/// A* path planner over an occupancy map.
///
/// Holds no state across calls: the closed set, score tables, and frontier
/// are all local to a single `find_path` invocation, so concurrent calls
/// over a shared map are safe by construction.
pub struct PathPlanner<'a> {
    map: &'a OccupancyMap,
    config: PlannerConfig,
}

impl<'a> PathPlanner<'a> {
    /// Create a new path planner
    pub fn new(map: &'a OccupancyMap, config: PlannerConfig) -> Self {
        Self { map, config }
    }

    /// Create with default configuration
    pub fn with_defaults(map: &'a OccupancyMap) -> Self {
        Self::new(map, PlannerConfig::default())
    }

    /// Find a path between two points in raster coordinates.
    ///
    /// Both endpoints are normalized to pixel centers before anything else,
    /// so the returned waypoints always carry the `+0.5` center offset.
    /// Walkable endpoints with direct line of sight short-circuit to a
    /// 2-point path without searching.
    pub fn find_path(&self, start: Point, goal: Point) -> PathResult {
        trace!(
            "[Planner] find_path: start=({:.2},{:.2}) goal=({:.2},{:.2})",
            start.x,
            start.y,
            goal.x,
            goal.y
        );

        if !self.map.is_ready() {
            debug!("[Planner] FAILED: MapNotReady - occupancy map not loaded");
            return PathResult::failed(PathFailure::MapNotReady, 0);
        }

        let checker = WalkabilityChecker::new(self.map);
        let start_cell = start.cell();
        let goal_cell = goal.cell();

        if !checker.is_cell_walkable(start_cell) {
            debug!(
                "[Planner] FAILED: StartBlocked at ({},{})",
                start_cell.x, start_cell.y
            );
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if !checker.is_cell_walkable(goal_cell) {
            debug!(
                "[Planner] FAILED: GoalBlocked at ({},{})",
                goal_cell.x, goal_cell.y
            );
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        let start_center = start_cell.center();
        let goal_center = goal_cell.center();

        // Fast path: most calls in open areas resolve here.
        if checker.line_of_sight(start_cell, goal_cell) {
            trace!("[Planner] direct line of sight, skipping search");
            return PathResult {
                waypoints: vec![start_center, goal_center],
                raw_cells: Vec::new(),
                cost: start_center.distance(&goal_center),
                nodes_expanded: 0,
                success: true,
                failure_reason: None,
            };
        }

        self.search(&checker, start_cell, goal_cell)
    }

    /// A* search, reached only when the line-of-sight fast path fails.
    fn search(
        &self,
        checker: &WalkabilityChecker<'_>,
        start: GridCoord,
        goal: GridCoord,
    ) -> PathResult {
        let start_idx = self.index(start);
        let goal_idx = self.index(goal);

        let mut frontier = Frontier::new();
        let mut closed: HashSet<u32> = HashSet::new();
        let mut came_from: HashMap<u32, u32> = HashMap::new();
        let mut g_scores: HashMap<u32, f32> = HashMap::new();

        g_scores.insert(start_idx, 0.0);
        frontier.enqueue(start_idx, 0.0, start.euclidean_distance(&goal));

        let mut nodes_expanded = 0;

        while let Some((current_idx, current_g)) = frontier.dequeue() {
            // Goal reached: the first pop of the goal carries its best g.
            if current_idx == goal_idx {
                return self.reconstruct(&came_from, start_idx, goal_idx, current_g, nodes_expanded);
            }

            // Stale duplicate left behind by a priority improvement.
            if closed.contains(&current_idx) {
                continue;
            }
            closed.insert(current_idx);
            nodes_expanded += 1;

            let current = self.map.index_to_coord(current_idx as usize);

            for neighbor in checker.walkable_neighbors(current) {
                let neighbor_idx = self.index(neighbor);
                if closed.contains(&neighbor_idx) {
                    continue;
                }

                // Diagonal iff both coordinate deltas are nonzero.
                let delta = neighbor - current;
                let step_cost = if delta.x != 0 && delta.y != 0 {
                    self.config.diagonal_cost
                } else {
                    1.0
                };

                let tentative_g = current_g + step_cost;
                let known_g = g_scores.get(&neighbor_idx).copied().unwrap_or(f32::INFINITY);
                if tentative_g < known_g {
                    came_from.insert(neighbor_idx, current_idx);
                    g_scores.insert(neighbor_idx, tentative_g);
                    let f = tentative_g + neighbor.euclidean_distance(&goal);
                    // An already-queued cell just gets a second entry; the
                    // stale one is skipped via the closed set when popped.
                    frontier.enqueue(neighbor_idx, tentative_g, f);
                }
            }
        }

        // Expected outcome for disconnected regions, not an error.
        debug!(
            "[Planner] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Reconstruct the path by following parent links from the goal.
    fn reconstruct(
        &self,
        came_from: &HashMap<u32, u32>,
        start_idx: u32,
        goal_idx: u32,
        cost: f32,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut raw_cells = Vec::new();
        let mut current = goal_idx;

        raw_cells.push(self.map.index_to_coord(current as usize));
        while current != start_idx {
            match came_from.get(&current) {
                Some(&prev) => current = prev,
                None => break,
            }
            raw_cells.push(self.map.index_to_coord(current as usize));
        }
        raw_cells.reverse();

        // Re-center every waypoint; center() is the single normalization
        // boundary, so search keys and output coordinates cannot drift.
        let centered: Vec<Point> = raw_cells.iter().map(|c| c.center()).collect();

        let waypoints = if self.config.smooth {
            string_pull(&WalkabilityChecker::new(self.map), &centered)
        } else {
            centered
        };

        trace!(
            "[Planner] SUCCESS: {} raw cells, {} waypoints, cost={:.2}, nodes_expanded={}",
            raw_cells.len(),
            waypoints.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            waypoints,
            raw_cells,
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }

    /// Flat search key for an in-bounds cell
    #[inline]
    fn index(&self, coord: GridCoord) -> u32 {
        debug_assert!(self.map.in_bounds(coord));
        coord.y as u32 * self.map.width() as u32 + coord.x as u32
    }
}

/// Quick path finding with default configuration.
///
/// Returns the waypoint list, or `None` for every failure mode
/// (map not ready, blocked endpoint, no connecting path).
pub fn find_path(map: &OccupancyMap, start: Point, goal: Point) -> Option<Vec<Point>> {
    let planner = PathPlanner::with_defaults(map);
    let result = planner.find_path(start, goal);
    if result.success {
        Some(result.waypoints)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn open_map(width: usize, height: usize) -> OccupancyMap {
        OccupancyMap::from_walkable(width, height, vec![true; width * height]).unwrap()
    }

    fn map_with_blocked(width: usize, height: usize, blocked: &[(i32, i32)]) -> OccupancyMap {
        let mut walkable = vec![true; width * height];
        for &(x, y) in blocked {
            walkable[y as usize * width + x as usize] = false;
        }
        OccupancyMap::from_walkable(width, height, walkable).unwrap()
    }

    #[test]
    fn test_line_of_sight_shortcut() {
        let map = open_map(10, 10);
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.4, 0.4), Point::new(9.6, 9.6));

        assert!(result.success);
        assert_eq!(result.nodes_expanded, 0);
        assert_eq!(
            result.waypoints,
            vec![Point::new(0.5, 0.5), Point::new(9.5, 9.5)]
        );
    }

    #[test]
    fn test_map_not_ready() {
        let map = OccupancyMap::empty();
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.0, 0.0), Point::new(5.0, 5.0));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::MapNotReady));
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn test_start_blocked_rejected_without_search() {
        let map = map_with_blocked(10, 10, &[(0, 0)]);
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.2, 0.2), Point::new(9.0, 9.0));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::StartBlocked));
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn test_goal_blocked_rejected_without_search() {
        let map = map_with_blocked(10, 10, &[(9, 9)]);
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.0, 0.0), Point::new(9.9, 9.9));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::GoalBlocked));
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn test_out_of_bounds_goal_is_blocked() {
        let map = open_map(10, 10);
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.0, 0.0), Point::new(12.0, 3.0));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::GoalBlocked));
    }

    #[test]
    fn test_path_around_wall() {
        // Vertical wall at x=5 spanning y=0..=7, search must go around.
        let blocked: Vec<(i32, i32)> = (0..8).map(|y| (5, y)).collect();
        let map = map_with_blocked(10, 10, &blocked);
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.0, 0.0), Point::new(9.0, 0.0));

        assert!(result.success);
        assert!(result.nodes_expanded > 0);
        assert_eq!(result.waypoints[0], Point::new(0.5, 0.5));
        assert_eq!(*result.waypoints.last().unwrap(), Point::new(9.5, 0.5));
        // Every cell of the raw path at x=5 must be above the wall.
        for cell in &result.raw_cells {
            if cell.x == 5 {
                assert!(cell.y >= 8);
            }
        }
    }

    #[test]
    fn test_no_path_when_disconnected() {
        // Full-height wall splits the map in two.
        let blocked: Vec<(i32, i32)> = (0..10).map(|y| (5, y)).collect();
        let map = map_with_blocked(10, 10, &blocked);
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.0, 0.0), Point::new(9.0, 0.0));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        // The frontier was actually exhausted.
        assert!(result.nodes_expanded > 0);
    }

    #[test]
    fn test_octile_cost_is_optimal() {
        // 3x3 grid with (1,0) and (1,1) blocked. Corner-cut prevention
        // forbids squeezing past (1,1), so the only route is the long way
        // around the top: 6 orthogonal steps.
        let map = map_with_blocked(3, 3, &[(1, 0), (1, 1)]);
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.0, 0.0), Point::new(2.0, 0.0));

        assert!(result.success);
        assert_relative_eq!(result.cost, 6.0, epsilon = 1e-5);
    }

    #[test]
    fn test_corner_cut_never_taken() {
        // Wall at x=2 spanning y=0..=3; the path has to round its top
        // corner and may not clip diagonally past (2, 3).
        let blocked: Vec<(i32, i32)> = (0..4).map(|y| (2, y)).collect();
        let map = map_with_blocked(5, 5, &blocked);
        let planner = PathPlanner::with_defaults(&map);

        let result = planner.find_path(Point::new(0.0, 0.0), Point::new(4.0, 0.0));

        assert!(result.success);
        for pair in result.raw_cells.windows(2) {
            let delta = pair[1] - pair[0];
            if delta.x != 0 && delta.y != 0 {
                assert!(map.is_walkable(pair[0].offset(delta.x, 0)));
                assert!(map.is_walkable(pair[0].offset(0, delta.y)));
            }
        }
    }

    #[test]
    fn test_deterministic_output() {
        let blocked: Vec<(i32, i32)> = (2..18).map(|y| (9, y)).collect();
        let map = map_with_blocked(20, 20, &blocked);
        let planner = PathPlanner::with_defaults(&map);

        let a = planner.find_path(Point::new(1.0, 10.0), Point::new(18.0, 10.0));
        let b = planner.find_path(Point::new(1.0, 10.0), Point::new(18.0, 10.0));

        assert!(a.success && b.success);
        assert_eq!(a.waypoints, b.waypoints);
        assert_eq!(a.nodes_expanded, b.nodes_expanded);
    }

    #[test]
    fn test_unsmoothed_path_is_cell_chain() {
        let blocked: Vec<(i32, i32)> = (0..8).map(|y| (5, y)).collect();
        let map = map_with_blocked(10, 10, &blocked);
        let config = PlannerConfig {
            smooth: false,
            ..Default::default()
        };
        let planner = PathPlanner::new(&map, config);

        let result = planner.find_path(Point::new(0.0, 0.0), Point::new(9.0, 0.0));

        assert!(result.success);
        assert_eq!(result.waypoints.len(), result.raw_cells.len());
        // Consecutive raw cells are one-ring neighbors.
        for pair in result.raw_cells.windows(2) {
            assert_eq!(pair[0].chebyshev_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn test_find_path_convenience() {
        let map = open_map(10, 10);

        let path = find_path(&map, Point::new(0.0, 0.0), Point::new(9.0, 9.0));
        assert_eq!(
            path,
            Some(vec![Point::new(0.5, 0.5), Point::new(9.5, 9.5)])
        );

        let blocked = map_with_blocked(10, 10, &[(9, 9)]);
        assert_eq!(
            find_path(&blocked, Point::new(0.0, 0.0), Point::new(9.0, 9.0)),
            None
        );
    }
}
