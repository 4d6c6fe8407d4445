//! Path smoothing via string pulling.
//!
//! A* returns a cell-by-cell staircase; the downstream movement
//! interpolator only wants the genuine turning points. String pulling walks
//! the path with a sliding anchor: keep the farthest waypoint still in
//! direct line of sight, drop everything in between, repeat.

use crate::core::Point;
use crate::query::WalkabilityChecker;

/// Collapse a waypoint chain into the minimal set of turning points.
///
/// The first and last waypoints are always preserved, and every consecutive
/// pair in the output has verified line of sight.
pub fn string_pull(checker: &WalkabilityChecker<'_>, path: &[Point]) -> Vec<Point> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut smoothed = vec![path[0]];
    let mut anchor = 0;

    while anchor < path.len() - 1 {
        // Farthest waypoint still visible from the anchor.
        let mut furthest = anchor + 1;
        for j in (anchor + 2)..path.len() {
            if checker.line_of_sight(path[anchor].cell(), path[j].cell()) {
                furthest = j;
            }
        }

        smoothed.push(path[furthest]);
        anchor = furthest;
    }

    smoothed
}

/// Total waypoint-to-waypoint path length
pub fn path_length(path: &[Point]) -> f32 {
    if path.len() < 2 {
        return 0.0;
    }
    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
