//! Walkability checker implementation.

use crate::core::GridCoord;
use crate::grid::OccupancyMap;

/// The 8 compass directions in fixed enumeration order:
/// N, NE, E, SE, S, SW, W, NW.
///
/// The order carries no meaning beyond influencing tie-break order in the
/// search frontier, which makes planner output deterministic.
pub const DIRECTIONS_8: [(i32, i32); 8] = [
    (0, 1),   // N
    (1, 1),   // NE
    (1, 0),   // E
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (-1, 1),  // NW
];

/// Walkability oracle for path planning and world-state validation.
///
/// Borrows the occupancy map; construct one wherever a query is needed.
/// None of the queries panic: out-of-bounds coordinates and the empty
/// placeholder map both report blocked.
pub struct WalkabilityChecker<'a> {
    map: &'a OccupancyMap,
}

impl<'a> WalkabilityChecker<'a> {
    /// Create a new walkability checker.
    pub fn new(map: &'a OccupancyMap) -> Self {
        Self { map }
    }

    /// Get the underlying map.
    pub fn map(&self) -> &OccupancyMap {
        self.map
    }

    /// Check walkability at continuous coordinates.
    ///
    /// Rounds to the nearest integer cell; false outside
    /// `[0, width) x [0, height)`.
    #[inline]
    pub fn is_walkable(&self, x: f32, y: f32) -> bool {
        self.map
            .is_walkable(GridCoord::new(x.round() as i32, y.round() as i32))
    }

    /// Check walkability of a single cell.
    #[inline]
    pub fn is_cell_walkable(&self, coord: GridCoord) -> bool {
        self.map.is_walkable(coord)
    }

    /// Check if the straight line between two cells crosses only walkable
    /// cells.
    ///
    /// Rasterizes the segment with Bresenham's algorithm and returns false
    /// the instant any traversed cell, endpoints included, is blocked.
    pub fn line_of_sight(&self, from: GridCoord, to: GridCoord) -> bool {
        let mut x0 = from.x;
        let mut y0 = from.y;
        let x1 = to.x;
        let y1 = to.y;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            if !self.map.is_walkable(GridCoord::new(x0, y0)) {
                return false;
            }

            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }

        true
    }

    /// Enumerate the walkable one-ring neighbors of a cell.
    ///
    /// Diagonal neighbors are included only if both orthogonal cells
    /// adjacent to the diagonal step are walkable too, so a path can never
    /// cut through a wall corner.
    pub fn walkable_neighbors(&self, coord: GridCoord) -> Vec<GridCoord> {
        let mut neighbors = Vec::with_capacity(8);

        for (dx, dy) in DIRECTIONS_8 {
            let neighbor = coord.offset(dx, dy);
            if !self.map.is_walkable(neighbor) {
                continue;
            }

            // Corner-cut prevention: a diagonal step requires both
            // orthogonal cells next to it to be open.
            if dx != 0
                && dy != 0
                && !(self.map.is_walkable(coord.offset(dx, 0))
                    && self.map.is_walkable(coord.offset(0, dy)))
            {
                continue;
            }

            neighbors.push(neighbor);
        }

        neighbors
    }
}
