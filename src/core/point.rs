//! Point and coordinate types for the occupancy grid.
//!
//! Two coordinate spaces exist side by side: integer cell coordinates
//! ([`GridCoord`]) used by the walkability queries, and continuous raster
//! coordinates ([`Point`]) used by callers and the planner. Conversion
//! happens in exactly one place: [`Point::cell`] floors to a cell, and
//! [`GridCoord::center`] produces the pixel-centered point. Two points that
//! went through [`Point::snap`] compare equal iff they denote the same cell,
//! so no epsilon comparison is ever needed.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel-centered point for this cell: `(x + 0.5, y + 0.5)`.
    ///
    /// This is the only place the fractional center offset is applied.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }

    /// Offset by a direction delta
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> GridCoord {
        GridCoord::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another cell, measured center to center
    #[inline]
    pub fn euclidean_distance(&self, other: &GridCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Chebyshev distance (max of x and y distance) - used for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Continuous raster coordinates (f32, same space as the occupancy raster)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate in raster space
    pub x: f32,
    /// Y coordinate in raster space
    pub y: f32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Cell containing this point (coordinates floored)
    #[inline]
    pub fn cell(&self) -> GridCoord {
        GridCoord::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Normalize to the center of the containing cell: `floor(v) + 0.5`
    #[inline]
    pub fn snap(&self) -> Point {
        self.cell().center()
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}
