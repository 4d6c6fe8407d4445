//! Occupancy map built from a rasterized source.
//!
//! A cell is walkable iff the source pixel's opacity channel is fully
//! transparent (alpha == 0). The map is built once and read-only thereafter,
//! so it can be shared freely across concurrent path requests.

use log::debug;
use thiserror::Error;

use crate::core::GridCoord;

/// Errors raised while constructing an occupancy map.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MapError {
    /// Pixel buffer length does not match the declared dimensions.
    #[error("raster buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize {
        /// Expected buffer length in bytes
        expected: usize,
        /// Actual buffer length in bytes
        actual: usize,
    },

    /// Raster has a zero dimension.
    #[error("raster has a zero dimension ({width}x{height})")]
    EmptyRaster {
        /// Raster width in pixels
        width: usize,
        /// Raster height in pixels
        height: usize,
    },
}

/// Random-access per-pixel opacity over a decoded raster.
///
/// This is the seam between the navigation core and whatever asset pipeline
/// produced the raster. Opacity 0 means fully transparent, which the map
/// interprets as walkable.
pub trait OpacitySource {
    /// Raster width in pixels
    fn width(&self) -> usize;
    /// Raster height in pixels
    fn height(&self) -> usize;
    /// Opacity of the pixel at (x, y); callers pass in-bounds coordinates
    fn opacity(&self, x: usize, y: usize) -> u8;
}

/// Raw RGBA8 pixel buffer viewed as an opacity source.
pub struct RgbaBuffer<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> RgbaBuffer<'a> {
    /// Wrap a raw RGBA8 buffer, validating its length.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, MapError> {
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(MapError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

impl OpacitySource for RgbaBuffer<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn opacity(&self, x: usize, y: usize) -> u8 {
        // Alpha is the fourth byte of each RGBA pixel.
        self.data[(y * self.width + x) * 4 + 3]
    }
}

#[cfg(feature = "image")]
impl OpacitySource for image::RgbaImage {
    #[inline]
    fn width(&self) -> usize {
        image::RgbaImage::width(self) as usize
    }

    #[inline]
    fn height(&self) -> usize {
        image::RgbaImage::height(self) as usize
    }

    #[inline]
    fn opacity(&self, x: usize, y: usize) -> u8 {
        self.get_pixel(x as u32, y as u32).0[3]
    }
}

/// Fixed-size 2D grid of boolean walkability flags.
///
/// Flags are stored row-major in a flat array; cell `(x, y)` lives at index
/// `y * width + x`. Immutable after construction.
#[derive(Clone, Debug, Default)]
pub struct OccupancyMap {
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
    /// Per-cell walkable flag, row-major
    walkable: Vec<bool>,
}

impl OccupancyMap {
    /// Build from any decoded raster. Walkable iff opacity == 0.
    pub fn from_source<S: OpacitySource>(source: &S) -> Result<Self, MapError> {
        let width = source.width();
        let height = source.height();
        if width == 0 || height == 0 {
            return Err(MapError::EmptyRaster { width, height });
        }

        let mut walkable = vec![false; width * height];
        for y in 0..height {
            for x in 0..width {
                walkable[y * width + x] = source.opacity(x, y) == 0;
            }
        }

        let open = walkable.iter().filter(|&&w| w).count();
        debug!(
            "[OccupancyMap] built {}x{} map, {} of {} cells walkable",
            width,
            height,
            open,
            width * height
        );

        Ok(Self {
            width,
            height,
            walkable,
        })
    }

    /// Build from a raw RGBA8 buffer (row-major, 4 bytes per pixel).
    pub fn from_rgba(width: usize, height: usize, data: &[u8]) -> Result<Self, MapError> {
        let buffer = RgbaBuffer::new(width, height, data)?;
        Self::from_source(&buffer)
    }

    /// Build directly from per-cell walkable flags.
    ///
    /// Intended for tests and procedurally generated maps.
    pub fn from_walkable(width: usize, height: usize, walkable: Vec<bool>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyRaster { width, height });
        }
        let expected = width * height;
        if walkable.len() != expected {
            return Err(MapError::BufferSize {
                expected,
                actual: walkable.len(),
            });
        }
        Ok(Self {
            width,
            height,
            walkable,
        })
    }

    /// Placeholder for a map that has not finished loading.
    ///
    /// Every query on the placeholder reports blocked; the planner refuses
    /// to search it. "Not proven safe" degrades to "blocked".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the map holds actual raster data.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Walkability flag for a cell. Out-of-bounds cells report blocked.
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        match self.coord_to_index(coord) {
            Some(i) => self.walkable[i],
            None => false,
        }
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }
}
