//! Occupancy map storage.
//!
//! The occupancy map is a fixed-size grid of per-cell walkability flags,
//! derived once at load time from a decoded raster and immutable afterwards.
//! Decoding the raster itself (PNG, atlas, whatever the host uses) is out of
//! scope; the map only consumes the [`OpacitySource`] seam.

pub mod occupancy;

pub use occupancy::{MapError, OccupancyMap, OpacitySource, RgbaBuffer};
