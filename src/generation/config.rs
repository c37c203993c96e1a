//! Layout generation parameters

use serde::{Deserialize, Serialize};

/// Parameters shared by the layout generators.
///
/// The defaults are the canonical backrooms numbers; tests override
/// individual fields (e.g. forcing `office_chance` to 0 or 1).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Interior height of a standard tile (floor to ceiling).
    pub wall_height: i32,
    /// Side length of the sub-rooms partitioning a standard tile.
    pub room_size: i32,
    /// Probability that a region becomes an office space instead.
    pub office_chance: f64,
    /// Side length of the office footprint (overruns the region).
    pub office_span: i32,
    /// Interior height of an office space.
    pub office_wall_height: i32,
    /// Side length of the poolrooms footprint.
    pub pool_span: i32,
    /// Interior height of the poolrooms.
    pub pool_wall_height: i32,
    /// Vertical distance between the base level and the poolrooms floor.
    pub pool_offset: i32,
    /// Probability of flooding each poolrooms floor cell.
    pub pool_water_chance: f64,
    /// Decoration gate probability, applied twice (caller and step).
    pub decoration_chance: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            wall_height: 4,
            room_size: 6,
            office_chance: 0.025,
            office_span: 32,
            office_wall_height: 10,
            pool_span: 32,
            pool_wall_height: 10,
            pool_offset: 64,
            pool_water_chance: 0.5,
            decoration_chance: 0.1,
        }
    }
}
