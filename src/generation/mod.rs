//! Room layout generation
//!
//! Three mutually exclusive layout generators fill a region: the
//! standard maze tile, the rare office space the weighted dispatch
//! routes to, and the poolrooms variant selected per session. Every
//! random decision flows through [`RandomSource`] in a fixed draw
//! order, so a seeded source reproduces a world exactly.

pub mod config;
pub mod decoration;
pub mod office;
pub mod poolrooms;
pub mod rooms;

pub use config::LayoutParams;

use serde::{Deserialize, Serialize};

use crate::core::random::RandomSource;
use crate::core::types::Result;
use crate::world::{AssetPlacer, GridWorld};

/// Horizontal span of one generation region, in cells.
pub const REGION_SPAN: i32 = 16;

/// Custom asset keys consumed by the placement service.
pub mod assets {
    pub const CARPET: &str = "level_0_carpet";
    pub const CEILING: &str = "level_0_ceiling";
    pub const WALL: &str = "level_0_wall";
    pub const WALL_TRIM: &str = "level_0_wall_trim";
}

/// Which family of layouts a session generates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Standard tiles, with the rare office dispatch.
    #[default]
    Backrooms,
    /// Flooded 32x32 halls at a vertical offset from the base level.
    Poolrooms,
}

/// Outcome of the weighted dispatch for one backrooms region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LayoutChoice {
    Standard,
    Office,
}

fn choose_layout(rng: &mut dyn RandomSource, params: &LayoutParams) -> LayoutChoice {
    if rng.next_f64() < params.office_chance {
        LayoutChoice::Office
    } else {
        LayoutChoice::Standard
    }
}

/// Generate the layout for the region whose lowest corner is
/// `(start_x, start_z)`, writing cells and assets through `world`.
///
/// For [`LayoutKind::Backrooms`] one draw routes the whole region to
/// either the standard tile or the office space; the two never mix
/// within a region. The office (and poolrooms) footprint intentionally
/// extends past the 16-cell region span; see DESIGN.md.
pub fn generate_region<W: GridWorld + AssetPlacer>(
    world: &mut W,
    rng: &mut dyn RandomSource,
    kind: LayoutKind,
    start_x: i32,
    start_z: i32,
    base_level: i32,
    params: &LayoutParams,
) -> Result<()> {
    match kind {
        LayoutKind::Backrooms => match choose_layout(rng, params) {
            LayoutChoice::Standard => {
                rooms::generate(world, rng, start_x, start_z, base_level, params)
            }
            LayoutChoice::Office => office::generate(world, start_x, start_z, base_level, params),
        },
        LayoutKind::Poolrooms => {
            poolrooms::generate(world, rng, start_x, start_z, base_level, params)
        }
    }
}
