//! Poolrooms layout
//!
//! Flooded halls generated one level below the backrooms (or above,
//! when the offset would sink past the world floor). Selected per
//! session, never by the weighted dispatch.

use crate::core::random::RandomSource;
use crate::core::types::{IVec3, Result};
use crate::world::{AssetPlacer, CellType, GridWorld};

use super::{assets, LayoutParams};

/// Floor level for a poolrooms region: `base - offset`, flipped above
/// when that would be negative.
pub fn pool_base(base: i32, params: &LayoutParams) -> i32 {
    let level = base - params.pool_offset;
    if level < 0 { base + params.pool_offset } else { level }
}

pub fn generate<W: GridWorld + AssetPlacer>(
    world: &mut W,
    rng: &mut dyn RandomSource,
    start_x: i32,
    start_z: i32,
    base: i32,
    params: &LayoutParams,
) -> Result<()> {
    let floor = pool_base(base, params);
    let span = params.pool_span;
    let wall_h = params.pool_wall_height;

    // Floor, ceiling, cleared interior, and a coin-weighted flood of
    // each floor cell. One water draw per column, always.
    for x in start_x..start_x + span {
        for z in start_z..start_z + span {
            world.place_asset(assets::CARPET, IVec3::new(x, floor, z));
            world.place_asset(assets::CEILING, IVec3::new(x, floor + wall_h, z));

            for y in floor + 1..floor + wall_h {
                world.set_cell(IVec3::new(x, y, z), CellType::Air)?;
            }

            if rng.next_f64() < params.pool_water_chance {
                world.set_cell(IVec3::new(x, floor + 1, z), CellType::Water)?;
            }
        }
    }

    // Wall strips per bay, axis by coin flip, no trim course.
    for x in (start_x..start_x + span).step_by(8) {
        for z in (start_z..start_z + span).step_by(8) {
            if rng.next_bool() {
                for i in 0..4 {
                    for y in floor + 1..floor + wall_h {
                        world.place_asset(assets::WALL, IVec3::new(x + i, y, z));
                    }
                }
            } else {
                for i in 0..4 {
                    for y in floor + 1..floor + wall_h {
                        world.place_asset(assets::WALL, IVec3::new(x, y, z + i));
                    }
                }
            }
        }
    }

    for x in (start_x..start_x + span).step_by(4) {
        for z in (start_z..start_z + span).step_by(4) {
            let pos = IVec3::new(x, floor + wall_h, z);
            world.place_asset(assets::CEILING, pos);
            world.set_cell(pos, CellType::SeaLantern)?;
        }
    }

    Ok(())
}
