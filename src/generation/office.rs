//! Office space layout
//!
//! The rare variant the weighted dispatch routes to. Covers a 32x32
//! footprint from the region origin, so it spills into the three
//! neighbouring regions; that overrun is long-standing behavior and is
//! kept (see DESIGN.md). Taller than a standard tile, with a partial
//! grid of partition walls and a fixed desk arrangement per 8-cell bay.

use crate::core::types::{IVec3, Result};
use crate::world::{AssetPlacer, CellData, CellType, Facing, GridWorld, SlabHalf};

use super::{assets, LayoutParams};

/// Length of each partition strip.
const PARTITION_LEN: i32 = 4;
/// Stride of the partition/furniture bays.
const BAY_STRIDE: usize = 8;

pub fn generate<W: GridWorld + AssetPlacer>(
    world: &mut W,
    start_x: i32,
    start_z: i32,
    base: i32,
    params: &LayoutParams,
) -> Result<()> {
    let span = params.office_span;
    let wall_h = params.office_wall_height;

    for x in start_x..start_x + span {
        for z in start_z..start_z + span {
            world.place_asset(assets::CARPET, IVec3::new(x, base, z));
            world.place_asset(assets::CEILING, IVec3::new(x, base + wall_h, z));

            for y in base + 1..base + wall_h {
                world.set_cell(IVec3::new(x, y, z), CellType::Air)?;
            }
        }
    }

    // Every bay corner gets both partition orientations; unlike the
    // standard tile there is no coin flip and no trim course.
    for x in (start_x..start_x + span).step_by(BAY_STRIDE) {
        for z in (start_z..start_z + span).step_by(BAY_STRIDE) {
            for i in 0..PARTITION_LEN {
                for y in base + 1..base + wall_h {
                    world.place_asset(assets::WALL, IVec3::new(x + i, y, z));
                }
            }

            for i in 0..PARTITION_LEN {
                for y in base + 1..base + wall_h {
                    world.place_asset(assets::WALL, IVec3::new(x, y, z + i));
                }
            }
        }
    }

    // Desk arrangement, offset (+2, +2) into each bay: two top-half
    // shelf slabs beside a north-facing drawer, stairs as the chair.
    for x in (start_x + 2..start_x + span).step_by(BAY_STRIDE) {
        for z in (start_z + 2..start_z + span).step_by(BAY_STRIDE) {
            let shelf = CellData::half(CellType::OakSlab, SlabHalf::Top);
            let drawer = CellData::facing(CellType::Beehive, Facing::North);

            world.set_cell_data(IVec3::new(x, base + 1, z + 1), shelf)?;
            world.set_cell_data(IVec3::new(x + 1, base + 1, z + 1), drawer)?;
            world.set_cell_data(IVec3::new(x - 1, base + 1, z + 1), shelf)?;

            world.set_cell(IVec3::new(x, base + 1, z - 1), CellType::CherryStairs)?;
        }
    }

    for x in (start_x..start_x + span).step_by(4) {
        for z in (start_z..start_z + span).step_by(4) {
            let pos = IVec3::new(x, base + wall_h, z);
            world.place_asset(assets::CEILING, pos);
            world.set_cell(pos, CellType::SeaLantern)?;
        }
    }

    Ok(())
}
