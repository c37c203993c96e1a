//! Decoration step
//!
//! Re-rolls its own gate even though the caller already gated at the
//! same probability; the compounding (~1% of visited sub-rooms) is the
//! intended density. Draw order: gate, count, then per decoration the
//! two offsets, and only for an empty target the category (and the
//! mushroom color for that category).

use crate::core::random::RandomSource;
use crate::core::types::{IVec3, Result};
use crate::world::{CellType, GridWorld};

use super::LayoutParams;

/// Scatter 1-3 decorations over a sub-room footprint. Returns the
/// number of cells actually written.
pub fn decorate<W: GridWorld>(
    world: &mut W,
    rng: &mut dyn RandomSource,
    room_x: i32,
    room_z: i32,
    base: i32,
    params: &LayoutParams,
) -> Result<usize> {
    if rng.next_f64() > params.decoration_chance {
        return Ok(0);
    }

    let count = rng.next_u32(3) + 1;
    let mut placed = 0;

    for _ in 0..count {
        let dx = rng.next_u32(params.room_size as u32) as i32;
        let dz = rng.next_u32(params.room_size as u32) as i32;
        let pos = IVec3::new(room_x + dx, base + 1, room_z + dz);

        if world.cell(pos) == CellType::Air {
            let cell = match rng.next_u32(3) {
                0 => CellType::FlowerPot,
                1 => {
                    if rng.next_bool() {
                        CellType::RedMushroom
                    } else {
                        CellType::BrownMushroom
                    }
                }
                _ => CellType::RedstoneWire,
            };
            world.set_cell(pos, cell)?;
            placed += 1;
        }
    }

    Ok(placed)
}
