//! Standard backrooms tile
//!
//! Fills one 16x16 region: carpet floor, ceiling, cleared interior,
//! coin-flipped wall strips on a 6-cell sub-room grid, and a 4-cell
//! lattice of ceiling lights.
//!
//! Draw order per sub-tile (row-major over the coarse grid): one bool
//! for wall orientation, one f64 for the decoration gate, then the
//! decoration step's own draws when the gate passes. Changing this
//! order breaks seeded reproducibility.

use crate::core::random::RandomSource;
use crate::core::types::{IVec3, Result};
use crate::world::{AssetPlacer, CellType, GridWorld};

use super::{assets, decoration, LayoutParams, REGION_SPAN};

pub fn generate<W: GridWorld + AssetPlacer>(
    world: &mut W,
    rng: &mut dyn RandomSource,
    start_x: i32,
    start_z: i32,
    base: i32,
    params: &LayoutParams,
) -> Result<()> {
    let wall_h = params.wall_height;

    // Floor, ceiling, and a cleared interior for every column.
    for x in start_x..start_x + REGION_SPAN {
        for z in start_z..start_z + REGION_SPAN {
            world.place_asset(assets::CARPET, IVec3::new(x, base, z));
            world.place_asset(assets::CEILING, IVec3::new(x, base + wall_h, z));

            for y in base + 1..base + wall_h {
                world.set_cell(IVec3::new(x, y, z), CellType::Air)?;
            }
        }
    }

    // One wall strip per sub-room, axis chosen by coin flip, trim on
    // the lowest course.
    for x in (start_x..start_x + REGION_SPAN).step_by(params.room_size as usize) {
        for z in (start_z..start_z + REGION_SPAN).step_by(params.room_size as usize) {
            if rng.next_bool() {
                for i in 0..params.room_size {
                    for y in base + 1..base + wall_h {
                        let pos = IVec3::new(x + i, y, z);
                        if y == base + 1 {
                            world.place_asset(assets::WALL_TRIM, pos);
                        } else {
                            world.place_asset(assets::WALL, pos);
                        }
                    }
                }
            } else {
                for i in 0..params.room_size {
                    for y in base + 1..base + wall_h {
                        let pos = IVec3::new(x, y, z + i);
                        if y == base + 1 {
                            world.place_asset(assets::WALL_TRIM, pos);
                        } else {
                            world.place_asset(assets::WALL, pos);
                        }
                    }
                }
            }

            if rng.next_f64() < params.decoration_chance {
                decoration::decorate(world, rng, x, z, base, params)?;
            }
        }
    }

    // Light fixtures on a coarser lattice, independent of the wall pass.
    for x in (start_x..start_x + REGION_SPAN).step_by(4) {
        for z in (start_z..start_z + REGION_SPAN).step_by(4) {
            let pos = IVec3::new(x, base + wall_h, z);
            world.place_asset(assets::CEILING, pos);
            world.set_cell(pos, CellType::SeaLantern)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ChaChaRandom;
    use crate::world::MemoryGrid;

    const BASE: i32 = 232;

    fn generated_tile(seed: u64) -> MemoryGrid {
        let mut world = MemoryGrid::filled(CellType::Stone);
        let mut rng = ChaChaRandom::seeded(seed);
        let params = LayoutParams::default();
        generate(&mut world, &mut rng, 0, 0, BASE, &params).unwrap();
        world
    }

    #[test]
    fn test_floor_and_ceiling_cover_the_region() {
        let world = generated_tile(1);
        for x in 0..REGION_SPAN {
            for z in 0..REGION_SPAN {
                assert!(
                    world.asset_at(IVec3::new(x, BASE, z)).is_some(),
                    "missing floor at ({x}, {z})"
                );
            }
        }
        assert_eq!(world.assets_placed(assets::CARPET), 256);
    }

    #[test]
    fn test_interior_holds_no_stray_solids() {
        // Everything between floor and ceiling is either a placed wall
        // asset, a decoration, or cleared air; no fill stone survives.
        let world = generated_tile(2);
        for x in 0..REGION_SPAN {
            for z in 0..REGION_SPAN {
                for y in BASE + 1..BASE + 4 {
                    let pos = IVec3::new(x, y, z);
                    if world.asset_at(pos).is_some() {
                        continue;
                    }
                    let cell = world.cell(pos);
                    assert!(
                        matches!(
                            cell,
                            CellType::Air
                                | CellType::FlowerPot
                                | CellType::RedMushroom
                                | CellType::BrownMushroom
                                | CellType::RedstoneWire
                        ),
                        "stray {cell:?} at {pos:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_trim_only_on_lowest_course() {
        let world = generated_tile(3);
        for op in world.log() {
            if let crate::world::WriteOp::Asset(key, pos) = op {
                match key.as_str() {
                    assets::WALL_TRIM => assert_eq!(pos.y, BASE + 1),
                    assets::WALL => assert!(pos.y > BASE + 1 && pos.y < BASE + 4),
                    _ => {}
                }
            }
        }
        // 9 sub-rooms, each with a 6-long trim course.
        assert_eq!(world.assets_placed(assets::WALL_TRIM), 9 * 6);
    }

    #[test]
    fn test_light_lattice() {
        let world = generated_tile(4);
        for x in (0..REGION_SPAN).step_by(4) {
            for z in (0..REGION_SPAN).step_by(4) {
                assert_eq!(world.cell(IVec3::new(x, BASE + 4, z)), CellType::SeaLantern);
            }
        }
        // Lattice positions end as lanterns, the rest of the ceiling as assets.
        assert_eq!(world.cell(IVec3::new(1, BASE + 4, 0)), CellType::Stone);
    }

    #[test]
    fn test_wall_strip_runs_along_one_axis_only() {
        let world = generated_tile(5);
        // Each sub-room corner anchors exactly one 6-long strip; count
        // total wall-course assets: 9 strips x 6 cells x 3 courses.
        let walls = world.assets_placed(assets::WALL) + world.assets_placed(assets::WALL_TRIM);
        assert_eq!(walls, 9 * 6 * 3);
    }
}
