//! Suffocation check and safe relocation
//!
//! Once per tick, a vulnerable observer's eye cell is tested for
//! breathability. A buried observer is moved to the nearest cell
//! satisfying the safe-standing predicate, found by an expanding
//! square-ring search around the column at the base level. Search
//! exhaustion is the expected partial failure: logged, no relocation,
//! never an error.

use crate::core::types::IVec3;
use crate::world::{GridWorld, MovementMode, Observer};

/// Largest ring (Chebyshev radius) the search examines.
pub const MAX_SEARCH_RADIUS: i32 = 16;

/// Audio cue played on relocation into the rooms.
pub const ENTER_CUE: &str = "liminal:music.level_0.enter";

const CUE_VOLUME: f32 = 1_000_000.0;
const CUE_PITCH: f32 = 1.0;

/// Result of one suffocation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyOutcome {
    /// Eye cell was breathable; nothing to do.
    Breathing,
    /// Observer moved to the returned cell.
    Relocated(IVec3),
    /// No safe cell within [`MAX_SEARCH_RADIUS`] rings; observer left
    /// in place.
    NoSafeCell,
}

/// Safe-standing predicate: feet and head breathable, ground solid.
pub fn is_safe_standing<W: GridWorld>(world: &W, pos: IVec3) -> bool {
    world.cell(pos).is_breathable()
        && world.cell(pos + IVec3::Y).is_breathable()
        && world.cell(pos - IVec3::Y).is_solid()
}

/// Find the nearest safe cell for an observer at `from`.
///
/// Starts from the observer's column at `base_level + 1`, then walks
/// rings of increasing Chebyshev radius, row-major within each ring.
/// The first satisfying cell ends the whole search; ties on a ring
/// resolve by visit order, not Euclidean distance.
pub fn find_safe_location<W: GridWorld>(world: &W, from: IVec3, base_level: i32) -> Option<IVec3> {
    let candidate = IVec3::new(from.x, base_level + 1, from.z);
    if is_safe_standing(world, candidate) {
        return Some(candidate);
    }

    for radius in 1..=MAX_SEARCH_RADIUS {
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                // True ring: interior cells were covered at smaller radii.
                if dx.abs() != radius && dz.abs() != radius {
                    continue;
                }
                let pos = candidate + IVec3::new(dx, 0, dz);
                if is_safe_standing(world, pos) {
                    return Some(pos);
                }
            }
        }
    }

    None
}

/// Check the observer's eye cell and relocate if buried.
///
/// On success the whole side-effect bundle runs: teleport, movement
/// mode forced to [`MovementMode::Adventure`], entry cue, inventory
/// cleared. When the search fails, none of it happens.
pub fn check_and_relocate<W: GridWorld, O: Observer>(
    world: &W,
    observer: &mut O,
    base_level: i32,
) -> SafetyOutcome {
    if world.cell(observer.eye_position()).is_breathable() {
        return SafetyOutcome::Breathing;
    }

    log::info!(
        "observer suffocating at {:?}, searching for a safe cell",
        observer.eye_position()
    );

    match find_safe_location(world, observer.position(), base_level) {
        Some(pos) => {
            observer.teleport(pos);
            observer.set_movement_mode(MovementMode::Adventure);
            observer.play_cue(ENTER_CUE, CUE_VOLUME, CUE_PITCH);
            observer.clear_inventory();
            log::info!("observer relocated to {pos:?}");
            SafetyOutcome::Relocated(pos)
        }
        None => {
            log::warn!(
                "no safe cell within {MAX_SEARCH_RADIUS} rings of {:?}, observer left in place",
                observer.position()
            );
            SafetyOutcome::NoSafeCell
        }
    }
}
