//! Grid-world collaborator interfaces
//!
//! The generation core never talks to a host engine directly; it writes
//! through these traits. [`MemoryGrid`] is the in-tree implementation
//! used by the tests and the simulation binary.

pub mod cell;
pub mod memory;
pub mod observer;

pub use cell::{CellData, CellType, Facing, SlabHalf};
pub use memory::{MemoryGrid, WriteOp};
pub use observer::{MovementMode, Observer, SimulatedObserver};

use crate::core::types::{IVec3, Result};

/// Read/write access to the host voxel grid.
pub trait GridWorld {
    /// Cell type at a position. Unwritten space reports the host's fill.
    fn cell(&self, pos: IVec3) -> CellType;

    /// Set a cell to a primitive type.
    fn set_cell(&mut self, pos: IVec3, cell: CellType) -> Result<()>;

    /// Set a cell with orientation/half state (directional furniture).
    fn set_cell_data(&mut self, pos: IVec3, data: CellData) -> Result<()>;
}

/// Placement service for named custom assets (carpet, ceiling, walls).
///
/// Fire-and-forget: the host owns failure handling, no result is consumed.
pub trait AssetPlacer {
    fn place_asset(&mut self, key: &str, pos: IVec3);
}
