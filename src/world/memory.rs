//! In-memory grid world
//!
//! Hash-map backed implementation of the collaborator traits. Records
//! every write in order so tests can assert on exact generation output.

use std::collections::HashMap;

use crate::core::types::{IVec3, Result};

use super::cell::{CellData, CellType};
use super::{AssetPlacer, GridWorld};

/// One recorded mutation of the grid.
#[derive(Clone, Debug, PartialEq)]
pub enum WriteOp {
    Cell(IVec3, CellType),
    Data(IVec3, CellData),
    Asset(String, IVec3),
}

/// What currently occupies a written cell.
#[derive(Clone, Debug)]
enum Slot {
    Cell(CellType),
    Data(CellData),
    Asset(String),
}

/// Hash-map grid with a configurable fill type for unwritten space.
///
/// Custom assets read back as solid cells, matching how a host engine
/// reports them; the key is still queryable via [`MemoryGrid::asset_at`].
pub struct MemoryGrid {
    fill: CellType,
    slots: HashMap<IVec3, Slot>,
    log: Vec<WriteOp>,
}

impl MemoryGrid {
    /// An empty (all-air) grid.
    pub fn new() -> Self {
        Self::filled(CellType::Air)
    }

    /// A grid whose unwritten space is `fill`.
    pub fn filled(fill: CellType) -> Self {
        Self { fill, slots: HashMap::new(), log: Vec::new() }
    }

    /// Asset key at a position, if the latest write there was an asset.
    pub fn asset_at(&self, pos: IVec3) -> Option<&str> {
        match self.slots.get(&pos) {
            Some(Slot::Asset(key)) => Some(key),
            _ => None,
        }
    }

    /// Rich cell data at a position, if the latest write there carried any.
    pub fn data_at(&self, pos: IVec3) -> Option<CellData> {
        match self.slots.get(&pos) {
            Some(Slot::Data(data)) => Some(*data),
            _ => None,
        }
    }

    /// Every mutation applied to this grid, in order.
    pub fn log(&self) -> &[WriteOp] {
        &self.log
    }

    /// Total number of writes so far.
    pub fn write_count(&self) -> usize {
        self.log.len()
    }

    /// Number of asset placements with the given key.
    pub fn assets_placed(&self, key: &str) -> usize {
        self.log
            .iter()
            .filter(|op| matches!(op, WriteOp::Asset(k, _) if k == key))
            .count()
    }
}

impl Default for MemoryGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GridWorld for MemoryGrid {
    fn cell(&self, pos: IVec3) -> CellType {
        match self.slots.get(&pos) {
            Some(Slot::Cell(cell)) => *cell,
            Some(Slot::Data(data)) => data.cell,
            // Stand-in: the host reports custom assets as solid cells.
            Some(Slot::Asset(_)) => CellType::Stone,
            None => self.fill,
        }
    }

    fn set_cell(&mut self, pos: IVec3, cell: CellType) -> Result<()> {
        self.slots.insert(pos, Slot::Cell(cell));
        self.log.push(WriteOp::Cell(pos, cell));
        Ok(())
    }

    fn set_cell_data(&mut self, pos: IVec3, data: CellData) -> Result<()> {
        self.slots.insert(pos, Slot::Data(data));
        self.log.push(WriteOp::Data(pos, data));
        Ok(())
    }
}

impl AssetPlacer for MemoryGrid {
    fn place_asset(&mut self, key: &str, pos: IVec3) {
        self.slots.insert(pos, Slot::Asset(key.to_string()));
        self.log.push(WriteOp::Asset(key.to_string(), pos));
    }
}
