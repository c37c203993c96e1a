//! Cell type registry and classification

/// Primitive cell types the generators and the safety search touch.
///
/// Custom assets (carpet, ceiling, wall) are placed by key through
/// [`super::AssetPlacer`] and are not listed here; the host grid reports
/// them as solid cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellType {
    #[default]
    Air,
    Water,
    Lava,
    Stone,
    /// Emissive ceiling light fixture.
    SeaLantern,
    OakSlab,
    /// Directional storage block used as an office drawer.
    Beehive,
    CherryStairs,
    FlowerPot,
    RedMushroom,
    BrownMushroom,
    RedstoneWire,
}

impl CellType {
    /// True exactly for the pass-through cells an observer can occupy
    /// without suffocating: air, water, and lava.
    ///
    /// Lava counting as breathable is deliberate; the suffocation check
    /// only reacts to genuinely solid cells. See DESIGN.md.
    pub fn is_breathable(self) -> bool {
        matches!(self, CellType::Air | CellType::Water | CellType::Lava)
    }

    /// True for cells an observer can stand on.
    ///
    /// Thin decorations (pots, mushrooms, wire) are neither breathable
    /// nor solid.
    pub fn is_solid(self) -> bool {
        matches!(
            self,
            CellType::Stone
                | CellType::SeaLantern
                | CellType::OakSlab
                | CellType::Beehive
                | CellType::CherryStairs
        )
    }
}

/// Horizontal facing for directional cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

/// Vertical half for slab cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlabHalf {
    Top,
    Bottom,
}

/// A cell type plus the orientation state a plain type cannot carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellData {
    pub cell: CellType,
    pub facing: Option<Facing>,
    pub half: Option<SlabHalf>,
}

impl CellData {
    /// Data for a cell with no orientation state.
    pub fn plain(cell: CellType) -> Self {
        Self { cell, facing: None, half: None }
    }

    /// Data for a directional cell.
    pub fn facing(cell: CellType, facing: Facing) -> Self {
        Self { cell, facing: Some(facing), half: None }
    }

    /// Data for a slab occupying one vertical half.
    pub fn half(cell: CellType, half: SlabHalf) -> Self {
        Self { cell, facing: None, half: Some(half) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breathable_is_exactly_air_water_lava() {
        assert!(CellType::Air.is_breathable());
        assert!(CellType::Water.is_breathable());
        assert!(CellType::Lava.is_breathable());

        for cell in [
            CellType::Stone,
            CellType::SeaLantern,
            CellType::OakSlab,
            CellType::Beehive,
            CellType::CherryStairs,
            CellType::FlowerPot,
            CellType::RedMushroom,
            CellType::BrownMushroom,
            CellType::RedstoneWire,
        ] {
            assert!(!cell.is_breathable(), "{cell:?} must not be breathable");
        }
    }

    #[test]
    fn test_decorations_neither_breathable_nor_solid() {
        for cell in [
            CellType::FlowerPot,
            CellType::RedMushroom,
            CellType::BrownMushroom,
            CellType::RedstoneWire,
        ] {
            assert!(!cell.is_breathable());
            assert!(!cell.is_solid());
        }
    }

    #[test]
    fn test_structural_cells_are_solid() {
        assert!(CellType::Stone.is_solid());
        assert!(CellType::SeaLantern.is_solid());
        assert!(CellType::Beehive.is_solid());
        assert!(!CellType::Air.is_solid());
        assert!(!CellType::Lava.is_solid());
    }

    #[test]
    fn test_cell_data_constructors() {
        let slab = CellData::half(CellType::OakSlab, SlabHalf::Top);
        assert_eq!(slab.cell, CellType::OakSlab);
        assert_eq!(slab.half, Some(SlabHalf::Top));
        assert_eq!(slab.facing, None);

        let drawer = CellData::facing(CellType::Beehive, Facing::North);
        assert_eq!(drawer.facing, Some(Facing::North));
        assert_eq!(drawer.half, None);

        let stairs = CellData::plain(CellType::CherryStairs);
        assert_eq!(stairs.facing, None);
        assert_eq!(stairs.half, None);
    }
}
