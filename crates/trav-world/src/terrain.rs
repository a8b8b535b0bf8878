//! Per-room terrain.

use trav_core::ROOM_SIZE;

const AREA: usize = ROOM_SIZE as usize * ROOM_SIZE as usize;

/// Intrinsic traversal class of a cell, before structures are considered.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    /// Normal ground.
    #[default]
    Plain,
    /// Difficult ground — higher traversal cost.
    Swamp,
    /// Natural wall — impassable unless a cost grid overrides it.
    Wall,
}

/// The terrain of one room: a boxed `ROOM_SIZE × ROOM_SIZE` grid.
///
/// Terrain is static world data; it never changes within a tick generation
/// and (unlike cost grids) may be held across generations.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RoomTerrain {
    cells: Box<[TerrainKind; AREA]>,
}

impl RoomTerrain {
    /// All-plain terrain.
    pub fn open() -> Self {
        Self { cells: Box::new([TerrainKind::Plain; AREA]) }
    }

    #[inline]
    fn idx(x: u8, y: u8) -> usize {
        debug_assert!(x < ROOM_SIZE && y < ROOM_SIZE);
        x as usize * ROOM_SIZE as usize + y as usize
    }

    #[inline]
    pub fn get(&self, x: u8, y: u8) -> TerrainKind {
        self.cells[Self::idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u8, y: u8, kind: TerrainKind) {
        self.cells[Self::idx(x, y)] = kind;
    }

    /// Stamp a full row with `kind` — convenient for building wall lines.
    pub fn fill_row(&mut self, y: u8, kind: TerrainKind) {
        for x in 0..ROOM_SIZE {
            self.set(x, y, kind);
        }
    }

    /// Stamp a full column with `kind`.
    pub fn fill_col(&mut self, x: u8, kind: TerrainKind) {
        for y in 0..ROOM_SIZE {
            self.set(x, y, kind);
        }
    }
}

impl Default for RoomTerrain {
    fn default() -> Self {
        Self::open()
    }
}
