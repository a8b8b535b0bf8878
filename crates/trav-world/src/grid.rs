//! Per-room traversal-cost grids.

use trav_core::ROOM_SIZE;

const AREA: usize = ROOM_SIZE as usize * ROOM_SIZE as usize;

/// A `ROOM_SIZE × ROOM_SIZE` grid of traversal costs.
///
/// Cell semantics match the tile-search contract:
///
/// | Value            | Meaning                              |
/// |------------------|--------------------------------------|
/// | 0                | use the terrain's default cost       |
/// | 1..=254          | explicit cost, overrides terrain     |
/// | [`IMPASSABLE`]   | cell cannot be entered               |
///
/// [`IMPASSABLE`]: CostGrid::IMPASSABLE
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CostGrid {
    cells: Box<[u8; AREA]>,
}

impl CostGrid {
    /// The reserved sentinel meaning "cannot be entered".
    pub const IMPASSABLE: u8 = u8::MAX;

    /// An all-zero grid (every cell defers to terrain).
    pub fn new() -> Self {
        Self { cells: Box::new([0; AREA]) }
    }

    #[inline]
    fn idx(x: u8, y: u8) -> usize {
        debug_assert!(x < ROOM_SIZE && y < ROOM_SIZE);
        x as usize * ROOM_SIZE as usize + y as usize
    }

    #[inline]
    pub fn get(&self, x: u8, y: u8) -> u8 {
        self.cells[Self::idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u8, y: u8, cost: u8) {
        self.cells[Self::idx(x, y)] = cost;
    }

    /// Mark a cell impassable.
    #[inline]
    pub fn block(&mut self, x: u8, y: u8) {
        self.set(x, y, Self::IMPASSABLE);
    }
}

impl Default for CostGrid {
    fn default() -> Self {
        Self::new()
    }
}
