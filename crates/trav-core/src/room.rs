//! Room naming and room-graph geometry.
//!
//! The world map is a sparse grid of fixed-size rooms.  A room is addressed
//! by its signed grid coordinate; adjacency (which borders actually have
//! exits) is the world's business, but pure coordinate arithmetic — linear
//! distance, highway/keeper classification — lives here so the planners can
//! reason about rooms they have never observed.

use std::fmt;

/// Side length of every room, in cells.  Coordinates run `0..ROOM_SIZE`.
pub const ROOM_SIZE: u8 = 50;

/// A room's coordinate on the world map.
///
/// Doubles as the room's name: two rooms are the same room iff their
/// coordinates are equal.  `i16` allows a world ~65k rooms across, far beyond
/// any practical map.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomName {
    pub x: i16,
    pub y: i16,
}

impl RoomName {
    #[inline]
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The room `dx`/`dy` steps away on the world map.
    #[inline]
    pub fn neighbor(self, dx: i16, dy: i16) -> RoomName {
        RoomName { x: self.x + dx, y: self.y + dy }
    }

    /// Room-graph linear distance: the Chebyshev distance between room
    /// coordinates (the minimum number of room transitions if every border
    /// had an exit).
    #[inline]
    pub fn linear_distance(self, other: RoomName) -> u32 {
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();
        dx.max(dy)
    }

    /// Highway rooms sit on the world grid lines: either coordinate is
    /// divisible by 10.  They are structure-free corridors and cheap to
    /// traverse.
    #[inline]
    pub fn is_highway(self) -> bool {
        self.x.rem_euclid(10) == 0 || self.y.rem_euclid(10) == 0
    }

    /// Keeper rooms form a 3×3 band at the center of each 10×10 sector
    /// (both coordinates mod 10 in `4..=6`), excluding the exact center,
    /// and are patrolled by hostile NPCs.
    #[inline]
    pub fn is_keeper(self) -> bool {
        let fx = self.x.rem_euclid(10);
        let fy = self.y.rem_euclid(10);
        !(fx == 5 && fy == 5) && (4..=6).contains(&fx) && (4..=6).contains(&fy)
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{},{}", self.x, self.y)
    }
}
