//! In-room positions and cross-border geometry.

use crate::direction::Direction;
use crate::error::CoreError;
use crate::room::{ROOM_SIZE, RoomName};

/// A cell inside a named room.
///
/// Invariant: `x` and `y` are in `0..ROOM_SIZE`.  [`Position::new`] enforces
/// this; code that constructs positions arithmetically must uphold it.
///
/// Equality is whole-world equality (same room *and* same cell); use
/// [`Position::same_room`] when only the room matters.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub room: RoomName,
    pub x:    u8,
    pub y:    u8,
}

impl Position {
    /// Construct a position, rejecting out-of-bounds coordinates.
    pub fn new(room: RoomName, x: u8, y: u8) -> Result<Position, CoreError> {
        if x >= ROOM_SIZE || y >= ROOM_SIZE {
            return Err(CoreError::OutOfBounds { x, y });
        }
        Ok(Position { room, x, y })
    }

    /// The center cell of `room` — the standard stand-in target for a room
    /// whose interior is unknown.
    #[inline]
    pub fn room_center(room: RoomName) -> Position {
        Position { room, x: ROOM_SIZE / 2, y: ROOM_SIZE / 2 }
    }

    /// `true` if both positions are in the same room (cells may differ).
    #[inline]
    pub fn same_room(self, other: Position) -> bool {
        self.room == other.room
    }

    /// Chebyshev range to `other` within one room; `None` across rooms.
    #[inline]
    pub fn range_to(self, other: Position) -> Option<u32> {
        if self.room != other.room {
            return None;
        }
        let dx = (self.x as i32 - other.x as i32).unsigned_abs();
        let dy = (self.y as i32 - other.y as i32).unsigned_abs();
        Some(dx.max(dy))
    }

    /// World-global cell coordinate, unique across all rooms.
    #[inline]
    pub fn global(self) -> (i32, i32) {
        (
            self.room.x as i32 * ROOM_SIZE as i32 + self.x as i32,
            self.room.y as i32 * ROOM_SIZE as i32 + self.y as i32,
        )
    }

    /// Reconstruct a position from a world-global cell coordinate.
    pub fn from_global(gx: i32, gy: i32) -> Position {
        let size = ROOM_SIZE as i32;
        Position {
            room: RoomName::new(gx.div_euclid(size) as i16, gy.div_euclid(size) as i16),
            x:    gx.rem_euclid(size) as u8,
            y:    gy.rem_euclid(size) as u8,
        }
    }

    /// The direction of the single-cell move from `self` to `other`, even
    /// across a room border.  `None` if `other` is not exactly one cell away.
    pub fn dir_to(self, other: Position) -> Option<Direction> {
        let (ax, ay) = self.global();
        let (bx, by) = other.global();
        let dx = bx - ax;
        let dy = by - ay;
        if dx.abs() > 1 || dy.abs() > 1 {
            return None;
        }
        Direction::from_offset(dx as i8, dy as i8)
    }

    /// One step in `dir`, staying inside this room.  `None` if the step would
    /// leave the room.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.offset();
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if !(0..ROOM_SIZE as i16).contains(&x) || !(0..ROOM_SIZE as i16).contains(&y) {
            return None;
        }
        Some(Position { room: self.room, x: x as u8, y: y as u8 })
    }

    /// One step in `dir`, crossing into the adjacent room at a border.
    ///
    /// Diagonal steps cannot change rooms (there is no corner-to-corner room
    /// adjacency); such steps return `None`.
    pub fn step_world(self, dir: Direction) -> Option<Position> {
        if let Some(p) = self.step(dir) {
            return Some(p);
        }
        let (dx, dy) = dir.offset();
        let (gx, gy) = self.global();
        let next = Position::from_global(gx + dx as i32, gy + dy as i32);
        // A room change on both axes means a diagonal corner hop — not a move.
        if next.room.x != self.room.x && next.room.y != self.room.y {
            return None;
        }
        Some(next)
    }

    /// `true` if this cell lies on the room's border.
    #[inline]
    pub fn is_edge(self) -> bool {
        self.x == 0 || self.x == ROOM_SIZE - 1 || self.y == 0 || self.y == ROOM_SIZE - 1
    }

    /// `true` when `a` and `b` sit on directly-opposing borders of adjacent
    /// rooms — the coordinate pair produced by stepping through an exit.
    /// Stuck detection treats this as "did not move": the agent flickered
    /// across the border and will be bounced back next step.
    pub fn opposing_exits(a: Position, b: Position) -> bool {
        if a.room == b.room {
            return false;
        }
        const MAX: u8 = ROOM_SIZE - 1;
        let hx = (a.x == 0 && b.x == MAX) || (a.x == MAX && b.x == 0);
        let hy = (a.y == 0 && b.y == MAX) || (a.y == MAX && b.y == 0);
        (hx && a.y == b.y) || (hy && a.x == b.x)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{},{}]", self.room, self.x, self.y)
    }
}
