//! The path codec: compact encodings for paths, cells, and destinations.
//!
//! Three encodings live here, all exact round-trips:
//!
//! | Encoding        | Shape                              | Used for            |
//! |-----------------|------------------------------------|---------------------|
//! | [`EncodedPath`] | origin + direction codes           | cached travel paths |
//! | [`PosId`]       | `u16` bijection over one room      | destination keys    |
//! | [`DestinationId`] | room name + `PosId`              | cache decisions     |
//!
//! A path is encoded only up to the first room-boundary crossing; the
//! remainder of a multi-room journey is re-encoded after the agent physically
//! crosses (the engine replans when the stored segment runs out).

use std::collections::VecDeque;

use crate::direction::Direction;
use crate::error::CoreError;
use crate::pos::Position;
use crate::room::{ROOM_SIZE, RoomName};

// ── Single-step decode ────────────────────────────────────────────────────────

/// Decode one direction code against an origin position.
///
/// Returns `None` for code 0 (stationary), out-of-range codes, and steps that
/// would hop rooms diagonally.  Border steps cross into the adjacent room.
#[inline]
pub fn position_at_direction(origin: Position, code: u8) -> Option<Position> {
    origin.step_world(Direction::from_u8(code)?)
}

// ── PosId ─────────────────────────────────────────────────────────────────────

/// Offset keeping encoded cell ids disjoint from the 1–8 direction band, so a
/// misrouted value is recognizable instead of silently decoding as a step.
const POS_ID_BASE: u16 = 64;

/// A room-local cell, packed into a `u16` via `BASE + x·ROOM_SIZE + y`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PosId(pub u16);

impl PosId {
    /// Encode a position's in-room coordinates.
    #[inline]
    pub fn of(pos: Position) -> PosId {
        PosId(POS_ID_BASE + pos.x as u16 * ROOM_SIZE as u16 + pos.y as u16)
    }

    /// Decode back to `(x, y)`.  `None` if the value is outside the valid
    /// band (not produced by [`PosId::of`]).
    pub fn decode(self) -> Option<(u8, u8)> {
        let v = self.0.checked_sub(POS_ID_BASE)?;
        let x = v / ROOM_SIZE as u16;
        let y = v % ROOM_SIZE as u16;
        if x >= ROOM_SIZE as u16 {
            return None;
        }
        Some((x as u8, y as u8))
    }
}

/// A stable compact key for "the same destination across steps".
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestinationId {
    pub room: RoomName,
    pub pos:  PosId,
}

impl DestinationId {
    #[inline]
    pub fn of(pos: Position) -> DestinationId {
        DestinationId { room: pos.room, pos: PosId::of(pos) }
    }
}

// ── EncodedPath ───────────────────────────────────────────────────────────────

/// A compact single-room path: an origin cell plus a queue of direction codes.
///
/// Valid for consumption only while [`origin`](EncodedPath::origin) equals
/// the agent's actual position; a mismatch means the agent strayed and the
/// path must be discarded and replanned.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedPath {
    origin: Position,
    steps:  VecDeque<Direction>,
}

impl EncodedPath {
    /// Encode a walkable chain of cells starting from `origin`.
    ///
    /// Encoding stops at the first room-boundary crossing; cells after it are
    /// ignored.  Returns an error if consecutive cells are not adjacent.
    pub fn encode(origin: Position, cells: &[Position]) -> Result<EncodedPath, CoreError> {
        let mut steps = VecDeque::with_capacity(cells.len());
        let mut last = origin;
        for &cell in cells {
            if !cell.same_room(last) {
                break;
            }
            let dir = last
                .dir_to(cell)
                .ok_or(CoreError::NotAdjacent { from: last, to: cell })?;
            steps.push_back(dir);
            last = cell;
        }
        Ok(EncodedPath { origin, steps })
    }

    /// The cell the next step departs from.
    #[inline]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// The next direction to move, without consuming it.
    #[inline]
    pub fn first(&self) -> Option<Direction> {
        self.steps.front().copied()
    }

    /// Consume the leading step, moving the origin along it.
    ///
    /// Called once the step has actually been taken (the agent's position
    /// changed); the new origin is where the agent now stands.
    pub fn advance(&mut self) {
        if let Some(dir) = self.steps.pop_front() {
            match self.origin.step(dir) {
                Some(next) => self.origin = next,
                // Encoding stops at borders, so an in-room step can only fail
                // on corrupt data; empty the path to force a replan.
                None => self.steps.clear(),
            }
        }
    }

    /// Remaining cells, starting with the next step's target.
    pub fn cells(&self) -> Vec<Position> {
        let mut out = Vec::with_capacity(self.steps.len());
        let mut cur = self.origin;
        for &dir in &self.steps {
            match cur.step(dir) {
                Some(next) => {
                    out.push(next);
                    cur = next;
                }
                None => break,
            }
        }
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
