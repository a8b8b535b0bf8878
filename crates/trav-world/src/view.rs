//! Collaborator interfaces: the world the engine plans against and the
//! agents it moves.
//!
//! # Pluggability
//!
//! The travel engine calls the world exclusively through [`WorldView`] and
//! moves agents exclusively through [`Movable`], so a host can back them with
//! live game state, a replay, or the in-memory [`GridWorld`][crate::GridWorld]
//! used in tests — without touching the engine.

use trav_core::{AgentId, Direction, Position, RoomName, Tick};

use crate::structure::Structure;
use crate::terrain::RoomTerrain;

// ── WorldView ─────────────────────────────────────────────────────────────────

/// Read access to the shared world, plus hostile-room bookkeeping.
///
/// All query methods are snapshots of the current tick generation; the engine
/// never caches their results across generations.
pub trait WorldView {
    /// The current tick generation.
    fn tick(&self) -> Tick;

    /// `true` if occupant/structure data for `room` is available this tick.
    /// Unobserved rooms can still be routed through using terrain and any
    /// grid cached earlier in the same generation.
    fn is_observed(&self, room: RoomName) -> bool;

    /// The room's terrain, or `None` if no such room exists on the map.
    fn terrain(&self, room: RoomName) -> Option<&RoomTerrain>;

    /// Static structures currently in `room` (empty for unobserved rooms).
    fn structures(&self, room: RoomName) -> Vec<Structure>;

    /// Pending construction of new structures in `room`.
    fn construction_sites(&self, room: RoomName) -> Vec<Structure>;

    /// Every cell occupied by an agent in `room` this tick.
    fn occupied_cells(&self, room: RoomName) -> Vec<Position>;

    /// Rooms reachable from `room` through a border exit.
    fn exits(&self, room: RoomName) -> Vec<RoomName>;

    /// `true` if `room` is marked hostile in persistent hostile-room
    /// tracking.
    fn is_hostile(&self, room: RoomName) -> bool;

    /// Re-evaluate and record hostility for a just-entered room.  Called by
    /// the travel engine whenever an agent crosses into a different room.
    fn update_room_status(&mut self, room: RoomName);
}

// ── Movable ───────────────────────────────────────────────────────────────────

/// What the movement primitive reports for a single-cell move intent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveStatus {
    /// The move was accepted for this step.
    Ok,
    /// The agent temporarily cannot act (exhausted, immobilized).
    Busy,
    /// The move request was malformed or the agent cannot move at all.
    Invalid,
    /// The agent has no way to execute the move.
    NoPath,
}

/// Capability interface for anything the travel engine can steer.
///
/// The engine operates purely against this trait; it never assumes a concrete
/// agent type and never mutates agents except through [`move_in`]
/// (Movable::move_in).
pub trait Movable {
    /// Stable identifier, used to key per-agent travel memory.
    fn id(&self) -> AgentId;

    /// Current position.
    fn pos(&self) -> Position;

    /// `false` while the agent is temporarily unable to move this step.
    fn can_move(&self) -> bool;

    /// Issue a single-cell move intent in `dir` for this step.
    fn move_in(&mut self, dir: Direction) -> MoveStatus;
}
