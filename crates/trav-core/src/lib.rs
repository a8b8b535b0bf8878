//! `trav-core` — foundational types for the trav grid-travel engine.
//!
//! This crate is a dependency of every other `trav-*` crate.  It has no
//! `trav-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `AgentId`                                             |
//! | [`room`]      | `RoomName`, `ROOM_SIZE`, room-graph geometry          |
//! | [`pos`]       | `Position`, border-crossing geometry                  |
//! | [`direction`] | `Direction` — the 8 movement codes                    |
//! | [`path`]      | `EncodedPath`, `PosId`, `DestinationId`               |
//! | [`tick`]      | `Tick` generation counter                             |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |
//!           | Required for host-side persistence of travel memory.        |

pub mod direction;
pub mod error;
pub mod ids;
pub mod path;
pub mod pos;
pub mod room;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use path::{DestinationId, EncodedPath, PosId, position_at_direction};
pub use pos::Position;
pub use room::{ROOM_SIZE, RoomName};
pub use tick::Tick;
