//! `trav-world` — world interfaces and default search primitives for the
//! trav grid-travel engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`terrain`]   | `TerrainKind`, `RoomTerrain`                                  |
//! | [`grid`]      | `CostGrid` — per-room traversal costs                         |
//! | [`structure`] | `Structure`, `StructureKind`                                  |
//! | [`view`]      | `WorldView`, `Movable`, `MoveStatus` collaborator traits      |
//! | [`search`]    | `TileSearch` trait + default budgeted `AStarSearch`           |
//! | [`route`]     | `RouteSearch` trait + default `RoomRouter` (Dijkstra)         |
//! | [`map`]       | `GridWorld` — in-memory reference world                       |
//! | [`error`]     | `WorldError`, `WorldResult<T>`                                |
//!
//! The travel engine (`trav-engine`) depends only on the traits here; the
//! default implementations exist so the workspace is usable and testable
//! without a host game.

pub mod error;
pub mod grid;
pub mod map;
pub mod route;
pub mod search;
pub mod structure;
pub mod terrain;
pub mod view;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WorldError, WorldResult};
pub use grid::CostGrid;
pub use map::{GridWorld, RoomData};
pub use route::{RoomCost, RoomRouter, RouteSearch};
pub use search::{
    AStarSearch, GridHint, GridProvider, SearchGoal, SearchResult, SearchSettings, TileSearch,
};
pub use structure::{Structure, StructureKind};
pub use terrain::{RoomTerrain, TerrainKind};
pub use view::{Movable, MoveStatus, WorldView};
