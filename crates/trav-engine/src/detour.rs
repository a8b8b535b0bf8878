//! Local detours around obstructions on cached routes.
//!
//! An agent following a shared route table has no personal plan to repair
//! when something blocks its next cell.  The detour finder runs a small,
//! tightly budgeted search confined to the agent's current room, aiming for
//! any of the next few cells further along the table, and hands back an
//! independently encoded micro-path that rejoins the route.

use trav_core::{EncodedPath, Position};
use trav_world::{GridHint, SearchGoal, SearchSettings, TileSearch, WorldView};

use crate::config::TravelConfig;
use crate::matrix::MatrixCache;

/// How many upcoming route cells to offer as rejoin targets.
pub const DETOUR_LOOKAHEAD: usize = 5;

/// Search for a short in-room path from `start` to any of `goals`.
///
/// Stuck recovery calls this with `ignore_creeps = false` so occupied cells
/// count as obstacles; the whole point is to get around whatever is sitting
/// on the route.  `None` means no detour exists within the budget and the
/// caller should fall back to individual planning.
pub fn find_detour<TS: TileSearch + ?Sized>(
    world:         &dyn WorldView,
    search:        &TS,
    matrices:      &mut MatrixCache,
    start:         Position,
    goals:         &[Position],
    ignore_creeps: bool,
    cfg:           &TravelConfig,
) -> Option<EncodedPath> {
    if goals.is_empty() {
        return None;
    }
    let goals: Vec<SearchGoal> = goals.iter().map(|&pos| SearchGoal::at(pos)).collect();
    let settings = SearchSettings {
        max_ops:    cfg.detour_max_ops,
        plain_cost: 2,
        swamp_cost: 10,
    };

    let home = start.room;
    let mut provide = |room| {
        if room != home {
            GridHint::Deny
        } else if ignore_creeps {
            GridHint::Grid(matrices.structure_grid(world, home, cfg))
        } else {
            GridHint::Grid(matrices.occupancy_grid(world, home, cfg))
        }
    };

    let result = search
        .search(world, start, &goals, &settings, &mut provide)
        .ok()?;
    if result.incomplete || result.path.is_empty() {
        return None;
    }
    EncodedPath::encode(start, &result.path).ok()
}
