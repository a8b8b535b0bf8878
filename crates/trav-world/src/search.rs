//! The tile-search primitive: trait and default A* implementation.
//!
//! # Pluggability
//!
//! The travel engine calls tile-level search via the [`TileSearch`] trait so
//! hosts can swap in their own primitive (a native pathfinder binding, a
//! jump-point search, a flow field) without touching the engine.  The default
//! [`AStarSearch`] is a budgeted A* over world-global cell coordinates.
//!
//! # Budget semantics
//!
//! Search never fails on exhaustion: when the operation budget runs out the
//! result carries `incomplete = true` and a best-effort path toward the
//! closest approach found so far.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use trav_core::{Direction, Position, RoomName};

use crate::grid::CostGrid;
use crate::terrain::{RoomTerrain, TerrainKind};
use crate::view::WorldView;
use crate::WorldError;

// ── Contract types ────────────────────────────────────────────────────────────

/// A search target: a position plus the acceptable arrival range.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SearchGoal {
    pub pos:   Position,
    pub range: u32,
}

impl SearchGoal {
    #[inline]
    pub fn at(pos: Position) -> SearchGoal {
        SearchGoal { pos, range: 0 }
    }
}

/// Per-search tuning passed by the planner.
#[derive(Copy, Clone, Debug)]
pub struct SearchSettings {
    /// Operation budget: one op per node expansion.
    pub max_ops:    u32,
    /// Cost of entering a plain cell when the grid defers to terrain.
    pub plain_cost: u8,
    /// Cost of entering a swamp cell when the grid defers to terrain.
    pub swamp_cost: u8,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { max_ops: 20_000, plain_cost: 1, swamp_cost: 5 }
    }
}

/// What the per-room grid provider tells the search about a room.
#[derive(Clone, Debug)]
pub enum GridHint {
    /// Do not enter this room at all.
    Deny,
    /// Enter using terrain costs only.
    Terrain,
    /// Enter using this cost grid (values override terrain).
    Grid(CostGrid),
}

/// The outcome of one search call.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Cells to traverse in order.  The origin cell is not included.
    pub path:       Vec<Position>,
    /// `true` if the budget ran out (or the goal proved unreachable) and
    /// `path` is only a best-effort approach.
    pub incomplete: bool,
    /// Operations actually spent.
    pub ops_used:   u32,
}

/// Per-room cost-grid provider supplied by the caller.
pub type GridProvider<'a> = dyn FnMut(RoomName) -> GridHint + 'a;

/// Pluggable tile-level shortest-path primitive.
pub trait TileSearch {
    /// Find a path from `origin` to within range of any goal.
    ///
    /// `grids` is consulted once per room the search touches; a
    /// [`GridHint::Deny`] makes the room impenetrable.
    ///
    /// # Errors
    ///
    /// Only structural errors (origin room unknown to the world) are `Err`;
    /// budget exhaustion and unreachable goals come back as an incomplete
    /// [`SearchResult`].
    fn search(
        &self,
        world:    &dyn WorldView,
        origin:   Position,
        goals:    &[SearchGoal],
        settings: &SearchSettings,
        grids:    &mut GridProvider<'_>,
    ) -> Result<SearchResult, WorldError>;
}

// ── AStarSearch ───────────────────────────────────────────────────────────────

/// Default [`TileSearch`]: budgeted A* over global cell coordinates.
///
/// 8-connected within rooms; room borders are crossed cardinally (diagonal
/// corner hops between rooms do not exist).  Grid values override terrain
/// (0 → terrain cost, 255 → blocked, otherwise the value itself).  Heap
/// entries carry the coordinate as a secondary key for deterministic
/// tie-breaking.
pub struct AStarSearch;

/// Admission data for one room the search has touched.
struct RoomEntry<'w> {
    terrain: &'w RoomTerrain,
    grid:    Option<CostGrid>,
}

impl TileSearch for AStarSearch {
    fn search(
        &self,
        world:    &dyn WorldView,
        origin:   Position,
        goals:    &[SearchGoal],
        settings: &SearchSettings,
        grids:    &mut GridProvider<'_>,
    ) -> Result<SearchResult, WorldError> {
        if world.terrain(origin.room).is_none() {
            return Err(WorldError::UnknownRoom(origin.room));
        }
        if goals.is_empty() {
            return Ok(SearchResult { path: vec![], incomplete: false, ops_used: 0 });
        }

        let start = origin.global();
        if reached(start, goals) {
            return Ok(SearchResult { path: vec![], incomplete: false, ops_used: 0 });
        }

        // Rooms the search has asked about: None = denied or nonexistent.
        let mut rooms: FxHashMap<RoomName, Option<RoomEntry<'_>>> = FxHashMap::default();
        // Origin's room is always enterable — the agent is standing in it.
        admit(&mut rooms, world, grids, origin.room);

        let mut dist:   FxHashMap<(i32, i32), u32> = FxHashMap::default();
        let mut parent: FxHashMap<(i32, i32), (i32, i32)> = FxHashMap::default();
        dist.insert(start, 0);

        // Min-heap on (f, gx, gy); Reverse makes BinaryHeap behave as min-heap
        // and the coordinate key makes ties deterministic.
        let mut heap: BinaryHeap<Reverse<(u32, i32, i32)>> = BinaryHeap::new();
        heap.push(Reverse((heuristic(start, goals), start.0, start.1)));

        let mut ops: u32 = 0;
        // Closest approach so far: (h, g, node), for best-effort results.
        let mut best: (u32, u32, (i32, i32)) = (heuristic(start, goals), 0, start);

        while let Some(Reverse((f, gx, gy))) = heap.pop() {
            let node = (gx, gy);
            let g = match dist.get(&node) {
                Some(&g) => g,
                None => continue,
            };
            let h = heuristic(node, goals);
            // Skip stale heap entries.
            if f != g + h {
                continue;
            }

            if h == 0 {
                return Ok(SearchResult {
                    path:       reconstruct(&parent, node, start),
                    incomplete: false,
                    ops_used:   ops,
                });
            }
            if (h, g) < (best.0, best.1) {
                best = (h, g, node);
            }

            ops += 1;
            if ops >= settings.max_ops {
                break;
            }

            let here = Position::from_global(gx, gy);
            for dir in Direction::ALL {
                let Some(next) = here.step_world(dir) else { continue };
                let Some(entry) = admit(&mut rooms, world, grids, next.room) else {
                    continue;
                };
                let Some(step_cost) = cell_cost(entry, next, settings) else { continue };

                let next_g = g.saturating_add(step_cost);
                let next_node = next.global();
                if dist.get(&next_node).is_none_or(|&old| next_g < old) {
                    dist.insert(next_node, next_g);
                    parent.insert(next_node, node);
                    heap.push(Reverse((
                        next_g + heuristic(next_node, goals),
                        next_node.0,
                        next_node.1,
                    )));
                }
            }
        }

        // Budget exhausted or goal unreachable: best-effort path.
        Ok(SearchResult {
            path:       reconstruct(&parent, best.2, start),
            incomplete: true,
            ops_used:   ops,
        })
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Chebyshev distance between global coordinates.
#[inline]
fn chebyshev(a: (i32, i32), b: (i32, i32)) -> u32 {
    (a.0 - b.0).unsigned_abs().max((a.1 - b.1).unsigned_abs())
}

/// Remaining distance to the nearest goal boundary (0 inside a goal range).
fn heuristic(node: (i32, i32), goals: &[SearchGoal]) -> u32 {
    goals
        .iter()
        .map(|goal| chebyshev(node, goal.pos.global()).saturating_sub(goal.range))
        .min()
        .unwrap_or(0)
}

#[inline]
fn reached(node: (i32, i32), goals: &[SearchGoal]) -> bool {
    heuristic(node, goals) == 0
}

/// Ask the grid provider about a room and memoize the verdict.
fn admit<'a, 'w>(
    rooms: &'a mut FxHashMap<RoomName, Option<RoomEntry<'w>>>,
    world: &'w dyn WorldView,
    grids: &mut GridProvider<'_>,
    room:  RoomName,
) -> &'a Option<RoomEntry<'w>> {
    rooms.entry(room).or_insert_with(|| {
        let terrain = world.terrain(room)?;
        match grids(room) {
            GridHint::Deny       => None,
            GridHint::Terrain    => Some(RoomEntry { terrain, grid: None }),
            GridHint::Grid(grid) => Some(RoomEntry { terrain, grid: Some(grid) }),
        }
    })
}

/// Cost of entering `pos`, or `None` if the cell is blocked.
fn cell_cost(entry: &RoomEntry<'_>, pos: Position, settings: &SearchSettings) -> Option<u32> {
    let grid_value = entry.grid.as_ref().map_or(0, |g| g.get(pos.x, pos.y));
    match grid_value {
        CostGrid::IMPASSABLE => None,
        0 => match entry.terrain.get(pos.x, pos.y) {
            TerrainKind::Wall  => None,
            TerrainKind::Plain => Some(settings.plain_cost as u32),
            TerrainKind::Swamp => Some(settings.swamp_cost as u32),
        },
        value => Some(value as u32),
    }
}

fn reconstruct(
    parent: &FxHashMap<(i32, i32), (i32, i32)>,
    end:    (i32, i32),
    start:  (i32, i32),
) -> Vec<Position> {
    let mut cells = Vec::new();
    let mut cur = end;
    while cur != start {
        cells.push(Position::from_global(cur.0, cur.1));
        match parent.get(&cur) {
            Some(&prev) => cur = prev,
            None => break,
        }
    }
    cells.reverse();
    cells
}
