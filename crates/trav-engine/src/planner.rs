//! Tile-level path planning: cost assembly, route restriction, fallbacks.
//!
//! This is where one trip's search actually happens.  The planner assembles a
//! per-room cost-grid provider from the matrix cache and the call's options,
//! optionally restricts the search to a room route, and applies two fallbacks
//! when the restricted search comes back incomplete: first a shorter plan
//! toward the next room on the route, then a single unrestricted full search
//! while the operation spend stayed low.

use rustc_hash::FxHashSet;
use trav_core::{Position, RoomName};
use trav_world::{
    CostGrid, GridHint, RouteSearch, SearchGoal, SearchResult, SearchSettings, TileSearch,
    WorldView,
};

use crate::config::TravelConfig;
use crate::error::PlanResult;
use crate::matrix::MatrixCache;
use crate::observer::TravelObserver;
use crate::options::TravelOptions;
use crate::route::{RoomRoute, find_route};

/// The outcome of one planning pass.
#[derive(Clone, Debug)]
pub struct PlannedPath {
    /// Cells to traverse in order, origin excluded.
    pub path:       Vec<Position>,
    /// `true` if even the fallbacks produced only a best-effort approach.
    pub incomplete: bool,
    /// Total operations spent across the pass, fallbacks included.
    pub ops_used:   u32,
    /// The room route used to restrict the search, if one was planned.
    pub route:      Option<RoomRoute>,
}

/// Terrain cost pair implied by the call's options.
fn terrain_costs(opts: &TravelOptions<'_>) -> (u8, u8) {
    if opts.off_road {
        (1, 1)
    } else if opts.ignore_roads {
        (1, 5)
    } else {
        (2, 10)
    }
}

/// One restricted or unrestricted search with the full cost-grid assembly.
#[allow(clippy::too_many_arguments)]
fn search_once<TS: TileSearch + ?Sized>(
    world:         &dyn WorldView,
    search:        &TS,
    matrices:      &mut MatrixCache,
    origin:        Position,
    goals:         &[SearchGoal],
    destination:   Position,
    ignore_creeps: bool,
    allowed:       Option<&FxHashSet<RoomName>>,
    opts:          &TravelOptions<'_>,
    settings:      &SearchSettings,
    cfg:           &TravelConfig,
) -> PlanResult<SearchResult> {
    let mut provide = |room: RoomName| -> GridHint {
        if let Some(cb) = opts.room_callback {
            if let Some(hint) = cb(room) {
                return hint;
            }
        }
        match allowed {
            Some(set) if !set.contains(&room) => return GridHint::Deny,
            None => {
                // Without a route the hostile exclusion applies directly.
                if !opts.allow_hostile
                    && world.is_hostile(room)
                    && room != origin.room
                    && room != destination.room
                {
                    return GridHint::Deny;
                }
            }
            _ => {}
        }

        let mut grid = if !world.is_observed(room) {
            // Unobserved: reuse a grid built earlier this generation, else
            // plan on terrain alone.
            match matrices.cached_structure(world, room) {
                Some(cached) => cached.clone(),
                None if opts.obstacles.iter().any(|o| o.room == room) => CostGrid::new(),
                None => return GridHint::Terrain,
            }
        } else if opts.ignore_structures {
            let mut grid = CostGrid::new();
            if !ignore_creeps {
                for pos in world.occupied_cells(room) {
                    grid.block(pos.x, pos.y);
                }
            }
            grid
        } else if ignore_creeps || room != origin.room {
            // Occupancy only matters near the agent; distant rooms will have
            // shuffled by the time it arrives.
            matrices.structure_grid(world, room, cfg)
        } else {
            matrices.occupancy_grid(world, room, cfg)
        };

        for obstacle in &opts.obstacles {
            if obstacle.room == room {
                grid.block(obstacle.x, obstacle.y);
            }
        }
        GridHint::Grid(grid)
    };

    Ok(search.search(world, origin, goals, settings, &mut provide)?)
}

/// Plan a path from `origin` to within `opts.range` of `destination`.
///
/// `stuck` is the agent's current stuck count; a stuck agent skips the
/// unrestricted retry (its problem is local, not a bad route).
#[allow(clippy::too_many_arguments)]
pub fn find_travel_path<TS, RS, O>(
    world:         &dyn WorldView,
    search:        &TS,
    router:        &RS,
    matrices:      &mut MatrixCache,
    origin:        Position,
    destination:   Position,
    ignore_creeps: bool,
    stuck:         u32,
    opts:          &TravelOptions<'_>,
    cfg:           &TravelConfig,
    observer:      &mut O,
) -> PlanResult<PlannedPath>
where
    TS: TileSearch + ?Sized,
    RS: RouteSearch + ?Sized,
    O: TravelObserver + ?Sized,
{
    let (plain, swamp) = terrain_costs(opts);
    let settings = SearchSettings {
        max_ops: opts.max_ops.unwrap_or(cfg.default_max_ops),
        plain_cost: plain,
        swamp_cost: swamp,
    };

    let distance = origin.room.linear_distance(destination.room);
    let use_route = opts
        .use_find_route
        .unwrap_or(distance > cfg.route_distance_threshold);
    let route = if use_route {
        find_route(world, router, origin, destination, opts, cfg, observer)
    } else {
        None
    };

    let goals = [SearchGoal { pos: destination, range: opts.range }];
    let mut result = search_once(
        world,
        search,
        matrices,
        origin,
        &goals,
        destination,
        ignore_creeps,
        route.as_ref().map(|r| &r.allowed),
        opts,
        &settings,
        cfg,
    )?;

    // Fallback 1: an incomplete restricted search still knows where to go
    // next — aim for the center of the next room on the route instead.
    if result.incomplete {
        if let Some(route) = route.as_ref() {
            if route.steps.len() > 1 {
                let next_room = route.steps[1];
                let goals = [SearchGoal { pos: Position::room_center(next_room), range: 1 }];
                let retry = search_once(
                    world, search, matrices, origin, &goals, destination, ignore_creeps,
                    None, opts, &settings, cfg,
                )?;
                let ops = result.ops_used + retry.ops_used;
                if !retry.incomplete {
                    result = retry;
                }
                result.ops_used = ops;
            }
        }
    }

    // Fallback 2: the restriction itself may have been the problem.  Retry
    // unrestricted once, but only if the first attempt failed cheaply (a
    // genuine dead end burns the whole budget) and the agent is not stuck.
    if result.incomplete
        && result.ops_used < cfg.retry_ops_ceiling
        && stuck < cfg.stuck_threshold
    {
        let retry = search_once(
            world, search, matrices, origin, &goals, destination, ignore_creeps,
            None, opts, &settings, cfg,
        )?;
        let ops = result.ops_used + retry.ops_used;
        if !retry.incomplete {
            result = retry;
        }
        result.ops_used = ops;
    }

    Ok(PlannedPath {
        path:       result.path,
        incomplete: result.incomplete,
        ops_used:   result.ops_used,
        route,
    })
}
