//! The travel state machine.
//!
//! [`Traveler`] is the engine's entry point: one call to
//! [`travel_to`](Traveler::travel_to) per agent per tick drives the whole
//! trip — stuck detection, route caching, planning, path consumption, and
//! the final move intent.  All per-agent state lives in the caller's
//! [`TravelStore`]; the `Traveler` itself holds only the search primitives,
//! the tick-scoped matrix cache, and configuration.

use std::time::Instant;

use trav_core::{DestinationId, Direction, EncodedPath, Position};
use trav_world::{
    AStarSearch, Movable, MoveStatus, RoomRouter, RouteSearch, TileSearch, WorldView,
};

use crate::cache::{CacheDecision, CachedRoute, RouteStep, route_cachable};
use crate::config::TravelConfig;
use crate::detour::{DETOUR_LOOKAHEAD, find_detour};
use crate::matrix::MatrixCache;
use crate::memory::{TravelMemory, TravelStore};
use crate::observer::TravelObserver;
use crate::options::TravelOptions;
use crate::planner::find_travel_path;

// ── Outcome ───────────────────────────────────────────────────────────────────

/// What one `travel_to` call did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TravelOutcome {
    /// A move intent was issued; `next` is where the agent should stand after
    /// it resolves.
    Moved { direction: Direction, next: Position },
    /// The agent is within the requested range of the destination.
    Arrived,
    /// The agent cannot act this step.
    Busy,
    /// The request cannot be satisfied as posed (unknown destination room,
    /// malformed move).
    InvalidRequest,
    /// No path to the destination was found this step.
    NoPathFound,
}

fn step_outcome(status: MoveStatus, direction: Direction, next: Position) -> TravelOutcome {
    match status {
        MoveStatus::Ok      => TravelOutcome::Moved { direction, next },
        MoveStatus::Busy    => TravelOutcome::Busy,
        MoveStatus::Invalid => TravelOutcome::InvalidRequest,
        MoveStatus::NoPath  => TravelOutcome::NoPathFound,
    }
}

/// What a cached-route step decided.
enum CachedStep {
    /// Handled; return this outcome.
    Done(TravelOutcome),
    /// The table cannot serve this agent right now; plan individually.
    Fallback,
}

// ── Traveler ──────────────────────────────────────────────────────────────────

/// The travel engine.  Construct one per host and reuse it across ticks; the
/// internal matrix cache invalidates itself whenever the world's tick
/// generation changes.
pub struct Traveler<TS = AStarSearch, RS = RoomRouter> {
    search:     TS,
    router:     RS,
    matrices:   MatrixCache,
    pub config: TravelConfig,
}

impl Traveler {
    /// A traveler with the default search primitives and configuration.
    pub fn new() -> Traveler {
        Traveler::with_parts(AStarSearch, RoomRouter, TravelConfig::default())
    }
}

impl Default for Traveler {
    fn default() -> Self {
        Traveler::new()
    }
}

impl<TS: TileSearch, RS: RouteSearch> Traveler<TS, RS> {
    /// A traveler with custom search primitives.
    pub fn with_parts(search: TS, router: RS, config: TravelConfig) -> Traveler<TS, RS> {
        Traveler { search, router, matrices: MatrixCache::new(), config }
    }

    /// Drive `agent` one step toward `destination`.
    ///
    /// Call once per agent per tick.  The returned outcome says what happened
    /// this step; the trip resumes from [`TravelStore`] state on the next
    /// call.
    pub fn travel_to<W, M, O>(
        &mut self,
        world:       &mut W,
        agent:       &mut M,
        store:       &mut TravelStore,
        destination: Position,
        opts:        &TravelOptions<'_>,
        observer:    &mut O,
    ) -> TravelOutcome
    where
        W: WorldView,
        M: Movable,
        O: TravelObserver,
    {
        let now = world.tick();
        self.matrices.revalidate(now);

        if world.terrain(destination.room).is_none() {
            return TravelOutcome::InvalidRequest;
        }

        let pos = agent.pos();
        let memory = store.get_or_create(agent.id());

        if !agent.can_move() {
            memory.idle_since.get_or_insert(now);
            return TravelOutcome::Busy;
        }
        memory.idle_since = None;

        // Stuck bookkeeping against the position recorded when the last move
        // intent was issued.  Flickering between opposing border cells is an
        // exit bounce, not progress.
        if let Some(prev) = memory.prev.take() {
            if pos.room != prev.room {
                world.update_room_status(pos.room);
            }
            if pos != prev && !Position::opposing_exits(prev, pos) {
                memory.stuck = 0;
            } else {
                memory.stuck += 1;
            }
        }

        if memory.destination != Some(destination) {
            memory.destination = Some(destination);
            memory.path = None;
            memory.detour = None;
            memory.check_range = None;
            memory.stuck = 0;
        }

        // Arrival check, skipped while the remaining path length proves the
        // agent cannot be there yet.
        if memory.check_range.is_none_or(|until| now >= until) {
            if let Some(range) = pos.range_to(destination) {
                if range <= opts.range {
                    memory.path = None;
                    memory.detour = None;
                    memory.check_range = None;
                    return TravelOutcome::Arrived;
                }
                // Adjacent with range 0: step straight onto the destination.
                if range == 1 && opts.range == 0 {
                    let Some(dir) = pos.dir_to(destination) else {
                        return TravelOutcome::NoPathFound;
                    };
                    memory.prev = Some(pos);
                    return step_outcome(agent.move_in(dir), dir, destination);
                }
            }
            memory.check_range = None;
        }

        let threshold = opts.stuck_threshold.unwrap_or(self.config.stuck_threshold);
        let stuck_recovery = !opts.ignore_stuck && memory.stuck >= threshold;
        let mut ignore_creeps = opts.ignore_creeps.unwrap_or(true);

        if let Some(route) = opts.cached_route {
            let cachable = route_cachable(
                memory,
                destination,
                opts.cache_predicate,
                self.config.cache_routes_default,
                opts.ignore_creeps,
            );
            if cachable {
                match self.cached_step(
                    &*world, agent, memory, route, destination, stuck_recovery, observer,
                ) {
                    CachedStep::Done(outcome) => return outcome,
                    CachedStep::Fallback => {}
                }
            }
        }

        // Stuck recovery in individual planning: throw the path away and
        // replan treating every occupant as an obstacle.
        if stuck_recovery {
            memory.path = None;
            memory.detour = None;
            ignore_creeps = false;
        }

        resync(&mut memory.path, pos);

        if memory.path.is_none() {
            let started = Instant::now();
            let planned = match find_travel_path(
                &*world,
                &self.search,
                &self.router,
                &mut self.matrices,
                pos,
                destination,
                ignore_creeps,
                memory.stuck,
                opts,
                &self.config,
                observer,
            ) {
                Ok(planned) => planned,
                Err(_) => return TravelOutcome::NoPathFound,
            };
            let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;

            memory.plan_ms += elapsed_ms;
            memory.plan_count += 1;
            if memory.plan_count >= self.config.report_min_samples {
                let avg = memory.plan_ms / memory.plan_count as f64;
                if avg > self.config.report_cpu_threshold_ms {
                    observer.on_high_plan_cost(agent.id(), avg, memory.plan_count);
                }
            }
            observer.on_path_planned(
                agent.id(),
                pos,
                destination,
                planned.ops_used,
                elapsed_ms,
                planned.incomplete,
            );

            if planned.path.is_empty() {
                // A complete empty path means the search started within range.
                return if planned.incomplete {
                    TravelOutcome::NoPathFound
                } else {
                    TravelOutcome::Arrived
                };
            }
            let Ok(encoded) = EncodedPath::encode(pos, &planned.path) else {
                return TravelOutcome::NoPathFound;
            };
            if encoded.is_empty() {
                // The very first step crosses a room border; issue it
                // directly and re-encode from the far side next tick.
                let next = planned.path[0];
                let Some(dir) = pos.dir_to(next) else {
                    return TravelOutcome::NoPathFound;
                };
                memory.prev = Some(pos);
                return step_outcome(agent.move_in(dir), dir, next);
            }
            memory.check_range = Some(now.offset(encoded.len() as u64));
            memory.path = Some(encoded);
            memory.stuck = 0;
        }

        let Some(path) = memory.path.as_ref() else {
            return TravelOutcome::NoPathFound;
        };
        let Some(dir) = path.first() else {
            memory.path = None;
            return TravelOutcome::NoPathFound;
        };
        let Some(next) = pos.step_world(dir) else {
            memory.path = None;
            return TravelOutcome::NoPathFound;
        };
        memory.prev = Some(pos);
        step_outcome(agent.move_in(dir), dir, next)
    }

    /// One step along a cached route table, including stuck detours.
    #[allow(clippy::too_many_arguments)]
    fn cached_step<M: Movable, O: TravelObserver>(
        &mut self,
        world:          &dyn WorldView,
        agent:          &mut M,
        memory:         &mut TravelMemory,
        route:          &CachedRoute,
        destination:    Position,
        stuck_recovery: bool,
        observer:       &mut O,
    ) -> CachedStep {
        let pos = agent.pos();

        if stuck_recovery && memory.detour.is_none() {
            let goals = route.upcoming(pos, DETOUR_LOOKAHEAD);
            // Creep avoidance is forced for detours: the blocker is usually
            // another agent.
            match find_detour(
                world, &self.search, &mut self.matrices, pos, &goals, false, &self.config,
            ) {
                Some(detour) => {
                    memory.detour = Some(detour);
                    memory.stuck = 0;
                }
                None => {
                    // No way around: disable caching for this destination and
                    // let individual planning take over.
                    memory.cache = Some(CacheDecision {
                        dest:     DestinationId::of(destination),
                        cachable: false,
                    });
                    memory.detour = None;
                    observer.on_detour_failed(agent.id());
                    return CachedStep::Fallback;
                }
            }
        }

        resync(&mut memory.detour, pos);

        let dir = if let Some(dir) = memory.detour.as_ref().and_then(EncodedPath::first) {
            dir
        } else {
            match route.step_at(pos) {
                None => return CachedStep::Fallback,
                Some(RouteStep::Wait) => return CachedStep::Done(TravelOutcome::Arrived),
                Some(RouteStep::Dir(dir)) => dir,
            }
        };

        let Some(next) = pos.step_world(dir) else {
            return CachedStep::Fallback;
        };
        memory.prev = Some(pos);
        let status = agent.move_in(dir);
        if status == MoveStatus::Ok {
            // Any individually planned path is stale once the table moves us.
            memory.path = None;
        }
        CachedStep::Done(step_outcome(status, dir, next))
    }
}

/// Re-anchor a stored path on the agent's actual position.
///
/// If the agent took the path's leading step since last tick, one advance
/// brings the origin back in line; anything else (displacement, exhaustion)
/// discards the path so it gets replanned.
fn resync(path: &mut Option<EncodedPath>, pos: Position) {
    if let Some(p) = path.as_mut() {
        if p.origin() != pos {
            p.advance();
        }
        if p.origin() != pos || p.is_empty() {
            *path = None;
        }
    }
}
