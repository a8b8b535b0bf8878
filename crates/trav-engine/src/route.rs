//! Room-graph route planning.
//!
//! Before tile-level search, long trips are first routed on the coarse room
//! graph.  The resulting room sequence both restricts the tile search (only
//! rooms on the route may be entered) and provides intermediate targets for
//! fallback planning when a full-length search comes back incomplete.

use rustc_hash::FxHashSet;
use trav_core::{Position, RoomName};
use trav_world::{RoomCost, RouteSearch, WorldView};

use crate::config::TravelConfig;
use crate::observer::TravelObserver;
use crate::options::TravelOptions;

/// A planned room sequence plus the allow-set derived from it.
#[derive(Clone, Debug)]
pub struct RoomRoute {
    /// Rooms the tile search may enter.
    pub allowed: FxHashSet<RoomName>,
    /// The route itself, origin room first, destination room last.
    pub steps:   Vec<RoomName>,
}

/// Cost of one room on the route graph, honoring the call's options.
///
/// Precedence: caller override, then distance restriction, then highway
/// preference, then keeper-room penalty, then hostile-room exclusion.
fn room_cost(
    world:       &dyn WorldView,
    room:        RoomName,
    origin:      RoomName,
    destination: RoomName,
    opts:        &TravelOptions<'_>,
    restrict:    u32,
    base:        u32,
) -> RoomCost {
    if let Some(cb) = opts.route_callback {
        if let Some(cost) = cb(room) {
            return cost;
        }
    }
    if room.linear_distance(origin).max(room.linear_distance(destination)) > restrict {
        return RoomCost::Closed;
    }
    if opts.prefer_highway && room.is_highway() {
        return RoomCost::Open(1);
    }
    if !opts.allow_keeper_rooms && !world.is_observed(room) && room.is_keeper() {
        return RoomCost::Open(10 * base);
    }
    if !opts.allow_hostile
        && world.is_hostile(room)
        && room != origin
        && room != destination
    {
        return RoomCost::Closed;
    }
    RoomCost::Open(base)
}

/// Plan a room route from `origin` to `destination`.
///
/// Returns `None` when routing is not attempted (the rooms are too far apart
/// for the restriction heuristic to be trustworthy) or when no route exists;
/// in both cases the tile search proceeds unrestricted.
pub fn find_route<RS: RouteSearch + ?Sized, O: TravelObserver + ?Sized>(
    world:       &dyn WorldView,
    router:      &RS,
    origin:      Position,
    destination: Position,
    opts:        &TravelOptions<'_>,
    cfg:         &TravelConfig,
    observer:    &mut O,
) -> Option<RoomRoute> {
    let from = origin.room;
    let to = destination.room;
    let distance = from.linear_distance(to);
    if distance > cfg.max_route_distance {
        return None;
    }

    // Rooms far off the straight line between the endpoints are excluded so
    // the router cannot wander the whole map.
    let restrict = distance + 10;
    let base: u32 = if opts.prefer_highway { 5 } else { 2 };

    let steps = match router.route(world, from, to, &mut |room| {
        room_cost(world, room, from, to, opts, restrict, base)
    }) {
        Ok(steps) => steps,
        Err(_) => {
            observer.on_route_failed(from, to);
            return None;
        }
    };

    let mut allowed: FxHashSet<RoomName> = steps.iter().copied().collect();
    allowed.insert(from);
    allowed.insert(to);
    Some(RoomRoute { allowed, steps })
}
