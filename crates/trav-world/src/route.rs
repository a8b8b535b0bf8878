//! The room-route primitive: trait and default Dijkstra implementation.
//!
//! Room-level routing answers "which rooms should this journey pass
//! through?" before any tile-level work happens.  The cost callback lets the
//! caller bias or exclude rooms (hostility, highways, keeper bands) without
//! the primitive knowing about any of those policies.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use trav_core::RoomName;

use crate::view::WorldView;
use crate::WorldError;

/// The caller's verdict on routing through one room.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RoomCost {
    /// Room may be used at this (relative) cost.
    Open(u32),
    /// Room must not be used.
    Closed,
}

/// Pluggable room-graph routing primitive.
pub trait RouteSearch {
    /// Find an ordered room sequence from `from` to `to`, both inclusive.
    ///
    /// `cost` is consulted for every candidate room except the origin;
    /// [`RoomCost::Closed`] excludes the room entirely.
    ///
    /// # Errors
    ///
    /// [`WorldError::NoRoute`] if the two rooms are not connected under the
    /// given costs.
    fn route(
        &self,
        world: &dyn WorldView,
        from:  RoomName,
        to:    RoomName,
        cost:  &mut dyn FnMut(RoomName) -> RoomCost,
    ) -> Result<Vec<RoomName>, WorldError>;
}

// ── RoomRouter ────────────────────────────────────────────────────────────────

/// Default [`RouteSearch`]: Dijkstra over the room-adjacency graph.
///
/// Adjacency comes from [`WorldView::exits`].  Heap entries carry the room
/// coordinate as a secondary key for deterministic tie-breaking.
pub struct RoomRouter;

impl RouteSearch for RoomRouter {
    fn route(
        &self,
        world: &dyn WorldView,
        from:  RoomName,
        to:    RoomName,
        cost:  &mut dyn FnMut(RoomName) -> RoomCost,
    ) -> Result<Vec<RoomName>, WorldError> {
        if from == to {
            return Ok(vec![from]);
        }

        let mut dist: FxHashMap<RoomName, u32> = FxHashMap::default();
        let mut prev: FxHashMap<RoomName, RoomName> = FxHashMap::default();
        dist.insert(from, 0);

        let mut heap: BinaryHeap<Reverse<(u32, i16, i16)>> = BinaryHeap::new();
        heap.push(Reverse((0, from.x, from.y)));

        while let Some(Reverse((d, x, y))) = heap.pop() {
            let room = RoomName::new(x, y);
            if dist.get(&room).is_some_and(|&best| d > best) {
                continue; // stale heap entry
            }
            if room == to {
                return Ok(reconstruct(&prev, from, to));
            }

            for next in world.exits(room) {
                let step = match cost(next) {
                    RoomCost::Open(c) => c,
                    RoomCost::Closed  => continue,
                };
                let nd = d.saturating_add(step);
                if dist.get(&next).is_none_or(|&best| nd < best) {
                    dist.insert(next, nd);
                    prev.insert(next, room);
                    heap.push(Reverse((nd, next.x, next.y)));
                }
            }
        }

        Err(WorldError::NoRoute { from, to })
    }
}

fn reconstruct(prev: &FxHashMap<RoomName, RoomName>, from: RoomName, to: RoomName) -> Vec<RoomName> {
    let mut steps = vec![to];
    let mut cur = to;
    while cur != from {
        match prev.get(&cur) {
            Some(&p) => {
                steps.push(p);
                cur = p;
            }
            None => break,
        }
    }
    steps.reverse();
    steps
}
