//! Precomputed route tables and per-destination cacheability.
//!
//! A [`CachedRoute`] maps positions to the step to take from them, so any
//! number of agents can follow the same well-worn trail without individual
//! plans.  Whether a given destination should use the table at all is decided
//! once per destination and memoized in the agent's travel memory as a
//! [`CacheDecision`].

use rustc_hash::FxHashMap;
use trav_core::{Direction, DestinationId, Position};

use crate::memory::TravelMemory;

/// One entry in a cached route table.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteStep {
    /// Move in this direction.
    Dir(Direction),
    /// Terminal cell: stay put, the trip is over.
    Wait,
}

/// A position-keyed step table: for each covered cell, the move to make from
/// it.  Terminal cells carry [`RouteStep::Wait`].
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CachedRoute {
    steps: FxHashMap<Position, RouteStep>,
}

impl CachedRoute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: Position, dir: Direction) {
        self.steps.insert(from, RouteStep::Dir(dir));
    }

    /// Mark `pos` as a terminal cell.
    pub fn set_wait(&mut self, pos: Position) {
        self.steps.insert(pos, RouteStep::Wait);
    }

    /// Build a table from an ordered chain of cells, ending in a terminal
    /// entry.  Returns `None` if consecutive cells are not adjacent.
    pub fn from_positions(cells: &[Position]) -> Option<CachedRoute> {
        let mut route = CachedRoute::new();
        for pair in cells.windows(2) {
            let dir = pair[0].dir_to(pair[1])?;
            route.insert(pair[0], dir);
        }
        if let Some(&last) = cells.last() {
            route.set_wait(last);
        }
        Some(route)
    }

    /// The step recorded for `pos`, if the table covers it.
    #[inline]
    pub fn step_at(&self, pos: Position) -> Option<RouteStep> {
        self.steps.get(&pos).copied()
    }

    /// Up to `n` upcoming cells starting after `from`, following the table.
    /// Stops at a terminal entry, an uncovered cell, or a room border.
    pub fn upcoming(&self, from: Position, n: usize) -> Vec<Position> {
        let mut out = Vec::with_capacity(n);
        let mut cur = from;
        while out.len() < n {
            let Some(RouteStep::Dir(dir)) = self.step_at(cur) else { break };
            let Some(next) = cur.step(dir) else { break };
            out.push(next);
            cur = next;
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

/// The memoized answer to "may this destination use the cached route?".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheDecision {
    pub dest:     DestinationId,
    pub cachable: bool,
}

/// Decide (or recall) whether travel to `dest` may follow the cached route.
///
/// Forced creep avoidance disqualifies caching outright: the shared table
/// cannot honor per-agent avoidance.  Otherwise the decision is made once per
/// destination via the caller's predicate (falling back to `default_flag`)
/// and remembered until the destination changes.
pub fn route_cachable(
    memory:        &mut TravelMemory,
    dest:          Position,
    predicate:     Option<&dyn Fn(DestinationId) -> bool>,
    default_flag:  bool,
    ignore_creeps: Option<bool>,
) -> bool {
    if ignore_creeps == Some(false) {
        return false;
    }
    let id = DestinationId::of(dest);
    if let Some(decision) = memory.cache {
        if decision.dest == id {
            return decision.cachable;
        }
    }
    let cachable = predicate.map_or(default_flag, |p| p(id));
    memory.cache = Some(CacheDecision { dest: id, cachable });
    cachable
}
