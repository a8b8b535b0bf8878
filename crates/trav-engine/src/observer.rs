//! Observer hooks for travel diagnostics.
//!
//! The engine reports noteworthy events through [`TravelObserver`] instead of
//! logging directly; hosts implement the methods they care about.  Every
//! method has a no-op default, and [`NoopObserver`] is the zero-cost stand-in
//! when no diagnostics are wanted.

use trav_core::{AgentId, Position, RoomName};

/// Receives diagnostic events from a [`Traveler`][crate::Traveler].
#[allow(unused_variables)]
pub trait TravelObserver {
    /// A tile-level plan finished (successfully or as a best effort).
    fn on_path_planned(
        &mut self,
        agent:       AgentId,
        origin:      Position,
        destination: Position,
        ops_used:    u32,
        elapsed_ms:  f64,
        incomplete:  bool,
    ) {
    }

    /// Room-graph routing between two rooms found no route.
    fn on_route_failed(&mut self, origin: RoomName, destination: RoomName) {}

    /// A stuck agent on a cached route could not find a local detour.
    fn on_detour_failed(&mut self, agent: AgentId) {}

    /// An agent's average planning cost crossed the configured threshold.
    fn on_high_plan_cost(&mut self, agent: AgentId, avg_ms: f64, samples: u32) {}
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl TravelObserver for NoopObserver {}
