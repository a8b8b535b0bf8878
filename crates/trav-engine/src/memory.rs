//! Per-agent travel memory and its store.
//!
//! The engine keeps no state on agents themselves; everything it needs to
//! resume a trip next step lives in a [`TravelMemory`] keyed by agent id.
//! Hosts that persist state across processes can serialize the store with the
//! `serde` feature.

use rustc_hash::FxHashMap;
use trav_core::{AgentId, EncodedPath, Position, Tick};

use crate::cache::CacheDecision;

/// Everything remembered about one agent's current trip.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelMemory {
    /// Destination of the trip in progress.
    pub destination: Option<Position>,
    /// Remaining planned path, if any.
    pub path:        Option<EncodedPath>,
    /// Consecutive steps without actual movement.
    pub stuck:       u32,
    /// Position at the end of the previous step, for stuck detection.
    pub prev:        Option<Position>,
    /// When the agent last became unable to move, if it still is.
    pub idle_since:  Option<Tick>,
    /// Skip the arrival-range check until this tick.
    pub check_range: Option<Tick>,
    /// Total milliseconds spent planning for this agent.
    pub plan_ms:     f64,
    /// Number of plans recorded in `plan_ms`.
    pub plan_count:  u32,
    /// Memoized cacheability decision for the current destination.
    pub cache:       Option<CacheDecision>,
    /// Active local detour around an obstruction on a cached route.
    pub detour:      Option<EncodedPath>,
}

/// Sparse store of travel memories, keyed by agent.
#[derive(Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelStore {
    memories: FxHashMap<AgentId, TravelMemory>,
}

impl TravelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: AgentId) -> Option<&TravelMemory> {
        self.memories.get(&id)
    }

    pub fn get_or_create(&mut self, id: AgentId) -> &mut TravelMemory {
        self.memories.entry(id).or_default()
    }

    /// Forget an agent entirely (it died or its trip was cancelled).
    pub fn remove(&mut self, id: AgentId) -> Option<TravelMemory> {
        self.memories.remove(&id)
    }

    /// Drop memories for agents the host no longer tracks.
    pub fn retain(&mut self, mut keep: impl FnMut(AgentId) -> bool) {
        self.memories.retain(|&id, _| keep(id));
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }
}
