//! Tick-scoped cost-grid cache.
//!
//! Structure layouts and occupancy change between ticks, so every cached grid
//! is tagged with the generation it was built in and the whole cache is
//! dropped the first time a newer generation is seen.  Every accessor checks
//! the generation itself, so a grid built in tick T can never answer a query
//! in tick T+1 even when the caller skips [`MatrixCache::revalidate`].
//! Within one generation each room's grids are built at most once.

use rustc_hash::FxHashMap;
use trav_core::{Position, RoomName, Tick};
use trav_world::{CostGrid, StructureKind, WorldView};

use crate::config::TravelConfig;

/// Per-generation cache of structure and occupancy cost grids.
#[derive(Default)]
pub struct MatrixCache {
    tick:       Tick,
    structures: FxHashMap<RoomName, CostGrid>,
    occupancy:  FxHashMap<RoomName, CostGrid>,
}

impl MatrixCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every cached grid if the world has moved to a new generation.
    pub fn revalidate(&mut self, now: Tick) {
        if now != self.tick {
            self.tick = now;
            self.structures.clear();
            self.occupancy.clear();
        }
    }

    /// The structure grid built earlier this generation, if any.  Used for
    /// rooms that are no longer observed but were planned through recently.
    /// A grid from an older generation is reported as absent.
    pub fn cached_structure(&self, world: &dyn WorldView, room: RoomName) -> Option<&CostGrid> {
        if world.tick() != self.tick {
            return None;
        }
        self.structures.get(&room)
    }

    /// Structure-only grid for `room`: roads cheap, containers costly,
    /// blockers impassable.  Built once per generation, then cloned.
    pub fn structure_grid(
        &mut self,
        world: &dyn WorldView,
        room:  RoomName,
        cfg:   &TravelConfig,
    ) -> CostGrid {
        self.revalidate(world.tick());
        self.structures
            .entry(room)
            .or_insert_with(|| build_structure_grid(world, room, cfg))
            .clone()
    }

    /// Structure grid with every occupied cell blocked on top.
    pub fn occupancy_grid(
        &mut self,
        world: &dyn WorldView,
        room:  RoomName,
        cfg:   &TravelConfig,
    ) -> CostGrid {
        self.revalidate(world.tick());
        if let Some(grid) = self.occupancy.get(&room) {
            return grid.clone();
        }
        let mut grid = self.structure_grid(world, room, cfg);
        for pos in world.occupied_cells(room) {
            grid.block(pos.x, pos.y);
        }
        self.occupancy.insert(room, grid.clone());
        grid
    }
}

/// Whether a pending construction site blocks movement once placed.
fn site_blocks(kind: &StructureKind) -> bool {
    !matches!(
        kind,
        StructureKind::Road | StructureKind::Container | StructureKind::Rampart { .. }
    )
}

/// Build the structure grid for one room from the current world snapshot.
///
/// Impassable cells are stamped after road costs so that a road under a
/// blocking structure stays blocked.
pub fn build_structure_grid(
    world: &dyn WorldView,
    room:  RoomName,
    cfg:   &TravelConfig,
) -> CostGrid {
    let mut grid = CostGrid::new();
    let mut blocked: Vec<Position> = Vec::new();

    for s in world.structures(room) {
        match s.kind {
            StructureKind::Road => grid.set(s.pos.x, s.pos.y, cfg.road_cost),
            StructureKind::Container => grid.set(s.pos.x, s.pos.y, cfg.container_cost),
            StructureKind::Rampart { friendly, public } => {
                if !friendly && !public {
                    blocked.push(s.pos);
                }
            }
            StructureKind::Blocking => blocked.push(s.pos),
        }
    }
    for s in world.construction_sites(room) {
        if site_blocks(&s.kind) {
            blocked.push(s.pos);
        }
    }
    for pos in blocked {
        grid.block(pos.x, pos.y);
    }
    grid
}
