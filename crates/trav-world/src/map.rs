//! `GridWorld` — an in-memory [`WorldView`] implementation.
//!
//! Backs the test suites and serves as the reference for hosts writing their
//! own adapter.  Rooms are added explicitly; adjacency is implied by
//! existence (two existing rooms sharing a border are connected).

use rustc_hash::{FxHashMap, FxHashSet};
use trav_core::{Position, RoomName, Tick};

use crate::structure::Structure;
use crate::terrain::RoomTerrain;
use crate::view::WorldView;

/// Mutable per-room state.
#[derive(Default)]
pub struct RoomData {
    pub terrain:  RoomTerrain,
    pub structures: Vec<Structure>,
    pub sites:    Vec<Structure>,
    pub creeps:   Vec<Position>,
    pub observed: bool,
    /// `true` if this room's controller is held by a hostile player —
    /// what [`WorldView::update_room_status`] records on entry.
    pub hostile_owner: bool,
}

/// An in-memory world: a sparse map of rooms plus persistent hostile-room
/// tracking and a tick counter.
#[derive(Default)]
pub struct GridWorld {
    rooms:   FxHashMap<RoomName, RoomData>,
    hostile: FxHashSet<RoomName>,
    now:     Tick,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observed, all-plain room; returns it for further setup.
    pub fn add_room(&mut self, room: RoomName) -> &mut RoomData {
        self.rooms.entry(room).or_insert_with(|| RoomData {
            observed: true,
            ..RoomData::default()
        })
    }

    /// Add every room in the inclusive coordinate rectangle.
    pub fn add_rooms(&mut self, x: std::ops::RangeInclusive<i16>, y: std::ops::RangeInclusive<i16>) {
        for rx in x {
            for ry in y.clone() {
                self.add_room(RoomName::new(rx, ry));
            }
        }
    }

    pub fn room_mut(&mut self, room: RoomName) -> Option<&mut RoomData> {
        self.rooms.get_mut(&room)
    }

    /// Remove a room from the map entirely.
    pub fn remove_room(&mut self, room: RoomName) {
        self.rooms.remove(&room);
    }

    /// Directly set persistent hostile tracking (tests and host overrides).
    pub fn set_hostile(&mut self, room: RoomName, hostile: bool) {
        if hostile {
            self.hostile.insert(room);
        } else {
            self.hostile.remove(&room);
        }
    }

    /// Advance the tick generation by one.
    pub fn advance_tick(&mut self) {
        self.now = self.now.offset(1);
    }
}

impl WorldView for GridWorld {
    fn tick(&self) -> Tick {
        self.now
    }

    fn is_observed(&self, room: RoomName) -> bool {
        self.rooms.get(&room).is_some_and(|r| r.observed)
    }

    fn terrain(&self, room: RoomName) -> Option<&RoomTerrain> {
        self.rooms.get(&room).map(|r| &r.terrain)
    }

    fn structures(&self, room: RoomName) -> Vec<Structure> {
        self.rooms.get(&room).map(|r| r.structures.clone()).unwrap_or_default()
    }

    fn construction_sites(&self, room: RoomName) -> Vec<Structure> {
        self.rooms.get(&room).map(|r| r.sites.clone()).unwrap_or_default()
    }

    fn occupied_cells(&self, room: RoomName) -> Vec<Position> {
        self.rooms.get(&room).map(|r| r.creeps.clone()).unwrap_or_default()
    }

    fn exits(&self, room: RoomName) -> Vec<RoomName> {
        if !self.rooms.contains_key(&room) {
            return vec![];
        }
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .iter()
            .map(|&(dx, dy)| room.neighbor(dx, dy))
            .filter(|n| self.rooms.contains_key(n))
            .collect()
    }

    fn is_hostile(&self, room: RoomName) -> bool {
        self.hostile.contains(&room)
    }

    fn update_room_status(&mut self, room: RoomName) {
        match self.rooms.get(&room) {
            Some(data) if data.hostile_owner => {
                self.hostile.insert(room);
            }
            Some(_) => {
                self.hostile.remove(&room);
            }
            None => {}
        }
    }
}
