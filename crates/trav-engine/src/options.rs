//! Per-call travel options.

use trav_core::{DestinationId, Position, RoomName};
use trav_world::{GridHint, RoomCost};

use crate::cache::CachedRoute;

/// Options for a single [`travel_to`][crate::Traveler::travel_to] call.
///
/// Everything defaults to the plainest behavior; callers override only what a
/// particular trip needs.
///
/// | Field                | Default | Effect                                      |
/// |----------------------|---------|---------------------------------------------|
/// | `range`              | 1       | arrival range around the destination        |
/// | `ignore_creeps`      | `None`  | `None` ⇒ pass through occupied cells until  |
/// |                      |         | stuck; `Some(false)` ⇒ always avoid them    |
/// | `ignore_structures`  | `false` | plan as if no structures existed            |
/// | `ignore_roads`       | `false` | plan without the road cost advantage        |
/// | `off_road`           | `false` | flat terrain costs (plain = swamp = 1)      |
/// | `prefer_highway`     | `false` | bias room routing toward highway rooms      |
/// | `allow_keeper_rooms` | `false` | do not penalize source-keeper rooms         |
/// | `allow_hostile`      | `false` | do not exclude hostile-tracked rooms        |
/// | `use_find_route`     | `None`  | `None` ⇒ decide by room distance            |
/// | `max_ops`            | `None`  | override the configured search budget       |
/// | `stuck_threshold`    | `None`  | override the configured stuck threshold     |
/// | `ignore_stuck`       | `false` | never trigger stuck recovery                |
/// | `obstacles`          | empty   | extra cells to treat as blocked             |
/// | `route_callback`     | `None`  | per-room route cost override                |
/// | `room_callback`      | `None`  | per-room tile cost-grid override            |
/// | `cache_predicate`    | `None`  | decides cacheability per destination        |
/// | `cached_route`       | `None`  | precomputed route table to follow           |
pub struct TravelOptions<'a> {
    pub range:              u32,
    pub ignore_creeps:      Option<bool>,
    pub ignore_structures:  bool,
    pub ignore_roads:       bool,
    pub off_road:           bool,
    pub prefer_highway:     bool,
    pub allow_keeper_rooms: bool,
    pub allow_hostile:      bool,
    pub use_find_route:     Option<bool>,
    pub max_ops:            Option<u32>,
    pub stuck_threshold:    Option<u32>,
    pub ignore_stuck:       bool,
    pub obstacles:          Vec<Position>,
    pub route_callback:     Option<&'a dyn Fn(RoomName) -> Option<RoomCost>>,
    pub room_callback:      Option<&'a dyn Fn(RoomName) -> Option<GridHint>>,
    pub cache_predicate:    Option<&'a dyn Fn(DestinationId) -> bool>,
    pub cached_route:       Option<&'a CachedRoute>,
}

impl Default for TravelOptions<'_> {
    fn default() -> Self {
        Self {
            range:              1,
            ignore_creeps:      None,
            ignore_structures:  false,
            ignore_roads:       false,
            off_road:           false,
            prefer_highway:     false,
            allow_keeper_rooms: false,
            allow_hostile:      false,
            use_find_route:     None,
            max_ops:            None,
            stuck_threshold:    None,
            ignore_stuck:       false,
            obstacles:          Vec::new(),
            route_callback:     None,
            room_callback:      None,
            cache_predicate:    None,
            cached_route:       None,
        }
    }
}
