//! Unit tests for trav-world.

use trav_core::{Position, RoomName};

use crate::{
    AStarSearch, CostGrid, GridHint, GridWorld, RoomCost, RoomRouter, RouteSearch, SearchGoal,
    SearchSettings, TerrainKind, TileSearch, WorldError, WorldView,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn room(x: i16, y: i16) -> RoomName {
    RoomName::new(x, y)
}

fn pos(r: RoomName, x: u8, y: u8) -> Position {
    Position::new(r, x, y).unwrap()
}

/// A single open 50×50 room at (0,0).
fn open_world() -> GridWorld {
    let mut world = GridWorld::new();
    world.add_room(room(0, 0));
    world
}

fn search(
    world:  &GridWorld,
    origin: Position,
    goal:   SearchGoal,
    settings: &SearchSettings,
) -> crate::SearchResult {
    AStarSearch
        .search(world, origin, &[goal], settings, &mut |_| GridHint::Terrain)
        .unwrap()
}

// ── CostGrid ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost_grid {
    use super::*;

    #[test]
    fn starts_zeroed_and_stores_values() {
        let mut grid = CostGrid::new();
        assert_eq!(grid.get(0, 0), 0);
        assert_eq!(grid.get(49, 49), 0);
        grid.set(10, 20, 7);
        grid.block(3, 4);
        assert_eq!(grid.get(10, 20), 7);
        assert_eq!(grid.get(3, 4), CostGrid::IMPASSABLE);
    }

    #[test]
    fn clone_is_independent() {
        let mut grid = CostGrid::new();
        grid.set(5, 5, 9);
        let mut copy = grid.clone();
        copy.set(5, 5, 1);
        assert_eq!(grid.get(5, 5), 9);
        assert_eq!(copy.get(5, 5), 1);
    }
}

// ── AStarSearch ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use super::*;

    #[test]
    fn straight_line_in_open_room() {
        let world = open_world();
        let origin = pos(room(0, 0), 10, 10);
        let goal = SearchGoal::at(pos(room(0, 0), 10, 15));

        let result = search(&world, origin, goal, &SearchSettings::default());
        assert!(!result.incomplete);
        assert_eq!(result.path.len(), 5);
        // Monotonically increasing y, ending at the goal.
        for (i, cell) in result.path.iter().enumerate() {
            assert_eq!(cell.y, 11 + i as u8);
        }
        assert_eq!(*result.path.last().unwrap(), goal.pos);
    }

    #[test]
    fn goal_range_stops_short() {
        let world = open_world();
        let origin = pos(room(0, 0), 10, 10);
        let goal = SearchGoal { pos: pos(room(0, 0), 10, 20), range: 3 };

        let result = search(&world, origin, goal, &SearchSettings::default());
        assert!(!result.incomplete);
        assert_eq!(result.path.len(), 7);
        let end = *result.path.last().unwrap();
        assert_eq!(end.range_to(goal.pos), Some(3));
    }

    #[test]
    fn already_at_goal_is_empty_and_complete() {
        let world = open_world();
        let origin = pos(room(0, 0), 10, 10);
        let result = search(
            &world,
            origin,
            SearchGoal { pos: origin, range: 0 },
            &SearchSettings::default(),
        );
        assert!(!result.incomplete);
        assert!(result.path.is_empty());
        assert_eq!(result.ops_used, 0);
    }

    #[test]
    fn budget_exhaustion_is_incomplete_not_error() {
        let world = open_world();
        let origin = pos(room(0, 0), 0, 0);
        let goal = SearchGoal::at(pos(room(0, 0), 49, 49));
        let settings = SearchSettings { max_ops: 5, ..SearchSettings::default() };

        let result = search(&world, origin, goal, &settings);
        assert!(result.incomplete);
        assert!(result.ops_used <= 5);
        // Best-effort path still makes progress toward the goal.
        assert!(!result.path.is_empty());
    }

    #[test]
    fn walls_force_a_detour() {
        let mut world = open_world();
        // Wall row at y=12 with a single gap at x=30.
        let terrain = &mut world.room_mut(room(0, 0)).unwrap().terrain;
        terrain.fill_row(12, TerrainKind::Wall);
        terrain.set(30, 12, TerrainKind::Plain);

        let origin = pos(room(0, 0), 10, 10);
        let goal = SearchGoal::at(pos(room(0, 0), 10, 15));
        let result = search(&world, origin, goal, &SearchSettings::default());

        assert!(!result.incomplete);
        assert!(result.path.iter().any(|c| c.x == 30 && c.y == 12));
    }

    #[test]
    fn grid_values_override_terrain() {
        let world = open_world();
        let origin = pos(room(0, 0), 10, 10);
        let goal = SearchGoal::at(pos(room(0, 0), 10, 15));

        // Block the direct column with a custom grid; the path must bend.
        let mut grid = CostGrid::new();
        for y in 11..=14 {
            grid.block(10, y);
        }
        let result = AStarSearch
            .search(
                &world,
                origin,
                &[goal],
                &SearchSettings::default(),
                &mut |_| GridHint::Grid(grid.clone()),
            )
            .unwrap();
        assert!(!result.incomplete);
        assert!(result.path.iter().all(|c| !(c.x == 10 && (11..=14).contains(&c.y))));
        assert_eq!(*result.path.last().unwrap(), goal.pos);
    }

    #[test]
    fn swamp_cost_prefers_longer_plain_path() {
        let mut world = open_world();
        // Swamp band across the direct route, except a plain corridor at x=13.
        let terrain = &mut world.room_mut(room(0, 0)).unwrap().terrain;
        for x in 0..13 {
            terrain.set(x, 12, TerrainKind::Swamp);
        }

        let origin = pos(room(0, 0), 10, 10);
        let goal = SearchGoal::at(pos(room(0, 0), 10, 14));
        let settings = SearchSettings { max_ops: 20_000, plain_cost: 1, swamp_cost: 10 };
        let result = search(&world, origin, goal, &settings);

        assert!(!result.incomplete);
        assert!(result.path.iter().all(|c| !(c.y == 12 && c.x < 13)));
    }

    #[test]
    fn crosses_room_borders() {
        let mut world = GridWorld::new();
        world.add_rooms(0..=1, 0..=0);

        let origin = pos(room(0, 0), 45, 25);
        let goal = SearchGoal::at(pos(room(1, 0), 5, 25));
        let result = search(&world, origin, goal, &SearchSettings::default());

        assert!(!result.incomplete);
        assert_eq!(*result.path.last().unwrap(), goal.pos);
        assert!(result.path.iter().any(|c| c.room == room(0, 0)));
        assert!(result.path.iter().any(|c| c.room == room(1, 0)));
    }

    #[test]
    fn denied_room_is_never_entered() {
        let mut world = GridWorld::new();
        world.add_rooms(0..=1, 0..=0);

        let origin = pos(room(0, 0), 45, 25);
        let goal = SearchGoal::at(pos(room(1, 0), 5, 25));
        let result = AStarSearch
            .search(
                &world,
                origin,
                &[goal],
                &SearchSettings { max_ops: 3_000, ..SearchSettings::default() },
                &mut |r| if r == room(1, 0) { GridHint::Deny } else { GridHint::Terrain },
            )
            .unwrap();

        assert!(result.incomplete);
        assert!(result.path.iter().all(|c| c.room == room(0, 0)));
    }

    #[test]
    fn multiple_goals_pick_the_nearest() {
        let world = open_world();
        let origin = pos(room(0, 0), 10, 10);
        let goals = [
            SearchGoal::at(pos(room(0, 0), 40, 40)),
            SearchGoal::at(pos(room(0, 0), 10, 13)),
        ];
        let result = AStarSearch
            .search(&world, origin, &goals, &SearchSettings::default(), &mut |_| {
                GridHint::Terrain
            })
            .unwrap();
        assert!(!result.incomplete);
        assert_eq!(*result.path.last().unwrap(), goals[1].pos);
    }

    #[test]
    fn unknown_origin_room_is_an_error() {
        let world = GridWorld::new();
        let origin = pos(room(0, 0), 10, 10);
        let result = AStarSearch.search(
            &world,
            origin,
            &[SearchGoal::at(pos(room(0, 0), 10, 15))],
            &SearchSettings::default(),
            &mut |_| GridHint::Terrain,
        );
        assert_eq!(result.unwrap_err(), WorldError::UnknownRoom(room(0, 0)));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let world = open_world();
        let origin = pos(room(0, 0), 3, 44);
        let goal = SearchGoal::at(pos(room(0, 0), 41, 7));
        let a = search(&world, origin, goal, &SearchSettings::default());
        let b = search(&world, origin, goal, &SearchSettings::default());
        assert_eq!(a.path, b.path);
        assert_eq!(a.ops_used, b.ops_used);
    }
}

// ── RoomRouter ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod room_router {
    use super::*;

    /// 5×1 corridor of rooms, x = 0..=4.
    fn corridor() -> GridWorld {
        let mut world = GridWorld::new();
        world.add_rooms(0..=4, 0..=0);
        world
    }

    #[test]
    fn routes_along_a_corridor() {
        let world = corridor();
        let steps = RoomRouter
            .route(&world, room(0, 0), room(4, 0), &mut |_| RoomCost::Open(1))
            .unwrap();
        assert_eq!(
            steps,
            vec![room(0, 0), room(1, 0), room(2, 0), room(3, 0), room(4, 0)]
        );
    }

    #[test]
    fn trivial_route_is_the_single_room() {
        let world = corridor();
        let steps = RoomRouter
            .route(&world, room(2, 0), room(2, 0), &mut |_| RoomCost::Open(1))
            .unwrap();
        assert_eq!(steps, vec![room(2, 0)]);
    }

    #[test]
    fn closed_room_severs_the_route() {
        let world = corridor();
        let result = RoomRouter.route(&world, room(0, 0), room(4, 0), &mut |r| {
            if r == room(2, 0) { RoomCost::Closed } else { RoomCost::Open(1) }
        });
        assert_eq!(
            result.unwrap_err(),
            WorldError::NoRoute { from: room(0, 0), to: room(4, 0) }
        );
    }

    #[test]
    fn cost_bias_picks_the_cheaper_row() {
        // Two parallel corridors joined at both ends; the y=1 row is cheap.
        let mut world = GridWorld::new();
        world.add_rooms(0..=4, 0..=1);
        let steps = RoomRouter
            .route(&world, room(0, 0), room(4, 0), &mut |r| {
                RoomCost::Open(if r.y == 1 { 1 } else { 10 })
            })
            .unwrap();
        assert!(steps[1..steps.len() - 1].iter().all(|r| r.y == 1));
    }
}

// ── GridWorld ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_world {
    use super::*;

    #[test]
    fn exits_require_both_rooms_to_exist() {
        let mut world = GridWorld::new();
        world.add_rooms(0..=1, 0..=0);
        assert_eq!(world.exits(room(0, 0)), vec![room(1, 0)]);
        assert!(world.exits(room(5, 5)).is_empty());
    }

    #[test]
    fn update_room_status_tracks_hostile_owners() {
        let mut world = GridWorld::new();
        world.add_room(room(0, 0)).hostile_owner = true;
        assert!(!world.is_hostile(room(0, 0)));

        world.update_room_status(room(0, 0));
        assert!(world.is_hostile(room(0, 0)));

        // Owner left: the next visit clears the mark.
        world.room_mut(room(0, 0)).unwrap().hostile_owner = false;
        world.update_room_status(room(0, 0));
        assert!(!world.is_hostile(room(0, 0)));
    }

    #[test]
    fn tick_advances() {
        let mut world = GridWorld::new();
        let t0 = world.tick();
        world.advance_tick();
        assert_eq!(world.tick(), t0.offset(1));
    }
}
