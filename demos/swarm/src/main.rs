//! swarm — smallest example for the trav grid-travel engine.
//!
//! Sends a handful of agents across a 3×1 strip of rooms to a common
//! gathering point, with a wall maze in the middle room and every agent
//! registered as an obstacle for the others.  Prints one line per tick of
//! observer output plus a final position table.

use std::time::Instant;

use anyhow::Result;

use trav_core::{AgentId, Direction, Position, RoomName};
use trav_engine::{TravelObserver, TravelOptions, TravelOutcome, TravelStore, Traveler};
use trav_world::{GridWorld, Movable, MoveStatus, TerrainKind};

const AGENT_COUNT: u32 = 6;
const MAX_TICKS:   u64 = 200;

// ── Agent ─────────────────────────────────────────────────────────────────────

struct Walker {
    id:  AgentId,
    pos: Position,
}

impl Movable for Walker {
    fn id(&self) -> AgentId {
        self.id
    }

    fn pos(&self) -> Position {
        self.pos
    }

    fn can_move(&self) -> bool {
        true
    }

    fn move_in(&mut self, dir: Direction) -> MoveStatus {
        match self.pos.step_world(dir) {
            Some(next) => {
                self.pos = next;
                MoveStatus::Ok
            }
            None => MoveStatus::Invalid,
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct PrintObserver {
    plans: u32,
    ops:   u64,
}

impl TravelObserver for PrintObserver {
    fn on_path_planned(
        &mut self,
        agent:       AgentId,
        origin:      Position,
        destination: Position,
        ops_used:    u32,
        elapsed_ms:  f64,
        incomplete:  bool,
    ) {
        self.plans += 1;
        self.ops += ops_used as u64;
        println!(
            "  plan agent={agent} {origin} -> {destination} ops={ops_used} \
             {elapsed_ms:.2}ms{}",
            if incomplete { " (incomplete)" } else { "" }
        );
    }

    fn on_route_failed(&mut self, origin: RoomName, destination: RoomName) {
        println!("  no room route {origin} -> {destination}");
    }

    fn on_detour_failed(&mut self, agent: AgentId) {
        println!("  detour failed for agent={agent}");
    }
}

// ── World setup ───────────────────────────────────────────────────────────────

/// Three rooms in a row; the middle one has a wall across most of its width.
fn build_world() -> GridWorld {
    let mut world = GridWorld::new();
    world.add_rooms(0..=2, 0..=0);

    let terrain = &mut world.room_mut(RoomName::new(1, 0)).unwrap().terrain;
    terrain.fill_col(25, TerrainKind::Wall);
    for y in 20..=24 {
        terrain.set(25, y, TerrainKind::Plain);
    }
    world
}

/// Mirror every agent's position into the world's occupancy lists.
fn publish_occupancy(world: &mut GridWorld, walkers: &[Walker]) {
    let rooms: Vec<RoomName> = (0..=2).map(|x| RoomName::new(x, 0)).collect();
    for room in rooms {
        let creeps = &mut world.room_mut(room).unwrap().creeps;
        creeps.clear();
        creeps.extend(walkers.iter().filter(|w| w.pos.room == room).map(|w| w.pos));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== swarm — trav grid-travel engine ===");

    let mut world = build_world();
    let mut traveler = Traveler::new();
    let mut store = TravelStore::new();
    let mut obs = PrintObserver::default();

    let start_room = RoomName::new(0, 0);
    let goal = Position::new(RoomName::new(2, 0), 25, 25)?;

    let mut walkers: Vec<Walker> = (0..AGENT_COUNT)
        .map(|i| {
            Ok(Walker {
                id:  AgentId(i),
                pos: Position::new(start_room, 10 + (i % 3) as u8, 10 + (i / 3) as u8)?,
            })
        })
        .collect::<Result<_>>()?;

    let t0 = Instant::now();
    let mut done_tick = None;
    for tick in 0..MAX_TICKS {
        publish_occupancy(&mut world, &walkers);

        let mut arrived = 0;
        for walker in &mut walkers {
            let outcome = traveler.travel_to(
                &mut world,
                walker,
                &mut store,
                goal,
                &TravelOptions { range: 3, ..TravelOptions::default() },
                &mut obs,
            );
            if outcome == TravelOutcome::Arrived {
                arrived += 1;
            }
        }

        if arrived == walkers.len() {
            done_tick = Some(tick);
            break;
        }
        world.advance_tick();
    }
    let elapsed = t0.elapsed();

    println!();
    match done_tick {
        Some(tick) => println!("All agents gathered by tick {tick}"),
        None => println!("Stopped after {MAX_TICKS} ticks"),
    }
    println!(
        "Plans: {}  |  Search ops: {}  |  Wall time: {:.3} s",
        obs.plans,
        obs.ops,
        elapsed.as_secs_f64()
    );
    println!();
    println!("{:<8} {:<14} {:<6}", "Agent", "Position", "Range");
    println!("{}", "-".repeat(30));
    for walker in &walkers {
        println!(
            "{:<8} {:<14} {:<6}",
            walker.id.0,
            walker.pos.to_string(),
            walker.pos.range_to(goal).map_or("-".into(), |r| r.to_string()),
        );
    }

    Ok(())
}
