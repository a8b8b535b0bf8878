//! `trav-engine` — the travel engine proper: route planning, cost-matrix
//! caching, cached-route following, and the per-agent travel state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `TravelConfig` — engine tuning                             |
//! | [`options`]  | `TravelOptions` — per-call overrides                       |
//! | [`matrix`]   | `MatrixCache` — tick-scoped cost grids                     |
//! | [`route`]    | room-graph route planning                                  |
//! | [`planner`]  | tile-level planning with route restriction and fallbacks   |
//! | [`detour`]   | local detours around cached-route obstructions             |
//! | [`cache`]    | `CachedRoute` tables and per-destination cacheability      |
//! | [`memory`]   | `TravelMemory` / `TravelStore` — per-agent trip state      |
//! | [`engine`]   | `Traveler` — the state machine driving it all              |
//! | [`observer`] | `TravelObserver` diagnostic hooks                          |
//! | [`error`]    | `PlanError`, `PlanResult<T>`                               |
//!
//! # Quick start
//!
//! ```no_run
//! use trav_engine::{NoopObserver, TravelOptions, TravelStore, Traveler};
//! # fn demo(world: &mut trav_world::GridWorld,
//! #         agent: &mut impl trav_world::Movable,
//! #         destination: trav_core::Position) {
//! let mut traveler = Traveler::new();
//! let mut store = TravelStore::new();
//! // Every tick, for every traveling agent:
//! let outcome = traveler.travel_to(
//!     world,
//!     agent,
//!     &mut store,
//!     destination,
//!     &TravelOptions::default(),
//!     &mut NoopObserver,
//! );
//! # let _ = outcome;
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod detour;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod memory;
pub mod observer;
pub mod options;
pub mod planner;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cache::{CacheDecision, CachedRoute, RouteStep, route_cachable};
pub use config::TravelConfig;
pub use detour::{DETOUR_LOOKAHEAD, find_detour};
pub use engine::{TravelOutcome, Traveler};
pub use error::{PlanError, PlanResult};
pub use matrix::MatrixCache;
pub use memory::{TravelMemory, TravelStore};
pub use observer::{NoopObserver, TravelObserver};
pub use options::TravelOptions;
pub use planner::{PlannedPath, find_travel_path};
pub use route::{RoomRoute, find_route};
