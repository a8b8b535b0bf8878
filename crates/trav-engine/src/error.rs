//! Engine error type.

use thiserror::Error;
use trav_core::CoreError;
use trav_world::WorldError;

/// Errors surfaced by the planning layer.
///
/// Routine planning failures (budget exhaustion, unreachable goals) are not
/// errors; they come back as incomplete results or `NoPathFound` outcomes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanError {
    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("path encoding error: {0}")]
    Codec(#[from] CoreError),
}

pub type PlanResult<T> = Result<T, PlanError>;
