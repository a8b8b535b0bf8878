//! Core error type.

use thiserror::Error;

use crate::pos::Position;

/// Errors from core geometry and the path codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("coordinates ({x},{y}) outside room bounds")]
    OutOfBounds { x: u8, y: u8 },

    #[error("cells {from} and {to} are not adjacent")]
    NotAdjacent { from: Position, to: Position },
}

/// Shorthand result type for `trav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
