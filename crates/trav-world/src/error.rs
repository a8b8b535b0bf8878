use thiserror::Error;
use trav_core::RoomName;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("room {0} does not exist on the world map")]
    UnknownRoom(RoomName),

    #[error("no room route from {from} to {to}")]
    NoRoute { from: RoomName, to: RoomName },
}

pub type WorldResult<T> = Result<T, WorldError>;
