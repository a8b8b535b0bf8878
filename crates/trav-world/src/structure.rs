//! The minimal structure taxonomy the cost-grid rules need.

use trav_core::Position;

/// What kind of obstacle (or non-obstacle) a structure is for pathing.
///
/// Anything whose only pathing property is "you cannot walk through it" is
/// [`Blocking`](StructureKind::Blocking); the three special cases each change
/// the traversal cost rules.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructureKind {
    /// A road surface — reduces traversal cost.
    Road,
    /// A walkable container — passable at a small penalty.
    Container,
    /// A defensive barrier.  Flags are resolved from the requesting player's
    /// perspective by the world layer: `friendly` barriers and `public` ones
    /// are walkable, all others block.
    Rampart { friendly: bool, public: bool },
    /// Any other structure — impassable.
    Blocking,
}

/// A static obstacle (or surface) occupying one cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    pub pos:  Position,
    pub kind: StructureKind,
}

impl Structure {
    #[inline]
    pub fn new(pos: Position, kind: StructureKind) -> Self {
        Self { pos, kind }
    }
}
