//! The eight intercardinal movement directions.
//!
//! Directions are numbered 1–8 clockwise from `Top` — the code an encoded
//! path stores per step.  Code 0 ("stationary") and anything above 8 are not
//! directions; [`Direction::from_u8`] returns `None` for them.

/// A single-cell movement direction.
///
/// The discriminants are the on-wire codes used by [`EncodedPath`]
/// [crate::EncodedPath]; they are stable and must not be reordered.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Top         = 1,
    TopRight    = 2,
    Right       = 3,
    BottomRight = 4,
    Bottom      = 5,
    BottomLeft  = 6,
    Left        = 7,
    TopLeft     = 8,
}

/// Cell offsets indexed by `code - 1`, matching the discriminant order.
const OFFSETS: [(i8, i8); 8] = [
    (0, -1),  // Top
    (1, -1),  // TopRight
    (1, 0),   // Right
    (1, 1),   // BottomRight
    (0, 1),   // Bottom
    (-1, 1),  // BottomLeft
    (-1, 0),  // Left
    (-1, -1), // TopLeft
];

impl Direction {
    /// All eight directions in code order.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    /// Decode a direction code.  Returns `None` for 0 (stationary) and any
    /// out-of-range code.
    #[inline]
    pub fn from_u8(code: u8) -> Option<Direction> {
        match code {
            1 => Some(Direction::Top),
            2 => Some(Direction::TopRight),
            3 => Some(Direction::Right),
            4 => Some(Direction::BottomRight),
            5 => Some(Direction::Bottom),
            6 => Some(Direction::BottomLeft),
            7 => Some(Direction::Left),
            8 => Some(Direction::TopLeft),
            _ => None,
        }
    }

    /// The numeric code, 1–8.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The `(dx, dy)` cell offset this direction moves by.
    #[inline]
    pub fn offset(self) -> (i8, i8) {
        OFFSETS[(self as u8 - 1) as usize]
    }

    /// The direction for a single-cell `(dx, dy)` delta, if it is one.
    pub fn from_offset(dx: i8, dy: i8) -> Option<Direction> {
        OFFSETS
            .iter()
            .position(|&o| o == (dx, dy))
            .map(|i| Direction::ALL[i])
    }

    /// The 180° opposite direction.
    #[inline]
    pub fn opposite(self) -> Direction {
        let code = self as u8;
        Direction::from_u8(if code > 4 { code - 4 } else { code + 4 })
            .unwrap_or(self)
    }
}
