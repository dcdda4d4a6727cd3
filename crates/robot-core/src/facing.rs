//! Compass facing with cyclic rotation.
//!
//! The four variants form a fixed cycle `[North, East, South, West]`; turning
//! is index arithmetic modulo 4 over the [`Facing::ALL`] table, so rotation
//! can never produce a value outside the enum or a partially updated facing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a facing token matches none of the four directions.
#[derive(Debug, Error)]
#[error("invalid facing {0:?} (expected NORTH, EAST, SOUTH or WEST)")]
pub struct InvalidFacing(pub String);

/// The compass direction the robot points toward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in clockwise order.  Rotation indexes into this table.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    #[inline]
    fn index(self) -> usize {
        match self {
            Facing::North => 0,
            Facing::East  => 1,
            Facing::South => 2,
            Facing::West  => 3,
        }
    }

    /// One step counter-clockwise: NORTH → WEST → SOUTH → EAST → NORTH.
    #[inline]
    pub fn left(self) -> Facing {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// One step clockwise: NORTH → EAST → SOUTH → WEST → NORTH.
    #[inline]
    pub fn right(self) -> Facing {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Unit displacement `(dx, dy)` of one forward step.
    ///
    /// North is +y, East is +x.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Facing::North => (0, 1),
            Facing::East  => (1, 0),
            Facing::South => (0, -1),
            Facing::West  => (-1, 0),
        }
    }

    /// Canonical upper-case token, as rendered by `REPORT`.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::East  => "EAST",
            Facing::South => "SOUTH",
            Facing::West  => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facing {
    type Err = InvalidFacing;

    /// Case-insensitive: `"north"`, `"North"` and `"NORTH"` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| s.eq_ignore_ascii_case(f.as_str()))
            .ok_or_else(|| InvalidFacing(s.to_string()))
    }
}
