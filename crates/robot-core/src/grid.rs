//! Grid cells and the bounded plane they live on.

use std::fmt;

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that a candidate step off the west or south
/// edge is representable; [`Grid::contains`] is the single bounds authority.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position displaced by `(dx, dy)`.  No bounds check.
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Position {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The bounded square plane `[0, max] × [0, max]`.
///
/// `Grid` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    max: i32,
}

impl Grid {
    /// Highest valid coordinate of the default grid (5×5, cells 0 to 4).
    pub const DEFAULT_MAX: i32 = 4;

    /// A square grid with coordinates `0..=max` on both axes.
    pub fn new(max: i32) -> Self {
        debug_assert!(max >= 0);
        Self { max }
    }

    /// Highest valid coordinate on either axis.
    #[inline]
    pub fn max(self) -> i32 {
        self.max
    }

    /// Number of cells along one side.
    #[inline]
    pub fn side(self) -> i32 {
        self.max + 1
    }

    /// `true` when `pos` lies on the grid.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        (0..=self.max).contains(&pos.x) && (0..=self.max).contains(&pos.y)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX)
    }
}
