//! The placed robot's observable state.

use std::fmt;

use robot_core::{Facing, Position};

/// Position and facing of a placed robot.
///
/// A `Pose` only exists while the robot is placed; [`Robot`][crate::Robot]
/// stores `Option<Pose>` so an unplaced robot has no position or facing to
/// misread.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Position,
    pub facing:   Facing,
}

impl Pose {
    #[inline]
    pub fn new(position: Position, facing: Facing) -> Self {
        Self { position, facing }
    }
}

impl fmt::Display for Pose {
    /// The `REPORT` string: `"x,y,FACING"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.position, self.facing)
    }
}
