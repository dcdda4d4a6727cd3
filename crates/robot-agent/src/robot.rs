//! The five-operation state machine driving a single robot.

use robot_core::{Facing, Grid, Position};

use crate::{AgentError, AgentResult, Pose};

/// A single robot confined to a bounded grid.
///
/// Starts unplaced.  Every operation validates fully before committing, so a
/// failed call leaves the state bit-for-bit as it was; there is no partial
/// mutation to roll back.
///
/// One `Robot` is owned by exactly one controlling session.  Concurrent
/// sessions each own their own instance; there is no cross-instance
/// coordination.
#[derive(Clone, Debug)]
pub struct Robot {
    grid: Grid,
    pose: Option<Pose>,
}

impl Robot {
    /// A new, unplaced robot on `grid`.
    pub fn new(grid: Grid) -> Self {
        Self { grid, pose: None }
    }

    /// The grid this robot is confined to.
    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// `true` once a `place` call has succeeded.
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.pose.is_some()
    }

    /// Put the robot at `position` facing `facing`.
    ///
    /// Valid whether or not the robot is already placed; re-placement
    /// overwrites the previous pose.  Fails with `OutOfBounds` when
    /// `position` is off the grid, in which case nothing changes.
    pub fn place(&mut self, position: Position, facing: Facing) -> AgentResult<()> {
        if !self.grid.contains(position) {
            return Err(AgentError::OutOfBounds(position));
        }
        self.pose = Some(Pose::new(position, facing));
        Ok(())
    }

    /// Advance one cell along the current facing.
    ///
    /// Fails with `NotPlaced` before the first successful `place`, and with
    /// `OutOfBounds` when the step would leave the grid.  A refused move
    /// leaves the robot placed at its current pose.
    pub fn move_forward(&mut self) -> AgentResult<()> {
        let pose = self.pose.as_mut().ok_or(AgentError::NotPlaced)?;
        let candidate = pose.position.offset(pose.facing.step());
        if !self.grid.contains(candidate) {
            return Err(AgentError::OutOfBounds(candidate));
        }
        pose.position = candidate;
        Ok(())
    }

    /// Rotate one quarter turn counter-clockwise.  Never fails once placed.
    pub fn turn_left(&mut self) -> AgentResult<()> {
        let pose = self.pose.as_mut().ok_or(AgentError::NotPlaced)?;
        pose.facing = pose.facing.left();
        Ok(())
    }

    /// Rotate one quarter turn clockwise.  Never fails once placed.
    pub fn turn_right(&mut self) -> AgentResult<()> {
        let pose = self.pose.as_mut().ok_or(AgentError::NotPlaced)?;
        pose.facing = pose.facing.right();
        Ok(())
    }

    /// The current pose, or `NotPlaced`.  Pure read.
    pub fn report(&self) -> AgentResult<Pose> {
        self.pose.ok_or(AgentError::NotPlaced)
    }
}
