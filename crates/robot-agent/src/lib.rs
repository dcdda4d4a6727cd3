//! `robot-agent` — the grid robot state machine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`state`] | `Pose`, the observable placed state        |
//! | [`robot`] | `Robot`, the five-operation state machine  |
//! | [`error`] | `AgentError`, `AgentResult<T>`             |
//!
//! # State model
//!
//! A robot is either **unplaced** (`pose == None`, the initial state) or
//! **placed** at a grid cell with a facing.  All five operations are
//! synchronous O(1) transitions:
//!
//! 1. `place` validates the target cell and overwrites the pose.  It is the
//!    only way out of the unplaced state and may re-place at any time.
//! 2. `move_forward` steps one cell along the facing, refusing (and leaving
//!    the pose untouched) when the step would leave the grid.
//! 3. `turn_left` / `turn_right` rotate the facing one quarter turn; they
//!    cannot fail once the robot is placed.
//! 4. `report` reads the pose without mutating anything.
//!
//! Failure is always a checked `Err`, never a panic, and a failed operation
//! leaves the robot's full state exactly as it was.

pub mod error;
pub mod robot;
pub mod state;


pub use error::{AgentError, AgentResult};
pub use robot::Robot;
pub use state::Pose;
