//! The typed command grammar.

use robot_core::{Facing, Position};

/// One fully validated console command.
///
/// `Help` and `Quit` are session commands consumed by the console loop; the
/// robot state machine never sees them.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// `PLACE <x>,<y>,<FACING>`
    Place { position: Position, facing: Facing },
    /// `MOVE`
    Move,
    /// `LEFT`
    Left,
    /// `RIGHT`
    Right,
    /// `REPORT`
    Report,
    /// `HELP`
    Help,
    /// `QUIT` or `EXIT`
    Quit,
}
