//! `robot-command` — the text command boundary.
//!
//! Translates raw console lines into typed [`Command`]s so the state machine
//! in `robot-agent` only ever sees integral coordinates and a valid
//! [`Facing`][robot_core::Facing].  Malformed input (wrong argument count,
//! non-integer coordinates, unknown keywords) is rejected here with a typed
//! [`ParseError`] and never reaches the robot.
//!
//! # Crate layout
//!
//! | Module      | Contents                          |
//! |-------------|-----------------------------------|
//! | [`command`] | `Command` enum (the full grammar) |
//! | [`parse`]   | `parse()` line parser             |
//! | [`error`]   | `ParseError`, `ParseResult<T>`    |

pub mod command;
pub mod error;
pub mod parse;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::{ParseError, ParseResult};
pub use parse::parse;
