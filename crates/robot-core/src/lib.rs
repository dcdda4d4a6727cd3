//! `robot-core` — foundational types for the grid robot simulator.
//!
//! This crate is a dependency of every other `robot-*` crate.  It has no
//! `robot-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`facing`] | `Facing` compass enum, `InvalidFacing`        |
//! | [`grid`]   | `Position`, `Grid` and its bounds predicate   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod facing;
pub mod grid;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use facing::{Facing, InvalidFacing};
pub use grid::{Grid, Position};
