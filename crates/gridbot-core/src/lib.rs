//! # gridbot-core
//!
//! Domain library for the grid robot simulator: the room the robot moves in,
//! the robot itself, and the instruction language that drives it.
//!
//! This crate is used by every transport shell (HTTP, CLI). It has zero
//! dependencies on I/O, async runtimes, or web frameworks, so the whole
//! movement engine can be exercised in plain unit tests.
//!
//! The pieces:
//!
//! - **`domain::room`** – The bounded grid: `width` columns × `depth` rows,
//!   both strictly positive. An invalid room is rejected at construction and
//!   never exists as a value.
//!
//! - **`domain::robot`** – The robot's position and heading, starting-state
//!   validation, and the movement engine that walks an instruction route
//!   against the room bounds. Forward motion is clamped at walls, never an
//!   error.
//!
//! - **`domain::instruction`** – The closed instruction set (`L`, `R`, `F`)
//!   and the parser that turns a raw route string into typed commands,
//!   rejecting anything outside the set at the boundary.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `gridbot_core::Robot` instead of `gridbot_core::domain::robot::Robot`.
pub use domain::instruction::{parse_route, Instruction, InstructionError};
pub use domain::robot::{Orientation, Robot, RobotError};
pub use domain::room::{Room, RoomError};
