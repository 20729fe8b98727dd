//! Domain layer: pure business-logic types with no I/O dependencies.
//!
//! Everything in here is synchronous and allocation-light. The only mutable
//! state is the robot itself, which is owned by exactly one session and
//! mutated in place by the movement engine.

pub mod instruction;
pub mod robot;
pub mod room;

pub use instruction::{parse_route, Instruction, InstructionError};
pub use robot::{Orientation, Robot, RobotError};
pub use room::{Room, RoomError};
