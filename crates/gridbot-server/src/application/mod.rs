//! Application layer for gridbot-server.
//!
//! One job: run the ordered simulation pipeline that both transport shells
//! share. The functions here are pure with respect to I/O (no sockets, no
//! async, no task spawning), which keeps the whole request flow unit-testable
//! without a listener.

pub mod simulate;

pub use simulate::{run_simulation, SimulationError};
