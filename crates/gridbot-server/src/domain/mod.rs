//! Domain layer for gridbot-server.
//!
//! Pure types only: the JSON request/response messages and the runtime
//! configuration struct. Nothing in here touches sockets, stdin, or the
//! async runtime, so all of it is testable with plain unit tests.

pub mod config;
pub mod messages;

pub use config::ServerConfig;
pub use messages::{RobotSpec, RoomSpec, SimulationRequest, SimulationResponse};
