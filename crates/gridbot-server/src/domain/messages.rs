//! JSON message types for the `/api/robot` endpoint.
//!
//! One request carries everything a simulation needs (the room, the robot's
//! starting state, and the instruction route) and one response shape covers
//! both outcomes:
//!
//! ```json
//! {"room":{"width":5,"depth":5},
//!  "robot":{"width":1,"depth":2,"orientation":"N"},
//!  "instructions":"RFRFFRFRF"}
//! ```
//!
//! ```json
//! {"error":false,"message":"","report":{"width":1,"depth":3,"orientation":"N"}}
//! {"error":true,"message":"room width must be at least 1 (got 0)"}
//! ```
//!
//! The request keeps raw integers and a plain heading string rather than
//! domain types: a zero-sized room or an unknown heading must surface as a
//! structured validation message, not as a serde decode failure.

use gridbot_core::Robot;
use serde::{Deserialize, Serialize};

/// Requested room dimensions, exactly as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    /// Requested number of columns.
    pub width: i64,
    /// Requested number of rows.
    pub depth: i64,
}

/// Requested robot starting state, exactly as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotSpec {
    /// Requested starting column (0-indexed).
    pub width: i64,
    /// Requested starting row (0-indexed).
    pub depth: i64,
    /// Heading symbol: `"N"`, `"E"`, `"S"`, or `"W"`.
    pub orientation: String,
}

/// A complete simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// The room to simulate in.
    pub room: RoomSpec,
    /// The robot's starting state.
    pub robot: RobotSpec,
    /// Route string of `L`/`R`/`F` symbols.
    pub instructions: String,
}

/// The response body for every outcome, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResponse {
    /// `true` when the request was rejected.
    pub error: bool,
    /// Human-readable failure description; empty on success.
    pub message: String,
    /// Final robot state; present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Robot>,
}

impl SimulationResponse {
    /// A success response carrying the final robot state.
    pub fn report(robot: Robot) -> Self {
        Self {
            error: false,
            message: String::new(),
            report: Some(robot),
        }
    }

    /// A failure response carrying the validation message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            report: None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
