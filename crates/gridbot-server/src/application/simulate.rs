//! The request-scoped simulation pipeline.
//!
//! Both transport shells funnel into [`run_simulation`]: the HTTP handler
//! after decoding a JSON body, the CLI after assembling the same request
//! from its prompts. Every invocation builds a fresh `Room`/`Robot` pair
//! from the request payload; no state is shared across requests, so
//! concurrent sessions can never corrupt each other.
//!
//! The validation order is fixed and observable through the returned error:
//! room size first, then the start position against the bounds, then the
//! start coordinates and heading, then the route itself, and finally the
//! walk. A request that is wrong in several ways reports the earliest stage.

use thiserror::Error;

use gridbot_core::{parse_route, InstructionError, Robot, RobotError, Room, RoomError};

use crate::domain::messages::SimulationRequest;

/// Errors from any stage of the simulation pipeline.
///
/// Transparent wrappers: the domain error messages are already
/// client-ready, so no extra wording is layered on top.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// The requested room is invalid.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// The robot's starting state or movement failed validation.
    #[error(transparent)]
    Robot(#[from] RobotError),

    /// The instruction route failed validation.
    #[error(transparent)]
    Route(#[from] InstructionError),
}

/// Runs one complete simulation and returns the final robot state.
///
/// # Errors
///
/// Returns the first failing stage as a [`SimulationError`]; the message is
/// suitable for returning to the client verbatim.
pub fn run_simulation(request: &SimulationRequest) -> Result<Robot, SimulationError> {
    let room = Room::new(request.room.width, request.room.depth)?;

    // Bounds come before the value checks, mirroring the public contract:
    // a start on the far edge reports out-of-bounds even if the heading is
    // also bad.
    Robot::validate_within(request.robot.width, request.robot.depth, &room)?;
    let orientation = Robot::validate_start(
        request.robot.width,
        request.robot.depth,
        &request.robot.orientation,
    )?;

    parse_route(&request.instructions)?;

    let mut robot = Robot::new(request.robot.width, request.robot.depth, orientation);
    robot.follow_route(&request.instructions, room.width, room.depth)?;

    Ok(robot)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
