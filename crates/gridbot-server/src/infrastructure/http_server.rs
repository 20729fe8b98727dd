//! HTTP shell: the axum router and listener for `POST /api/robot`.
//!
//! A deliberately thin layer: decode the body, run the simulation pipeline,
//! encode the outcome. Every request is self-contained: the room and robot
//! live only for the duration of the handler call, so concurrent requests
//! share nothing.
//!
//! Status codes: `201 Created` with the final report on success,
//! `400 Bad Request` with `{"error":true,"message":...}` for any decode or
//! validation failure.

use anyhow::Context;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::application::run_simulation;
use crate::domain::config::ServerConfig;
use crate::domain::messages::{SimulationRequest, SimulationResponse};

/// Fixed message returned for request bodies that fail to decode.
const DECODE_FAILURE_MESSAGE: &str = "could not parse incoming data";

/// Builds the application router.
///
/// Kept separate from [`run_server`] so tests can drive the router in
/// process (via `tower::ServiceExt::oneshot`) without binding a socket.
pub fn router() -> Router {
    Router::new().route("/api/robot", post(handle_robot))
}

/// Decodes one simulation request, runs it, and encodes the outcome.
///
/// The body is decoded by hand rather than through an extractor so that
/// malformed JSON produces the same structured response shape as a
/// validation failure, instead of a framework default.
async fn handle_robot(body: Bytes) -> (StatusCode, Json<SimulationResponse>) {
    let request: SimulationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("rejecting undecodable request body: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(SimulationResponse::failure(DECODE_FAILURE_MESSAGE)),
            );
        }
    };

    debug!(
        "received simulation request: room {}x{}, start ({}, {}, {}), route '{}'",
        request.room.width,
        request.room.depth,
        request.robot.width,
        request.robot.depth,
        request.robot.orientation,
        request.instructions
    );

    match run_simulation(&request) {
        Ok(robot) => (
            StatusCode::CREATED,
            Json(SimulationResponse::report(robot)),
        ),
        Err(e) => {
            warn!("rejecting simulation request: {e}");
            (
                StatusCode::BAD_REQUEST,
                Json(SimulationResponse::failure(e.to_string())),
            )
        }
    }
}

/// Binds the listener and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, missing
/// permission), the one failure that is fatal to the process in server
/// mode, or if the server loop terminates abnormally.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    info!("gridbot server listening on {}", config.bind_addr);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated abnormally")?;

    info!("gridbot server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => tracing::error!("failed to listen for Ctrl-C signal: {e}"),
    }
}
