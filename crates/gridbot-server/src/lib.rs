//! gridbot-server library crate.
//!
//! The transport shells around the `gridbot-core` movement engine: an HTTP
//! endpoint and an interactive CLI session, both thin and interchangeable.
//!
//! # Architecture
//!
//! ```text
//! HTTP client / terminal user
//!         ↕
//! [gridbot-server]
//!   ├── domain/           Pure types: request/response messages, ServerConfig
//!   ├── application/      The ordered validate-then-move simulation pipeline
//!   └── infrastructure/
//!         ├── http_server/  axum router and listener (POST /api/robot)
//!         └── cli_session/  three-prompt stdin/stdout session
//!         ↕
//! gridbot-core (Room, Robot, instructions)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O, no async, and no framework types beyond serde.
//! - `application` depends on `domain` and `gridbot-core` only.
//! - `infrastructure` depends on everything else plus `axum`/`tokio`.
//!
//! Every request or session builds its own `Room`/`Robot` pair from its own
//! payload. There is no process-wide simulation state, so concurrent HTTP
//! requests never observe each other.

/// Domain layer: message types and runtime configuration.
pub mod domain;

/// Application layer: the request-scoped simulation pipeline.
pub mod application;

/// Infrastructure layer: HTTP server and CLI prompt session.
pub mod infrastructure;
