//! Infrastructure layer for gridbot-server.
//!
//! All I/O lives here: the axum HTTP listener and the stdin/stdout prompt
//! session. Neither shell contains simulation logic: they decode input,
//! call into the application layer, and encode the outcome.

pub mod cli_session;
pub mod http_server;

// Re-export the primary entry points so `main.rs` can call them concisely.
pub use http_server::{router, run_server};
