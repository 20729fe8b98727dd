//! gridbot-server entry point.
//!
//! Selects exactly one of the two transport shells and runs it:
//!
//! ```text
//! gridbot-server --cli                 # interactive prompt session
//! gridbot-server --server              # HTTP API on 0.0.0.0:8080
//! gridbot-server --server --port 9000  # custom listener port
//! ```
//!
//! `--cli` and `--server` form a required, mutually exclusive group, so
//! passing both or neither is a usage error straight from the parser.
//!
//! # Environment variable overrides
//!
//! | Variable       | Default   | Description                      |
//! |----------------|-----------|----------------------------------|
//! | `GRIDBOT_BIND` | `0.0.0.0` | HTTP listener bind address       |
//! | `GRIDBOT_PORT` | `8080`    | HTTP listener port               |
//! | `RUST_LOG`     | `info`    | tracing filter (e.g. `debug`)    |

use std::net::SocketAddr;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

use gridbot_server::domain::ServerConfig;
use gridbot_server::infrastructure::{cli_session, run_server};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Grid robot simulator.
///
/// Simulates a point robot on a bounded grid, either interactively or as a
/// single-endpoint HTTP service.
#[derive(Debug, Parser)]
#[command(
    name = "gridbot-server",
    about = "Grid robot simulator: interactive CLI session or HTTP API",
    version
)]
#[command(group(ArgGroup::new("mode").required(true).args(["cli", "server"])))]
struct Cli {
    /// Run an interactive prompt session on stdin/stdout.
    #[arg(long)]
    cli: bool,

    /// Serve `POST /api/robot` over HTTP until terminated.
    #[arg(long)]
    server: bool,

    /// IP address to bind the HTTP listener to (server mode).
    #[arg(long, default_value = "0.0.0.0", env = "GRIDBOT_BIND")]
    bind: String,

    /// TCP port for the HTTP listener (server mode).
    #[arg(long, default_value_t = 8080, env = "GRIDBOT_PORT")]
    port: u16,
}

impl Cli {
    /// Converts the parsed arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(ServerConfig { bind_addr })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging first; the level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.cli {
        return cli_session::run();
    }

    let config = cli.into_server_config()?;
    run_server(config).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────
