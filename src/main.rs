//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration and serves the calculator over
//! stdio until the client disconnects or an interrupt is received.

use anyhow::Result;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use mcp_basic_calculator::core::{
    Config, Error, McpServer, ShutdownReason, StdioTransport, TransportError,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level, config.logging.with_timestamps);

    let reason = serve(config).await.inspect_err(|e| match e {
        Error::Transport(TransportError::ServiceError(_)) => {
            error!("MCP server stopped with an error: {}", e)
        }
        _ => error!("Failed to start MCP server: {}", e),
    })?;

    info!("Server shutting down");

    if reason == ShutdownReason::Interrupted {
        // Dropping the runtime blocks on tokio's stdin reader thread until
        // stdin yields a byte or EOF.
        std::process::exit(0);
    }

    Ok(())
}

/// Build the server and serve it over stdio.
async fn serve(config: Config) -> mcp_basic_calculator::Result<ShutdownReason> {
    let server = McpServer::new(config)?;

    info!("Starting {} v{}", server.name(), server.version());

    Ok(StdioTransport::run(server).await?)
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr; stdout is reserved for protocol messages.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
