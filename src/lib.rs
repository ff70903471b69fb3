//! Basic MCP calculator server.
//!
//! This crate provides a minimal Model Context Protocol (MCP) server that
//! speaks JSON-RPC over stdio and advertises a single `calculator` tool. It is
//! meant as a template: new tools plug into the registry without touching the
//! server or transport code.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, shutdown
//!   handling and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool definitions, registry and call dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_basic_calculator::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
