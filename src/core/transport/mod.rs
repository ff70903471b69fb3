//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output. Framing is handled by
//! the rmcp SDK; this module owns the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::{ShutdownReason, StdioTransport};
