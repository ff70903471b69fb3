//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Ordered, immutable set of registered tools
//! - `dispatcher.rs` - Routes calls by name and maps outcomes to MCP responses
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolHandler` for the tool type
//! 3. Export it in `definitions/mod.rs`
//! 4. Add it to `ToolRegistry::builtin()`

pub mod definitions;
mod dispatcher;
mod error;
mod handlers;
mod registry;

pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
pub use handlers::{ToolHandler, decode_arguments};
pub use registry::{RegisteredTool, ToolRegistry};
