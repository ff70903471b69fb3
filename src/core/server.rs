//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool requests to the [`ToolDispatcher`].
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool implements `ToolHandler`, which bundles its metadata with its
//! execution logic. The registry is built once in [`McpServer::new`] and
//! never changes afterwards.
//! **Adding a new tool does NOT require modifying this file!**

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use tracing::{info, instrument};

use super::{Config, Result};
use crate::domains::tools::{ToolDispatcher, ToolRegistry};

/// The main MCP server handler.
///
/// Holds only immutable state, so clones are cheap and can serve requests
/// concurrently.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher routing tool calls by name.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server with the given configuration and the builtin tools.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_registry(config, ToolRegistry::builtin()?))
    }

    /// Create a new MCP server serving the tools in `registry`.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(Arc::new(registry)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // In-process access (no transport)
    // ========================================================================

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.dispatcher.list_tools()
    }

    /// Call a tool by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatcher.dispatch(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.config.server.name.clone();
        server_info.version = self.config.server.version.clone();

        ServerInfo {
            instructions: Some(
                "Basic MCP server exposing a calculator tool for add, subtract, multiply and divide."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.dispatcher
            .dispatch(&request.name, request.arguments)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_server_info() {
        let server = server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "mcp-basic-calculator");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_server_name_from_config() {
        let mut config = Config::default();
        config.server.name = "custom".to_string();
        let server = McpServer::new(config).unwrap();
        assert_eq!(server.name(), "custom");
        assert_eq!(server.get_info().server_info.name, "custom");
    }

    #[test]
    fn test_list_tools() {
        let tools = server().list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "calculator");
    }

    #[tokio::test]
    async fn test_call_tool() {
        let arguments = serde_json::json!({ "operation": "multiply", "a": 6, "b": 7 })
            .as_object()
            .cloned();
        let result = server().call_tool("calculator", arguments).await.unwrap();
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "Result: 42"),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_server_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone + 'static>() {}
        assert_send_sync::<McpServer>();
    }
}
