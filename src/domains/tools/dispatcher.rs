//! Tool call dispatch.
//!
//! Routes a `tools/call` request to the matching handler and maps the outcome
//! onto the MCP response envelope. Every failure leaves this module as an
//! [`McpError`]; nothing is allowed to escape to the transport.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, ErrorCode, JsonObject, Tool},
};
use tracing::{info, warn};

use super::{ToolError, ToolRegistry};

/// Dispatches tool calls against an immutable [`ToolRegistry`].
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// List every registered tool, unmodified.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list().to_vec()
    }

    /// Call a tool by name.
    ///
    /// - Unknown name: `METHOD_NOT_FOUND`, `"Unknown tool: {name}"`.
    /// - Tool failure: `INVALID_PARAMS`, `"{DisplayName} error: {message}"`.
    /// - Success: a single text content `"Result: {value}"`.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let Some(entry) = self.registry.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(method_not_found(&ToolError::not_found(name)));
        };

        let handler = entry.handler();
        let arguments = arguments.unwrap_or_default();

        let outcome = AssertUnwindSafe(handler.call(arguments))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(ToolError::internal(panic_message(&*panic))));

        match outcome {
            Ok(value) => {
                info!("Tool {} succeeded", name);
                Ok(CallToolResult::success(vec![Content::text(format!(
                    "Result: {}",
                    value
                ))]))
            }
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                Err(McpError::invalid_params(
                    format!("{} error: {}", handler.display_name(), e),
                    None,
                ))
            }
        }
    }
}

fn method_not_found(err: &ToolError) -> McpError {
    McpError::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("tool panicked: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("tool panicked: {}", s)
    } else {
        "tool panicked".to_string()
    }
}
