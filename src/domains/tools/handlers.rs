//! Tool handler trait.
//!
//! Every tool served by this crate is one type implementing [`ToolHandler`].
//! The trait carries both the declarative half of a tool (name, description,
//! input schema) and its executable half, so the registry can never hold a
//! descriptor without a matching executor or the other way round.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde::de::DeserializeOwned;

use super::ToolError;

/// Trait for implementing tool handlers.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool as registered in MCP.
    fn name(&self) -> &'static str;

    /// Human-readable name used to prefix error messages (e.g. "Calculator").
    fn display_name(&self) -> &'static str;

    /// Get the description of this tool.
    fn description(&self) -> &'static str;

    /// JSON Schema describing the accepted arguments.
    fn input_schema(&self) -> Arc<JsonObject>;

    /// Execute the tool with the given arguments.
    ///
    /// On success returns the result rendered for display.
    async fn call(&self, arguments: JsonObject) -> Result<String, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool(&self) -> Tool {
        Tool {
            name: self.name().into(),
            description: Some(self.description().into()),
            input_schema: self.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Decode a raw argument bag into a tool's typed parameters.
///
/// Missing required fields and wrong value types are reported as
/// [`ToolError::InvalidArguments`] before the tool runs.
pub fn decode_arguments<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
