//! Tool Registry - central registration of all tools.
//!
//! This module provides:
//! - The ordered, immutable set of available tools
//! - Tool metadata for listing
//! - Lookup of a tool handler by name

use std::sync::Arc;

use rmcp::model::Tool;

use super::{ToolError, ToolHandler, definitions::CalculatorTool};

/// A registered tool: its descriptor together with the handler that runs it.
#[derive(Clone)]
pub struct RegisteredTool {
    descriptor: Tool,
    handler: Arc<dyn ToolHandler>,
}

impl RegisteredTool {
    fn new(handler: Arc<dyn ToolHandler>) -> Self {
        Self {
            descriptor: handler.to_tool(),
            handler,
        }
    }

    /// Handler executing this tool.
    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }
}

/// Tool registry - manages all available tools.
///
/// Registration order is preserved and is the order tools are listed in.
/// Once built the registry is never mutated; share it behind an `Arc`.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    descriptors: Vec<Tool>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry holding every tool compiled into this server.
    pub fn builtin() -> Result<Self, ToolError> {
        Self::with_tools([Arc::new(CalculatorTool::new()) as Arc<dyn ToolHandler>])
    }

    /// Build a registry from a fixed list of handlers, in order.
    pub fn with_tools(
        handlers: impl IntoIterator<Item = Arc<dyn ToolHandler>>,
    ) -> Result<Self, ToolError> {
        let mut registry = Self::new();
        for handler in handlers {
            registry.register(handler)?;
        }
        Ok(registry)
    }

    /// Register a tool handler.
    ///
    /// Fails if a tool with the same name is already registered.
    pub fn register(&mut self, handler: Arc<dyn ToolHandler>) -> Result<(), ToolError> {
        if self.contains(handler.name()) {
            return Err(ToolError::DuplicateName(handler.name().to_string()));
        }
        let entry = RegisteredTool::new(handler);
        self.descriptors.push(entry.descriptor.clone());
        self.tools.push(entry);
        Ok(())
    }

    /// Get a registered tool by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.descriptor.name == name)
    }

    /// Check if a tool with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.descriptor.name.as_ref()).collect()
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn list(&self) -> &[Tool] {
        &self.descriptors
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// `true` if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
