use std::sync::Arc;

use serde_json::Value;

use checkmate_core::{Error, SchemaValidator, Tool, ToolDefinition};

use crate::greet::GreetTool;
use crate::validate::ValidateTool;

/// Registry of the tools a server exposes.
///
/// Built once at startup and handed to the transport; there is no global
/// instance. Tools are listed in registration order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<(String, Arc<dyn Tool>)>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `greet` and `validate_json_with_yaml_schema` tools.
    #[must_use]
    pub fn standard(validator: SchemaValidator) -> Self {
        Self::new()
            .with(GreetTool)
            .with(ValidateTool::new(validator))
    }

    /// Builder form of [`ToolRegistry::register`].
    #[must_use]
    pub fn with(mut self, tool: impl Tool + 'static) -> Self {
        self.register(Arc::new(tool));
        self
    }

    /// Add a tool. A tool with the same name replaces the earlier one in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.definition().name;
        if let Some(slot) = self.tools.iter_mut().find(|(n, _)| *n == name) {
            tracing::debug!(tool = %name, "replacing registered tool");
            slot.1 = tool;
        } else {
            self.tools.push((name, tool));
        }
    }

    /// Return the list of tool definitions for the MCP `tools/list` method.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|(_, t)| t.definition()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke the tool registered under `name`.
    ///
    /// # Errors
    ///
    /// `UnknownTool` when nothing is registered under `name`, or whatever
    /// the tool returns for malformed arguments.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<String, Error> {
        let tool = self
            .get(name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))?;
        tool.call(arguments).await
    }
}
