use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use crate::types::ToolDefinition;

/// A named, described, remotely invocable function.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The name, description and input schema advertised by `tools/list`.
    fn definition(&self) -> ToolDefinition;

    /// Invoke the tool with the raw `arguments` object of a `tools/call`.
    ///
    /// Returns `Err` only when the arguments do not match the input schema;
    /// everything the tool itself observes is rendered into the string.
    async fn call(&self, arguments: Value) -> Result<String, Error>;
}
