use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use checkmate_core::{Error, Tool, ToolDefinition};

#[derive(Deserialize)]
struct GreetArgs {
    name: String,
}

/// Returns a friendly greeting.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetTool;

impl GreetTool {
    #[must_use]
    pub fn greeting(name: &str) -> String {
        format!("Hello {name}! Its a pleasure to connect from your first MCP Server.")
    }
}

#[async_trait]
impl Tool for GreetTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "greet".to_string(),
            description: "Returns a friendly greeting".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the person to greet"
                    }
                },
                "required": ["name"]
            }),
        }
    }

    async fn call(&self, arguments: Value) -> Result<String, Error> {
        let args: GreetArgs = serde_json::from_value(arguments)?;
        Ok(Self::greeting(&args.name))
    }
}
