use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use checkmate_core::{Error, SchemaValidator, Tool, ToolDefinition};

#[derive(Deserialize)]
struct ValidateArgs {
    json_file_path: String,
    yaml_file_path: String,
}

/// Checks a JSON file against a YAML-encoded schema via [`SchemaValidator`].
///
/// Every outcome, including a missing validator, comes back as text.
#[derive(Debug, Clone, Default)]
pub struct ValidateTool {
    validator: SchemaValidator,
}

impl ValidateTool {
    #[must_use]
    pub fn new(validator: SchemaValidator) -> Self {
        Self { validator }
    }
}

#[async_trait]
impl Tool for ValidateTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "validate_json_with_yaml_schema".to_string(),
            description: "Checks if JSON data from a file is valid according to a schema from a YAML file. Returns a string indicating whether the JSON data is valid, or an error message.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "json_file_path": {
                        "type": "string",
                        "description": "The path to the JSON data file."
                    },
                    "yaml_file_path": {
                        "type": "string",
                        "description": "The path to the YAML schema file."
                    }
                },
                "required": ["json_file_path", "yaml_file_path"]
            }),
        }
    }

    async fn call(&self, arguments: Value) -> Result<String, Error> {
        let args: ValidateArgs = serde_json::from_value(arguments)?;
        let report = self
            .validator
            .validate(&args.json_file_path, &args.yaml_file_path)
            .await;
        Ok(report.to_string())
    }
}
