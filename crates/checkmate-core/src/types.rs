use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definition of an MCP tool as advertised to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of running the external schema validator once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The validator exited with code 0.
    Valid,
    /// The validator ran and exited non-zero.
    Invalid { details: String },
    /// The validator executable could not be found.
    ValidatorUnavailable { program: String },
    /// The validator did not exit before the configured deadline.
    TimedOut { program: String, after: Duration },
    /// Any other failure while launching or waiting on the validator.
    Unexpected { message: String },
}

impl ValidationOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Stable label for logs and for callers that branch on the outcome.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid { .. } => "invalid",
            Self::ValidatorUnavailable { .. } => "validator_unavailable",
            Self::TimedOut { .. } => "timed_out",
            Self::Unexpected { .. } => "unexpected",
        }
    }
}

/// A validation outcome together with the paths it was computed for.
///
/// `Display` renders the human-readable message returned by the
/// `validate_json_with_yaml_schema` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub json_path: String,
    pub schema_path: String,
    pub outcome: ValidationOutcome,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (json, schema) = (&self.json_path, &self.schema_path);
        match &self.outcome {
            ValidationOutcome::Valid => write!(
                f,
                "JSON data in '{json}' is valid according to schema in '{schema}'."
            ),
            ValidationOutcome::Invalid { details } => write!(
                f,
                "Validation Error: JSON data in '{json}' is NOT valid according to schema in '{schema}'. Details: {details}"
            ),
            ValidationOutcome::ValidatorUnavailable { program } => write!(
                f,
                "Error: '{program}' command not found. Please ensure it is installed and in your system's PATH."
            ),
            ValidationOutcome::TimedOut { program, after } => write!(
                f,
                "Error: '{program}' did not finish within {}s.",
                after.as_secs_f64()
            ),
            ValidationOutcome::Unexpected { message } => {
                write!(f, "An unexpected error occurred: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcome: ValidationOutcome) -> String {
        ValidationReport {
            json_path: "data.json".to_string(),
            schema_path: "schema.yaml".to_string(),
            outcome,
        }
        .to_string()
    }

    #[test]
    fn valid_message_names_both_paths() {
        let msg = report(ValidationOutcome::Valid);
        assert_eq!(
            msg,
            "JSON data in 'data.json' is valid according to schema in 'schema.yaml'."
        );
        assert!(!msg.contains("Error"));
    }

    #[test]
    fn invalid_message_carries_details() {
        let msg = report(ValidationOutcome::Invalid {
            details: "$.age: 'x' is not of type 'integer'".to_string(),
        });
        assert!(msg.starts_with("Validation Error: JSON data in 'data.json' is NOT valid"));
        assert!(msg.ends_with("Details: $.age: 'x' is not of type 'integer'"));
    }

    #[test]
    fn unavailable_and_unexpected_are_distinguishable() {
        let missing = report(ValidationOutcome::ValidatorUnavailable {
            program: "check-jsonschema".to_string(),
        });
        let other = report(ValidationOutcome::Unexpected {
            message: "Permission denied (os error 13)".to_string(),
        });

        assert_eq!(
            missing,
            "Error: 'check-jsonschema' command not found. Please ensure it is installed and in your system's PATH."
        );
        assert!(!other.contains("command not found"));
        assert_eq!(
            other,
            "An unexpected error occurred: Permission denied (os error 13)"
        );
    }

    #[test]
    fn timeout_message() {
        let msg = report(ValidationOutcome::TimedOut {
            program: "check-jsonschema".to_string(),
            after: Duration::from_millis(1500),
        });
        assert_eq!(msg, "Error: 'check-jsonschema' did not finish within 1.5s.");
    }

    #[test]
    fn outcome_kinds() {
        assert!(ValidationOutcome::Valid.is_valid());
        assert_eq!(ValidationOutcome::Valid.kind(), "valid");

        let invalid = ValidationOutcome::Invalid {
            details: String::new(),
        };
        assert!(!invalid.is_valid());
        assert_eq!(invalid.kind(), "invalid");
    }

    #[test]
    fn tool_definition_serializes_input_schema_camel_case() {
        let def = ToolDefinition {
            name: "greet".to_string(),
            description: "Returns a friendly greeting".to_string(),
            input_schema: serde_json::json!({"type": "object"}),
        };
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["inputSchema"]["type"], "object");
        assert!(json.get("input_schema").is_none());
    }
}
