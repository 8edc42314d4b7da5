use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use checkmate_core::validator::DEFAULT_PROGRAM;
use checkmate_core::SchemaValidator;

mod client;

use client::McpClient;

#[derive(Parser)]
#[command(name = "checkmate", about = "Checkmate CLI - JSON schema validation over MCP")]
struct Cli {
    /// Checkmate server URL
    #[arg(long, env = "CHECKMATE_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tools exposed by the server
    Tools,

    /// Ask the server for a greeting
    Greet {
        /// Name to greet
        name: String,
    },

    /// Validate a JSON file against a YAML schema on the server
    Validate {
        /// Path to the JSON data file
        json_file: String,

        /// Path to the YAML schema file
        yaml_file: String,
    },

    /// Validate a JSON file against a YAML schema locally, without a server
    Check {
        /// Path to the JSON data file
        json_file: String,

        /// Path to the YAML schema file
        yaml_file: String,

        /// Validator command line
        #[arg(long, env = "CHECKMATE_VALIDATOR", default_value = DEFAULT_PROGRAM)]
        validator: String,

        /// Seconds to wait for the validator (0 waits forever)
        #[arg(long, env = "CHECKMATE_VALIDATOR_TIMEOUT_SECS", default_value_t = 60)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = McpClient::new(&cli.url);

    match cli.command {
        Commands::Tools => {
            let result = client.request("tools/list", serde_json::json!({})).await?;
            println!("{}", serde_json::to_string_pretty(&result["tools"])?);
        }
        Commands::Greet { name } => {
            let text = client
                .call_tool("greet", serde_json::json!({ "name": name }))
                .await?;
            println!("{text}");
        }
        Commands::Validate {
            json_file,
            yaml_file,
        } => {
            let text = client
                .call_tool(
                    "validate_json_with_yaml_schema",
                    serde_json::json!({
                        "json_file_path": json_file,
                        "yaml_file_path": yaml_file,
                    }),
                )
                .await?;
            println!("{text}");
        }
        Commands::Check {
            json_file,
            yaml_file,
            validator,
            timeout_secs,
        } => {
            let validator = SchemaValidator::from_command_line(&validator)
                .ok_or_else(|| anyhow::anyhow!("Validator command is empty"))?
                .with_timeout_secs(timeout_secs);

            let report = validator.validate(&json_file, &yaml_file).await;
            println!("{report}");

            if !report.outcome.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
