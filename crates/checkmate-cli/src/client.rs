use reqwest::Client;
use serde_json::Value;

/// Minimal JSON-RPC client for a running checkmate server.
pub struct McpClient {
    http: Client,
    endpoint: String,
}

impl McpClient {
    pub fn new(server_url: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: format!("{}/mcp", server_url.trim_end_matches('/')),
        }
    }

    /// Send one request and return its `result`, or fail with the server's
    /// JSON-RPC error.
    pub async fn request(&self, method: &str, params: Value) -> anyhow::Result<Value> {
        tracing::debug!(endpoint = %self.endpoint, method, "sending request");

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": method,
                "params": params,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await?;
            anyhow::bail!("Server returned {status}: {body}");
        }

        let mut body: Value = resp.json().await?;
        if let Some(error) = body.get("error") {
            anyhow::bail!("Error: {}", serde_json::to_string_pretty(error)?);
        }
        Ok(body.get_mut("result").map(Value::take).unwrap_or_default())
    }

    /// Call a tool and return the text of its first content block.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> anyhow::Result<String> {
        let result = self
            .request(
                "tools/call",
                serde_json::json!({ "name": name, "arguments": arguments }),
            )
            .await?;

        result["content"][0]["text"]
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| anyhow::anyhow!("Tool '{name}' returned no text content"))
    }
}
