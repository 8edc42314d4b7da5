use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use checkmate_mcp::jsonrpc::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND};
use checkmate_mcp::{JsonRpcRequest, JsonRpcResponse};

use crate::app_state::AppState;

const PROTOCOL_VERSION: &str = "2024-11-05";

/// Handle MCP JSON-RPC requests (Streamable HTTP transport).
///
/// Requests are answered in the response body; notifications get 202 with
/// no body.
pub async fn mcp_request(
    State(state): State<AppState>,
    Json(req): Json<JsonRpcRequest>,
) -> Response {
    // Handle notifications (no id / null id) - no response needed
    if req.is_notification() {
        tracing::info!("Received MCP notification: {}", req.method);
        return StatusCode::ACCEPTED.into_response();
    }

    if req.jsonrpc != "2.0" {
        return Json(JsonRpcResponse::error(
            req.id,
            INVALID_REQUEST,
            format!("Unsupported jsonrpc version: {}", req.jsonrpc),
        ))
        .into_response();
    }

    tracing::debug!(method = %req.method, id = %req.id, "MCP request");

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "ping" => JsonRpcResponse::success(req.id.clone(), serde_json::json!({})),
        "tools/list" => handle_tools_list(&state, &req),
        "tools/call" => handle_tools_call(&state, &req).await,
        _ => JsonRpcResponse::error(req.id, METHOD_NOT_FOUND, "Method not found"),
    };

    Json(response).into_response()
}

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": "checkmate",
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn handle_tools_list(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = state.tools.definitions();
    JsonRpcResponse::success(req.id.clone(), serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = &req.params else {
        return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing params");
    };

    let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing tool name");
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()));

    tracing::info!(tool = tool_name, "calling tool");

    match state.tools.call(tool_name, arguments).await {
        Ok(text) => JsonRpcResponse::success(
            req.id.clone(),
            serde_json::json!({
                "content": [{
                    "type": "text",
                    "text": text
                }],
                "isError": false
            }),
        ),
        Err(err) => {
            tracing::info!(tool = tool_name, "rejected tool call: {err}");
            JsonRpcResponse::from_error(req.id.clone(), &err)
        }
    }
}
