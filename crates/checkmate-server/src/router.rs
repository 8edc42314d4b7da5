use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // MCP endpoints. `/mcp/sse` is kept for clients configured with the
        // Streamable HTTP URL of older servers.
        .route("/mcp", post(handlers::mcp_request))
        .route("/mcp/sse", post(handlers::mcp_request))
        .layer(TraceLayer::new_for_http())
        // CORS: allow any origin (MCP clients may run in various contexts)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
