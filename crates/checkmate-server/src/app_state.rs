use std::sync::Arc;

use checkmate_mcp::ToolRegistry;

/// Shared application state with injected dependencies.
#[derive(Clone)]
pub struct AppState {
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    #[must_use]
    pub fn new(tools: ToolRegistry) -> Self {
        Self {
            tools: Arc::new(tools),
        }
    }
}
