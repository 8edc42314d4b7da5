pub mod greet;
pub mod jsonrpc;
pub mod tools;
pub mod validate;

pub use greet::GreetTool;
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use tools::ToolRegistry;
pub use validate::ValidateTool;

pub use checkmate_core::ToolDefinition;
