pub mod error;
pub mod traits;
pub mod types;
pub mod validator;

pub use error::Error;
pub use traits::Tool;
pub use types::{ToolDefinition, ValidationOutcome, ValidationReport};
pub use validator::SchemaValidator;
