/// Core error type for the checkmate system.
///
/// Only protocol-level failures are errors. A failed validation is reported
/// through [`crate::ValidationOutcome`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidArguments(err.to_string())
    }
}
