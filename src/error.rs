use thiserror::Error;

/// Unified error type for docs-publish operations
#[derive(Error, Debug)]
pub enum DocsPublishError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tool invocation failed: {0}")]
    Tool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in docs-publish
pub type Result<T> = std::result::Result<T, DocsPublishError>;

impl DocsPublishError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocsPublishError::Config(msg.into())
    }

    /// Create a tool invocation error with context
    pub fn tool(msg: impl Into<String>) -> Self {
        DocsPublishError::Tool(msg.into())
    }
}
