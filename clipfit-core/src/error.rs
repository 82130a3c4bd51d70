use thiserror::Error;

/// Custom error types for clipfit
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Command '{0}' failed: {1}")]
    CommandFailed(String, String),

    #[error("Directory walk error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Unprobeable input: {0}")]
    Unprobeable(String),

    #[error("Invalid path: {0}")]
    PathError(String),
}

/// Result type for clipfit operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
