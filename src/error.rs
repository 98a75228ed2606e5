//! Error types for GridCommit

use thiserror::Error;

/// Main error type for GridCommit
#[derive(Error, Debug)]
pub enum GridCommitError {
    // Hash engine errors
    #[error("Hash engine error: {0}")]
    Engine(String),

    // Input validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Order management errors
    #[error("Order not found: {0}")]
    OrderNotFound(u64),

    #[error("Order submission failed: {0}")]
    Submission(String),

    // Configuration errors
    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Result type alias for GridCommit operations
pub type Result<T> = std::result::Result<T, GridCommitError>;
