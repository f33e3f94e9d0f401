//! Supervisor error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupervisorError {
    #[error("supervisor '{0}' not found. Please install it: npm install -g pm2")]
    NotFound(String),

    #[error("supervisor command failed ({status}): {stderr}")]
    CommandFailed { status: String, stderr: String },

    #[error("supervisor output exceeded {limit} bytes")]
    OutputTooLarge { limit: usize },

    #[error("invalid JSON from supervisor: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unexpected process list shape: {0}")]
    UnexpectedShape(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SupervisorError>;
