//! Error handling for the prober

use thiserror::Error;

/// Main error type for probe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Port specification error: {0}")]
    PortSpec(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
