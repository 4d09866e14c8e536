//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    /// Deposit (or hardened withdrawal) of a non-positive amount
    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Insufficient balance")]
    InsufficientBalance,

    /// The resulting balance does not fit in an `i64`
    #[error("Balance overflow")]
    Overflow,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors raised by a rejected account operation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount | Self::InsufficientBalance | Self::Overflow
        )
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
