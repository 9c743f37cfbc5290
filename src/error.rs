//! Error types for rollup-rotator
//!
//! Per-endpoint probe failures are not errors: they are carried as
//! [`ProbeError`](crate::rpc::ProbeError) data inside scored results. The
//! types here cover pool-level conditions that abort an operation.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// RPC-related errors
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Sticky selection persistence errors
    #[error("Sticky selection error: {0}")]
    Sticky(#[from] StickyError),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// RPC-specific errors
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("No endpoints configured")]
    EmptyPool,

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    InvalidFile(String),

    #[error("Invalid scoring policy: {0}")]
    InvalidPolicy(String),

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Sticky selection errors
///
/// Reads never fail (a missing or corrupt file is "no selection"), so only
/// the write path has variants.
#[derive(Error, Debug)]
pub enum StickyError {
    #[error("Failed to write sticky selection: {0}")]
    Write(String),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the operation had no endpoints to work with
    pub fn is_empty_pool(&self) -> bool {
        matches!(self, Error::Rpc(RpcError::EmptyPool))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
