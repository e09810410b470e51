//! # Engine Error Types
//!
//! Error types for the pipeline and drivers.
//!
//! Most failure handling in this crate is state, not errors: a failed
//! catalog fetch becomes `HomepageState::Failed`, a malformed cart payload
//! becomes an empty cart, a rejected slide jump is a logged no-op. What
//! remains here is configuration loading and talking to a driver that has
//! already stopped.

use thiserror::Error;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Failed to load or parse the storefront configuration.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// A driver's channel is closed - the task behind it has stopped.
    #[error("{0} is no longer running")]
    DriverStopped(&'static str),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::ConfigLoadFailed(err.to_string())
    }
}
