//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input rejected before any remote call
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The origin address has no geocoding result
    #[error("Not found: {0}")]
    NotFound(String),

    /// Geocoding service unreachable or answered with garbage
    #[error("Network error: {0}")]
    Network(String),

    /// Every sampled point landed somewhere without an address
    #[error("No land location found after {attempts} attempts")]
    ExhaustedRetries {
        /// Reverse geocode calls made
        attempts: u32,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Whether pressing the button again may succeed
    pub const fn is_user_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::ExhaustedRetries { .. })
    }
}
