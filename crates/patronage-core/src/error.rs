//! # Gateway Error Types
//!
//! Typed error handling for the vendor crates.
//! All vendor operations return `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for all vendor operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Vendor API rejected the call. Displays as the vendor's own message.
    #[error("{message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with the vendor
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GatewayError {
    /// Build a vendor error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        GatewayError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Name of the vendor that produced this error, if any
    pub fn provider_name(&self) -> Option<&str> {
        match self {
            GatewayError::Provider { provider, .. } => Some(provider),
            _ => None,
        }
    }
}

/// Result type alias for vendor operations
pub type GatewayResult<T> = Result<T, GatewayError>;
