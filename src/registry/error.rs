//! Startup error taxonomy for registry resolution.

use thiserror::Error;

/// Errors that can occur while resolving the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Identity required to query the registry is missing.
    #[error("could not create new registry: service name and env code are required")]
    Configuration,

    /// The registry address does not form a valid URL.
    #[error("could not create new registry: invalid registry url '{url}': {source}")]
    InvalidAddress {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request could not be sent or its body could not be read.
    #[error("could not create new registry: {0}")]
    Transport(#[source] reqwest::Error),

    /// The registry service answered with a non-success status.
    #[error("could not create new registry: registry responded with status {0}")]
    Status(reqwest::StatusCode),

    /// The response body is not a registry document.
    #[error("could not create new registry: {0}")]
    Decode(#[source] serde_json::Error),

    /// The caller canceled initialization before the fetch completed.
    #[error("could not create new registry: request canceled")]
    Canceled,
}

impl RegistryError {
    /// True for every fetch failure: an address that does not form a URL,
    /// send failures, non-success statuses and cancellation.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RegistryError::InvalidAddress { .. }
                | RegistryError::Transport(_)
                | RegistryError::Status(_)
                | RegistryError::Canceled
        )
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
