//! Configuration validation.
//!
//! Semantic checks only; serde handles syntax. Returns every violation
//! rather than the first one.

use thiserror::Error;

use crate::config::schema::Config;

/// A single semantic problem in a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("service '{0}' has no service_port")]
    MissingPort(String),

    #[error("service_version '{0}' must not contain '/'")]
    InvalidVersion(String),

    #[error("registry_api '{0}' must be host:port without a scheme")]
    SchemeInAddress(String),
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.service_name.is_empty() && config.service_port == 0 {
        errors.push(ValidationError::MissingPort(config.service_name.clone()));
    }
    if config.service_version.contains('/') {
        errors.push(ValidationError::InvalidVersion(config.service_version.clone()));
    }
    if config.registry_api.contains("://") {
        errors.push(ValidationError::SchemeInAddress(config.registry_api.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
