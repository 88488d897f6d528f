//! Registry service HTTP client.
//!
//! # Responsibilities
//! - Check the service identity before touching the network
//! - Issue the single `GET /register` call
//! - Map send failures, non-success statuses and bad bodies to [`RegistryError`]

use std::time::Duration;

use crate::config::Config;
use crate::registry::error::{RegistryError, RegistryResult};
use crate::registry::path::RegistryPath;
use crate::registry::types::Registry;

/// Client for the registry service's registration endpoint.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    path: RegistryPath,
}

impl RegistryClient {
    /// Create a client for the registry at `address` (`host:port`).
    ///
    /// A zero `timeout` means the fetch waits as long as the caller lets it.
    pub fn new(address: &str, timeout: Duration) -> RegistryResult<Self> {
        let mut builder = reqwest::Client::builder();
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(RegistryError::Transport)?;

        Ok(Self {
            client,
            path: RegistryPath::new(address),
        })
    }

    /// Resolve the registry described by `config`.
    ///
    /// Fails with [`RegistryError::Configuration`] before any network call
    /// when the service name, environment code or registry address is missing.
    pub async fn fetch_for(config: &Config) -> RegistryResult<Registry> {
        if config.service_name.is_empty()
            || config.env_code.is_empty()
            || config.registry_api.is_empty()
        {
            return Err(RegistryError::Configuration);
        }

        let client = Self::new(
            &config.registry_api,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        client.fetch(config).await
    }

    /// Fetch and decode the registry document. One request, no retries.
    pub async fn fetch(&self, config: &Config) -> RegistryResult<Registry> {
        let url = self.path.register();
        let url = url::Url::parse(&url)
            .map_err(|source| RegistryError::InvalidAddress { url, source })?;

        let mut query = vec![
            ("env", config.env_code.as_str()),
            ("serviceName", config.service_name.as_str()),
        ];
        if !config.service_group.is_empty() {
            query.push(("serviceGroup", config.service_group.as_str()));
        }
        if !config.service_version.is_empty() {
            query.push(("serviceVersion", config.service_version.as_str()));
        }

        tracing::debug!(url = %url, env = %config.env_code, service = %config.service_name, "Fetching registry");

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(RegistryError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status(status));
        }

        let body = response.text().await.map_err(RegistryError::Transport)?;
        serde_json::from_str::<Registry>(&body).map_err(RegistryError::Decode)
    }

    /// URL of the registration endpoint this client talks to.
    pub fn register_url(&self) -> String {
        self.path.register()
    }
}
