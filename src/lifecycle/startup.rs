//! Startup orchestration: resolve configuration, fetch the registry and
//! hand back the middleware producer.
//!
//! # Design Decisions
//! - Fail fast: configuration, transport and decode errors are returned as-is
//! - Neither a registry address nor an env code means "no registry server"
//! - The fetch is raced against the caller's cancellation future

use std::future::Future;

use crate::config::{env, Config};
use crate::http::MeshLayer;
use crate::registry::{RegistryClient, RegistryError, RegistryResult};

/// Resolve the registry for `config` (with process environment overrides)
/// and return the layer that injects it into every request.
///
/// Resolving `cancel` before the fetch completes aborts it with
/// [`RegistryError::Canceled`].
pub async fn init_middleware<C>(cancel: C, config: Config) -> RegistryResult<MeshLayer>
where
    C: Future<Output = ()>,
{
    init_middleware_with_env(cancel, config, |key| std::env::var(key).ok()).await
}

/// [`init_middleware`] with an explicit environment lookup.
pub async fn init_middleware_with_env<C, F>(
    cancel: C,
    config: Config,
    lookup: F,
) -> RegistryResult<MeshLayer>
where
    C: Future<Output = ()>,
    F: Fn(&str) -> Option<String>,
{
    let config = env::resolve(config, lookup);

    if config.registry_disabled() {
        tracing::info!("No registry address or env code configured; running without a registry");
        return Ok(MeshLayer::default());
    }

    tracing::info!(
        registry_api = %config.registry_api,
        env = %config.env_code,
        service = %config.service_name,
        "Resolving registry"
    );

    let result = tokio::select! {
        biased;
        result = RegistryClient::fetch_for(&config) => result,
        _ = cancel => Err(RegistryError::Canceled),
    };

    match result {
        Ok(registry) => {
            tracing::info!(
                name = %registry.name,
                environment = %registry.environment,
                hosts = registry.hosts.len(),
                services = registry.services.len(),
                "Registry loaded"
            );
            Ok(MeshLayer::new(registry))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Registry initialization failed");
            Err(e)
        }
    }
}
