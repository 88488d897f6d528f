//! Environment overrides for the registry address and environment code.

use crate::config::schema::Config;

/// Variable carrying the registry service base address.
pub const ENV_REGISTRY_API: &str = "SOAJS_REGISTRY_API";

/// Variable carrying the environment code.
pub const ENV_ENV_CODE: &str = "SOAJS_ENV";

/// Merge `lookup` over `config`.
///
/// Only `registry_api` and `env_code` are overridable; a variable that is
/// absent or empty leaves the explicit value in place.
pub fn resolve<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(address) = lookup(ENV_REGISTRY_API).filter(|v| !v.is_empty()) {
        config.registry_api = address;
    }
    if let Some(env_code) = lookup(ENV_ENV_CODE).filter(|v| !v.is_empty()) {
        config.env_code = env_code;
    }
    config
}
