//! Configuration schema definitions.
//!
//! All types derive Serde traits so the bootstrap options can come from a
//! TOML file, from code, or from both.

use serde::{Deserialize, Serialize};

/// Bootstrap options for the registry integration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Name this service is registered under (e.g. "orders").
    pub service_name: String,

    /// Logical group of the service, forwarded to the registry when set.
    pub service_group: String,

    /// Service version token (e.g. "1"), forwarded to the registry when set.
    pub service_version: String,

    /// Port the service listens on.
    pub service_port: u16,

    /// Address the service is reachable at inside the mesh.
    pub service_ip: String,

    /// Registry service address (`host:port`, no scheme).
    pub registry_api: String,

    /// Environment code (e.g. "dev").
    pub env_code: String,

    /// Timeout for the registry fetch. `0` disables it.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            service_group: String::new(),
            service_version: String::new(),
            service_port: 0,
            service_ip: String::new(),
            registry_api: String::new(),
            env_code: String::new(),
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// True when neither a registry address nor an environment code is set,
    /// i.e. the service runs without a registry server.
    pub fn registry_disabled(&self) -> bool {
        self.registry_api.is_empty() && self.env_code.is_empty()
    }
}
