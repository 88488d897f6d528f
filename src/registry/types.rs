//! Registry document types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The resolved service-mesh document.
///
/// Never mutated after it is fetched; middleware shares it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Registry {
    /// Name of the service this registry was resolved for.
    pub name: String,

    /// Environment code the registry belongs to.
    pub environment: String,

    /// Unix timestamp (ms) at which the registry service built the document.
    #[serde(rename = "timeLoaded")]
    pub time_loaded: u64,

    /// Hosts of this service and its peers.
    pub hosts: Vec<Host>,

    /// Known services by name.
    pub services: BTreeMap<String, Service>,
}

impl Registry {
    /// True for the zero-value registry used when no registry server is configured.
    pub fn is_empty(&self) -> bool {
        *self == Registry::default()
    }

    /// Look up a peer service by name.
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }
}

/// Network location of a service instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct Host {
    pub host: String,
    pub port: u16,
}

impl Host {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// A peer service entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Service {
    pub group: String,
    pub port: u16,
    pub version: String,
    pub hosts: Vec<Host>,
}
