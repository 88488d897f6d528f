//! URL path construction for peer hosts and the registry service.

use crate::registry::types::Host;

/// Version token meaning "no version segment".
pub const NO_VERSION: &str = "-";

impl Host {
    /// Build `"<host>:<port>/<service>/v<version>/"`.
    ///
    /// `args` is `(service, version, extra...)`. A service segment is only
    /// emitted together with a version token. The version token may carry a
    /// leading `v`; a token that is empty, `"v"`, or [`NO_VERSION`] emits no
    /// version segment. Extra segments are appended literally, except
    /// [`NO_VERSION`] which is skipped.
    pub fn path(&self, args: &[&str]) -> String {
        let mut path = format!("{}:{}/", self.host, self.port);

        let [service, version, extra @ ..] = args else {
            return path;
        };

        path.push_str(service);
        path.push('/');

        let version = version.strip_prefix('v').unwrap_or(*version);
        if !version.is_empty() && version != NO_VERSION {
            path.push('v');
            path.push_str(version);
            path.push('/');
        }

        for segment in extra.iter().filter(|s| **s != NO_VERSION) {
            path.push_str(segment);
            path.push('/');
        }

        path
    }
}

/// Address of the registry service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPath {
    address: String,
}

impl RegistryPath {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// Absolute URL of the registration endpoint. The address is not validated.
    pub fn register(&self) -> String {
        format!("http://{}/register", self.address)
    }
}
