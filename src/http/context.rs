//! Per-request context handed to downstream handlers.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::OptionalFromRequestParts;
use axum::http::request::Parts;
use axum::http::Extensions;
use serde::Serialize;

use crate::http::header::{Application, Geo, HeaderInfo, Tenant, Urac};
use crate::registry::{Host, Registry};

/// Decoded header fields plus the shared registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextData {
    pub tenant: Tenant,
    pub key: String,
    pub application: Application,
    pub device: String,
    pub geo: Geo,
    pub urac: Option<Urac>,
    pub awareness: Option<Host>,
    pub reg: Arc<Registry>,
}

/// Extension key. Private so no other code can overwrite or forge the entry.
#[derive(Clone)]
struct ContextKey(ContextData);

impl ContextData {
    pub fn new(info: HeaderInfo, reg: Arc<Registry>) -> Self {
        Self {
            tenant: info.tenant,
            key: info.key,
            application: info.application,
            device: info.device,
            geo: info.geo,
            urac: info.urac,
            awareness: info.awareness,
            reg,
        }
    }

    /// The context stored by the mesh middleware, if any.
    pub fn from_extensions(extensions: &Extensions) -> Option<&ContextData> {
        extensions.get::<ContextKey>().map(|key| &key.0)
    }

    pub(crate) fn insert_into(self, extensions: &mut Extensions) {
        extensions.insert(ContextKey(self));
    }

    /// Path to `service` (at `version`) through the gateway that forwarded
    /// this request. `None` when the gateway did not announce itself.
    pub fn gateway_path(&self, service: &str, version: &str) -> Option<String> {
        self.awareness
            .as_ref()
            .map(|gateway| gateway.path(&[service, version]))
    }
}

impl<S> OptionalFromRequestParts<S> for ContextData
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(ContextData::from_extensions(&parts.extensions).cloned())
    }
}
