//! Mesh context middleware.
//!
//! Every request passes through untouched except for one extension: when
//! the mesh header decodes, a [`ContextData`] is stored for the handler.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};

use crate::http::context::ContextData;
use crate::http::header::header_data;
use crate::registry::Registry;

/// Layer that wraps services in [`MeshService`], closing over the registry.
#[derive(Debug, Clone, Default)]
pub struct MeshLayer {
    registry: Arc<Registry>,
}

impl MeshLayer {
    pub fn new(registry: Registry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    pub fn from_shared(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// The registry every request will see.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Wrap `next` so it receives the mesh context.
    pub fn middleware<S>(&self, next: S) -> MeshService<S> {
        MeshService {
            inner: next,
            registry: self.registry.clone(),
        }
    }
}

impl<S> Layer<S> for MeshLayer {
    type Service = MeshService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        self.middleware(inner)
    }
}

impl Registry {
    /// Wrap `next` in the mesh middleware for this registry.
    pub fn middleware<S>(self, next: S) -> MeshService<S> {
        MeshLayer::new(self).middleware(next)
    }
}

/// Service injecting [`ContextData`] into request extensions.
#[derive(Debug, Clone)]
pub struct MeshService<S> {
    inner: S,
    registry: Arc<Registry>,
}

impl<S, B> Service<Request<B>> for MeshService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        match header_data(&req) {
            Ok(Some(info)) => {
                ContextData::new(info, self.registry.clone()).insert_into(req.extensions_mut());
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(error = %e, path = %req.uri().path(), "Ignoring mesh header");
            }
        }
        self.inner.call(req)
    }
}
