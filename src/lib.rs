//! SOAJS service-mesh integration for axum/tower servers.
//!
//! At startup [`init_middleware`] resolves the [`Registry`] for this service
//! from the registry API. The returned [`MeshLayer`] then decodes the
//! `soajsinjectobj` header of every request and stores a [`ContextData`]
//! (header fields + registry) in the request extensions.
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use soajs_mesh::{init_middleware, Config, ContextData, Shutdown};
//!
//! async fn hello(ctx: Option<ContextData>) -> String {
//!     match ctx {
//!         Some(ctx) => format!("hello {} from {}", ctx.device, ctx.reg.name),
//!         None => "hello".to_string(),
//!     }
//! }
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let shutdown = Shutdown::new();
//! let mesh = init_middleware(shutdown.cancelled(), Config::default()).await?;
//! let app: Router = Router::new().route("/", get(hello)).layer(mesh);
//! # Ok(())
//! # }
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod registry;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::Config;
pub use http::{ContextData, HeaderInfo, MeshLayer, MeshService};
pub use lifecycle::{init_middleware, Shutdown};
pub use registry::{Host, Registry, RegistryError};
