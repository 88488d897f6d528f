//! Per-request mesh context.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → header.rs (read `soajsinjectobj`, decode JSON → HeaderInfo)
//!     → context.rs (HeaderInfo + Arc<Registry> → ContextData)
//!     → middleware.rs (store ContextData in request extensions)
//!     → downstream handler (ContextData::from_extensions / Option<ContextData>)
//! ```
//!
//! # Design Decisions
//! - A bad or missing header never fails the request; it only means no context
//! - The registry is shared read-only, nothing here takes a lock
//! - Context is stored under a private key type, not a string

pub mod context;
pub mod header;
pub mod middleware;

pub use context::ContextData;
pub use header::{header_data, Application, Geo, HeaderError, HeaderInfo, Tenant, Urac, SOAJS_HEADER};
pub use middleware::{MeshLayer, MeshService};
