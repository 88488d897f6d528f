//! Registry resolution subsystem.
//!
//! # Data Flow
//! ```text
//! effective Config (address, env code, service identity)
//!     → path.rs (RegistryPath: "http://<address>/register")
//!     → client.rs (one GET, status check, JSON decode)
//!     → Registry (immutable, shared via Arc for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call per fetch; no retries, no caching
//! - Identity is checked before any network activity
//! - Every failure renders as "could not create new registry: ..."

pub mod client;
pub mod error;
pub mod path;
pub mod types;

pub use client::RegistryClient;
pub use error::{RegistryError, RegistryResult};
pub use path::{RegistryPath, NO_VERSION};
pub use types::{Host, Registry, Service};
