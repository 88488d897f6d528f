//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → env overrides → registry fetch (cancellable) → MeshLayer
//!
//! Shutdown (shutdown.rs):
//!     Trigger → every `cancelled()` future resolves
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is returned to the caller
//! - One cancellation source serves both the registry fetch and the server

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{init_middleware, init_middleware_with_env};
