//! Observability subsystem.
//!
//! Startup and per-request events are emitted through `tracing`; the host
//! process decides where they go. [`logging::init_logging`] is the default
//! installation used by the demo binary.

pub mod logging;
