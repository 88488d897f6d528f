//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Config (explicit values)
//!     → env.rs (SOAJS_REGISTRY_API / SOAJS_ENV override two fields)
//!     → effective Config handed to lifecycle::startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; it is consumed once at startup
//! - All fields have defaults so an empty config means "no registry"
//! - The environment merge is a pure function over a lookup closure

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{resolve, ENV_ENV_CODE, ENV_REGISTRY_API};
pub use loader::{load_config, ConfigError};
pub use schema::Config;
