//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → BootstrapConfig (immutable, all fields defaulted)
//!     → consumed by the CLI and the bootstrap layer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so running without a config file works

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{BootstrapConfig, CacheConfig, ObservabilityConfig, RegistrySourceConfig};
