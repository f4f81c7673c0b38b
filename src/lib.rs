//! RDAP Bootstrap Service Registry Library
//!
//! Decodes IANA-style bootstrap registry documents and resolves AS numbers
//! and IP networks to the most specific authoritative RDAP service URL set.

pub mod bootstrap;
pub mod config;
pub mod matching;
pub mod registry;

pub use bootstrap::{BootstrapClient, RegistryCache, RegistryKind, RegistryStore};
pub use config::BootstrapConfig;
pub use matching::{AsRange, MatchError, MatchResult};
pub use registry::{ServiceEntry, ServiceRegistry, ServicesList};
