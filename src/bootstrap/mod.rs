//! Bootstrap registry retrieval and refresh subsystem.
//!
//! # Data Flow
//! ```text
//! published bootstrap files (asn.json / ipv4.json / ipv6.json)
//!     → client.rs (HTTP fetch, no retry policy)
//!     → registry::loader (structural decode)
//!     → cache.rs (age-tracked, optional disk persistence)
//!     → store.rs (atomic swap of the registry readers see)
//! ```
//!
//! # Design Decisions
//! - Refresh *policy* lives with the caller; this layer only fetches on
//!   demand and reports how old a cached registry is
//! - A refreshed registry replaces the old one wholesale; nothing is ever
//!   patched in place

pub mod cache;
pub mod client;
pub mod store;

pub use cache::{CachedRegistry, RegistryCache};
pub use client::{BootstrapClient, BootstrapError, RegistryKind, DEFAULT_BASE_URL};
pub use store::RegistryStore;
