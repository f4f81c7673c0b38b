//! Bootstrap registry data model.
//!
//! # Data Flow
//! ```text
//! published JSON document (IANA-style bootstrap file)
//!     → loader.rs (structural decode, no semantic validation)
//!     → ServiceRegistry (immutable, document order preserved)
//!     → queried read-only by the matching layer
//! ```
//!
//! # Design Decisions
//! - The registry is a value: loaded once, never mutated, replaced wholesale
//!   on refresh
//! - Decode is purely structural; corrupt key tokens are caught later, by the
//!   matchers, so a registry can be loaded and inspected before use

pub mod loader;
pub mod schema;

pub use loader::{decode_registry, load_registry, read_registry, DecodeError};
pub use schema::{ServiceEntry, ServiceRegistry, ServicesList};
