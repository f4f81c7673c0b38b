//! Resource matching over a loaded registry.
//!
//! # Data Flow
//! ```text
//! ServiceRegistry (immutable, document order preserved)
//!     → asn.rs / ip.rs (single pass over entries and keys)
//!     → specificity.rs (rank overlapping keys, smallest span / longest prefix)
//!     → URL list of the winning entry (empty slice when nothing matches)
//! ```
//!
//! # Design Decisions
//! - Matching is a pure function of (registry, query): no state across calls,
//!   safe to run concurrently against a shared registry
//! - One malformed key token fails the whole call rather than being skipped;
//!   a partially corrupt registry is not trusted for partial answers
//! - "Nothing matched" is a valid empty result, never an error

pub mod asn;
pub mod ip;
pub mod specificity;
pub mod types;

pub use asn::AsRange;
pub use types::{MatchError, MatchResult};
