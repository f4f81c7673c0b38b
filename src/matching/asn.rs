//! AS number matching.
//!
//! # Responsibilities
//! - Parse "begin-end" range tokens
//! - Select the most specific entry containing a queried AS number
//! - Abort the whole call on any malformed token (fail-fast)

use crate::matching::specificity::narrower_as_range;
use crate::matching::types::{MatchError, MatchResult};
use crate::registry::schema::{ServiceEntry, ServiceRegistry};

/// An inclusive range of AS numbers, parsed from a "begin-end" key token.
///
/// The type does not require `begin <= end`; an inverted range simply never
/// contains anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsRange {
    pub begin: u32,
    pub end: u32,
}

impl AsRange {
    /// Parse a range token, splitting on the first '-'.
    pub fn parse(token: &str) -> MatchResult<Self> {
        let (begin, end) = token.split_once('-').ok_or_else(|| MatchError::InvalidAsRange {
            token: token.to_string(),
        })?;
        Ok(Self {
            begin: parse_bound(begin, token)?,
            end: parse_bound(end, token)?,
        })
    }

    /// Inclusive containment check.
    pub fn contains(&self, asn: u32) -> bool {
        self.begin <= asn && asn <= self.end
    }

    /// Width of the range; smaller is more specific.
    pub fn span(&self) -> u32 {
        self.end.saturating_sub(self.begin)
    }
}

fn parse_bound(bound: &str, token: &str) -> MatchResult<u32> {
    bound.parse().map_err(|source| MatchError::InvalidAsNumber {
        token: token.to_string(),
        source,
    })
}

impl ServiceRegistry {
    /// Find the service URLs authoritative for an AS number.
    ///
    /// Scans entries in document order and returns the URL list of the entry
    /// whose matching range covers the fewest AS numbers; ties keep the
    /// earlier entry. No match yields an empty slice, not an error. Any
    /// malformed range token anywhere in the registry fails the call.
    pub fn match_as(&self, asn: u32) -> MatchResult<&[String]> {
        let mut best: Option<(AsRange, &ServiceEntry)> = None;

        for entry in &self.services {
            for key in &entry.keys {
                let range = AsRange::parse(key)?;
                if !range.contains(asn) {
                    continue;
                }
                let more_specific = match &best {
                    Some((current, _)) => narrower_as_range(&range, current),
                    None => true,
                };
                if more_specific {
                    best = Some((range, entry));
                }
            }
        }

        Ok(best.map(|(_, entry)| entry.urls.as_slice()).unwrap_or(&[]))
    }
}
