//! Specificity ranking for overlapping registry keys.
//!
//! # Design Decisions
//! - Published registries are not supposed to contain overlapping keys, but
//!   matching must stay deterministic when they do: the most specific key
//!   wins (smallest AS span, longest IP prefix)
//! - Both comparisons are strict, so a document-order scan keeps the earliest
//!   entry on a tie

use ipnetwork::IpNetwork;

use crate::matching::asn::AsRange;

/// Returns true if `candidate` covers strictly fewer AS numbers than `best`.
pub fn narrower_as_range(candidate: &AsRange, best: &AsRange) -> bool {
    candidate.span() < best.span()
}

/// Returns true if `candidate` is a strictly more specific prefix than `best`.
pub fn longer_prefix(candidate: &IpNetwork, best: &IpNetwork) -> bool {
    candidate.prefix() > best.prefix()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(begin: u32, end: u32) -> AsRange {
        AsRange { begin, end }
    }

    fn prefix(s: &str) -> IpNetwork {
        s.parse().unwrap()
    }

    #[test]
    fn test_smaller_span_is_narrower() {
        assert!(narrower_as_range(&range(100, 110), &range(100, 200)));
        assert!(!narrower_as_range(&range(100, 200), &range(100, 110)));
    }

    #[test]
    fn test_equal_span_is_not_narrower() {
        assert!(!narrower_as_range(&range(100, 110), &range(500, 510)));
    }

    #[test]
    fn test_longer_prefix_is_more_specific() {
        assert!(longer_prefix(&prefix("192.0.2.0/25"), &prefix("192.0.2.0/24")));
        assert!(!longer_prefix(&prefix("192.0.0.0/8"), &prefix("192.0.2.0/24")));
        assert!(longer_prefix(
            &prefix("2001:0200:1000::/36"),
            &prefix("2001:0200::/23")
        ));
    }

    #[test]
    fn test_equal_prefix_is_not_more_specific() {
        assert!(!longer_prefix(&prefix("10.0.0.0/8"), &prefix("11.0.0.0/8")));
    }
}
