//! IP network matching.
//!
//! # Responsibilities
//! - Parse CIDR key tokens (IPv4 and IPv6)
//! - Select the longest-prefix entry containing a queried network
//! - Abort the whole call on any malformed token (fail-fast)
//!
//! # Design Decisions
//! - Address families never mix: an IPv4 query against an IPv6 key is a
//!   plain non-match, not an error
//! - Containment is tested on masked network addresses, the same
//!   longest-prefix discipline as an IP routing table
//! - The query arrives as a parsed `IpNetwork`; turning raw CIDR text into
//!   one is the caller's job

use ipnetwork::IpNetwork;

use crate::matching::specificity::longer_prefix;
use crate::matching::types::{MatchError, MatchResult};
use crate::registry::schema::{ServiceEntry, ServiceRegistry};

impl ServiceRegistry {
    /// Find the service URLs authoritative for an IP network.
    ///
    /// Scans entries in document order and returns the URL list of the entry
    /// whose matching key has the longest prefix; ties keep the earlier
    /// entry. No match yields an empty slice, not an error. Any malformed
    /// CIDR token anywhere in the registry fails the call.
    pub fn match_ip_network(&self, network: IpNetwork) -> MatchResult<&[String]> {
        let mut best: Option<(IpNetwork, &ServiceEntry)> = None;

        for entry in &self.services {
            for key in &entry.keys {
                let prefix: IpNetwork = key.parse().map_err(|source| MatchError::InvalidCidr {
                    token: key.clone(),
                    source,
                })?;
                if !covers(&prefix, &network) {
                    continue;
                }
                let more_specific = match &best {
                    Some((current, _)) => longer_prefix(&prefix, current),
                    None => true,
                };
                if more_specific {
                    best = Some((prefix, entry));
                }
            }
        }

        Ok(best.map(|(_, entry)| entry.urls.as_slice()).unwrap_or(&[]))
    }
}

/// Full containment: the whole address range of `network` lies inside `key`.
/// Mixed address families never match.
fn covers(key: &IpNetwork, network: &IpNetwork) -> bool {
    match (key, network) {
        (IpNetwork::V4(key), IpNetwork::V4(network)) => {
            key.prefix() <= network.prefix() && key.contains(network.network())
        }
        (IpNetwork::V6(key), IpNetwork::V6(network)) => {
            key.prefix() <= network.prefix() && key.contains(network.network())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::schema::ServiceEntry;

    fn registry(services: Vec<ServiceEntry>) -> ServiceRegistry {
        ServiceRegistry {
            services,
            ..Default::default()
        }
    }

    fn net(s: &str) -> IpNetwork {
        s.parse().unwrap()
    }

    #[test]
    fn test_matches_ipv6_network_by_longest_prefix() {
        let registry = registry(vec![
            ServiceEntry::new(
                ["2001:0200::/23", "2001:db8::/32"],
                ["https://rir2.example.com/myrdap/"],
            ),
            ServiceEntry::new(["2600::/16", "2100:ffff::/32"], ["http://example.org/"]),
            ServiceEntry::new(
                ["2001:0200:1000::/36"],
                ["https://example.net/rdaprir2/", "http://example.net/rdaprir2/"],
            ),
        ]);

        let urls = registry.match_ip_network(net("2001:0200:1000::/48")).unwrap();
        assert_eq!(
            urls,
            ["https://example.net/rdaprir2/", "http://example.net/rdaprir2/"]
        );
    }

    #[test]
    fn test_matches_ipv4_network() {
        let registry = registry(vec![
            ServiceEntry::new(["1.0.0.0/8", "192.0.0.0/8"], ["https://rir1.example.com/myrdap/"]),
            ServiceEntry::new(["28.2.0.0/16", "192.0.2.0/24"], ["http://example.org/"]),
            ServiceEntry::new(
                ["28.3.0.0/16"],
                ["https://example.net/rdaprir2/", "http://example.net/rdaprir2/"],
            ),
        ]);

        let urls = registry.match_ip_network(net("192.0.2.1/25")).unwrap();
        assert_eq!(urls, ["http://example.org/"]);
    }

    #[test]
    fn test_containment_requires_full_range_not_overlap() {
        // 10.0.0.0/7 overlaps 10.0.0.0/8 but is not contained by it.
        let registry = registry(vec![ServiceEntry::new(["10.0.0.0/8"], ["http://a.example/"])]);
        assert!(registry.match_ip_network(net("10.0.0.0/7")).unwrap().is_empty());
        assert_eq!(
            registry.match_ip_network(net("10.1.0.0/16")).unwrap(),
            ["http://a.example/"]
        );
    }

    #[test]
    fn test_family_isolation() {
        let registry = registry(vec![
            ServiceEntry::new(["::/0"], ["http://v6.example/"]),
            ServiceEntry::new(["0.0.0.0/0"], ["http://v4.example/"]),
        ]);

        assert_eq!(
            registry.match_ip_network(net("192.0.2.0/24")).unwrap(),
            ["http://v4.example/"]
        );
        assert_eq!(
            registry.match_ip_network(net("2001:db8::/32")).unwrap(),
            ["http://v6.example/"]
        );
    }

    #[test]
    fn test_prefix_tie_keeps_earlier_entry() {
        let registry = registry(vec![
            ServiceEntry::new(["192.0.2.0/24"], ["http://first.example/"]),
            ServiceEntry::new(["192.0.2.0/24"], ["http://second.example/"]),
        ]);
        assert_eq!(
            registry.match_ip_network(net("192.0.2.0/26")).unwrap(),
            ["http://first.example/"]
        );
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let registry = registry(vec![ServiceEntry::new(["192.0.2.0/24"], ["http://a.example/"])]);
        assert!(registry.match_ip_network(net("198.51.100.0/24")).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_cidr_fails_whole_call() {
        let registry = registry(vec![
            ServiceEntry::new(["192.0.2.0/24"], ["http://valid.example/"]),
            ServiceEntry::new(["192.0.2.0/99"], Vec::<String>::new()),
        ]);
        let err = registry.match_ip_network(net("192.0.2.0/24")).unwrap_err();
        assert!(matches!(err, MatchError::InvalidCidr { .. }));
        assert_eq!(err.token(), "192.0.2.0/99");
    }
}
