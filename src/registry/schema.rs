//! Registry document schema definitions.
//!
//! This module defines the parsed, in-memory shape of a bootstrap service
//! registry. All types derive Serde traits for decoding from the published
//! JSON documents.

use serde::{Deserialize, Serialize};

/// A parsed bootstrap service registry document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceRegistry {
    /// Schema version of the document (e.g., "1.0").
    pub version: String,

    /// Publication timestamp (ISO-8601, kept verbatim).
    pub publication: String,

    /// Free-text description of the registry.
    pub description: String,

    /// Service entries in document order.
    pub services: ServicesList,
}

/// The ordered sequence of service entries. Order carries no business
/// meaning; the matchers use it only as a final tie-break.
pub type ServicesList = Vec<ServiceEntry>;

/// One registry row: resource keys and the service URLs that own them.
///
/// On the wire an entry is a 2-element array, the key list first and the URL
/// list second. Both lists keep their published order, and URLs are passed
/// through verbatim (callers prefer earlier entries by convention of the
/// source data).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "EntryWire", into = "EntryWire")]
pub struct ServiceEntry {
    /// AS-range ("begin-end") or CIDR ("address/prefixlen") tokens.
    pub keys: Vec<String>,

    /// Candidate service URLs for the keyed resources.
    pub urls: Vec<String>,
}

/// Wire form of a service entry. Serde rejects any arity other than two, so
/// malformed rows surface as structural decode errors.
type EntryWire = (Vec<String>, Vec<String>);

impl From<EntryWire> for ServiceEntry {
    fn from((keys, urls): EntryWire) -> Self {
        Self { keys, urls }
    }
}

impl From<ServiceEntry> for EntryWire {
    fn from(entry: ServiceEntry) -> Self {
        (entry.keys, entry.urls)
    }
}

impl ServiceEntry {
    /// Build an entry from key and URL tokens.
    pub fn new<K, U>(keys: K, urls: U) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_shape() {
        let entry: ServiceEntry =
            serde_json::from_str(r#"[["64512-65534"], ["https://example.net/rdap/"]]"#).unwrap();
        assert_eq!(entry.keys, vec!["64512-65534"]);
        assert_eq!(entry.urls, vec!["https://example.net/rdap/"]);
    }

    #[test]
    fn test_entry_wrong_arity_rejected() {
        let three = r#"[["1-2"], ["https://a/"], ["extra"]]"#;
        assert!(serde_json::from_str::<ServiceEntry>(three).is_err());

        let one = r#"[["1-2"]]"#;
        assert!(serde_json::from_str::<ServiceEntry>(one).is_err());
    }

    #[test]
    fn test_entry_non_string_elements_rejected() {
        let numeric = r#"[[42], ["https://a/"]]"#;
        assert!(serde_json::from_str::<ServiceEntry>(numeric).is_err());
    }

    #[test]
    fn test_entry_reencodes_as_nested_arrays() {
        let entry = ServiceEntry::new(["10000-12000", "300000-400000"], ["http://example.org/"]);
        let encoded = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            encoded,
            r#"[["10000-12000","300000-400000"],["http://example.org/"]]"#
        );
    }
}
