//! Shared registry handle with wholesale replacement.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::registry::ServiceRegistry;

/// A lock-free shared handle to the current registry.
///
/// Readers take a cheap snapshot; a refresh publishes a complete new
/// registry in one atomic swap. The registry itself is never mutated in
/// place, so matchers running against a snapshot need no synchronization.
#[derive(Debug)]
pub struct RegistryStore {
    current: ArcSwap<ServiceRegistry>,
}

impl RegistryStore {
    /// Create a store holding an initial registry.
    pub fn new(registry: ServiceRegistry) -> Self {
        Self {
            current: ArcSwap::from_pointee(registry),
        }
    }

    /// Snapshot of the current registry.
    pub fn current(&self) -> Arc<ServiceRegistry> {
        self.current.load_full()
    }

    /// Publish a replacement registry, returning the one it displaced.
    pub fn replace(&self, registry: ServiceRegistry) -> Arc<ServiceRegistry> {
        self.current.swap(Arc::new(registry))
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new(ServiceRegistry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ServiceEntry;

    fn registry_with_version(version: &str) -> ServiceRegistry {
        ServiceRegistry {
            version: version.to_string(),
            services: vec![ServiceEntry::new(["64512-65534"], ["https://example.net/rdap/"])],
            ..Default::default()
        }
    }

    #[test]
    fn test_replace_publishes_new_snapshot() {
        let store = RegistryStore::new(registry_with_version("1.0"));
        let before = store.current();
        assert_eq!(before.version, "1.0");

        let displaced = store.replace(registry_with_version("1.1"));
        assert_eq!(displaced.version, "1.0");
        assert_eq!(store.current().version, "1.1");

        // A snapshot taken before the swap stays valid and unchanged.
        assert_eq!(before.version, "1.0");
        assert_eq!(before.match_as(65000).unwrap().len(), 1);
    }

    #[test]
    fn test_snapshots_share_the_same_registry() {
        let store = RegistryStore::new(registry_with_version("1.0"));
        let a = store.current();
        let b = store.current();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
