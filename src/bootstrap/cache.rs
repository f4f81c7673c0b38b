//! Fetched-registry caching and persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dashmap::DashMap;

use crate::bootstrap::client::RegistryKind;
use crate::registry::{decode_registry, DecodeError, ServiceRegistry};

/// A cached registry together with the time it was stored.
#[derive(Debug, Clone)]
pub struct CachedRegistry {
    pub registry: Arc<ServiceRegistry>,
    /// Seconds since epoch at which the registry was stored.
    pub stored_at: u64,
}

impl CachedRegistry {
    /// Check whether the entry is younger than `max_age`.
    ///
    /// The cache never evicts on its own; when to refetch a stale registry
    /// is the caller's policy.
    pub fn is_fresh(&self, max_age: Duration) -> bool {
        epoch_secs().saturating_sub(self.stored_at) < max_age.as_secs()
    }
}

/// A thread-safe cache of fetched bootstrap registries, keyed by kind.
///
/// Optionally persists each registry document under a directory (one file
/// per kind, the published file name), so later runs can resolve without
/// touching the network.
#[derive(Clone, Default)]
pub struct RegistryCache {
    inner: Arc<DashMap<RegistryKind, CachedRegistry>>,
    persistence_dir: Option<PathBuf>,
}

const KINDS: [RegistryKind; 3] = [RegistryKind::Asn, RegistryKind::Ipv4, RegistryKind::Ipv6];

impl RegistryCache {
    /// Create a new empty cache.
    pub fn new(persistence_dir: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            persistence_dir,
        }
    }

    /// Load any previously persisted registries under `dir`.
    ///
    /// A missing directory or missing files yield an empty cache; a present
    /// but undecodable file is an error. Entry ages come from file
    /// modification times.
    pub fn load_from_disk(dir: &Path) -> Result<Self, DecodeError> {
        let cache = Self::new(Some(dir.to_path_buf()));

        for kind in KINDS {
            let path = dir.join(kind.file_name());
            if !path.exists() {
                continue;
            }
            let bytes = fs::read(&path)?;
            let registry = decode_registry(&bytes)?;
            let stored_at = file_epoch_secs(&path);
            cache.inner.insert(
                kind,
                CachedRegistry {
                    registry: Arc::new(registry),
                    stored_at,
                },
            );
        }

        if !cache.inner.is_empty() {
            tracing::info!(
                dir = %dir.display(),
                registries = cache.inner.len(),
                "Loaded cached bootstrap registries"
            );
        }
        Ok(cache)
    }

    /// Store a registry, returning the shared handle now held by the cache.
    pub fn insert(&self, kind: RegistryKind, registry: ServiceRegistry) -> Arc<ServiceRegistry> {
        let registry = Arc::new(registry);
        self.inner.insert(
            kind,
            CachedRegistry {
                registry: registry.clone(),
                stored_at: epoch_secs(),
            },
        );
        registry
    }

    /// Get a cached registry regardless of age.
    pub fn get(&self, kind: RegistryKind) -> Option<CachedRegistry> {
        self.inner.get(&kind).map(|r| r.value().clone())
    }

    /// Get a cached registry only if it is younger than `max_age`.
    pub fn get_fresh(&self, kind: RegistryKind, max_age: Duration) -> Option<Arc<ServiceRegistry>> {
        self.get(kind)
            .filter(|cached| cached.is_fresh(max_age))
            .map(|cached| cached.registry)
    }

    /// Persist all cached registries to the persistence directory.
    pub fn save_to_disk(&self) -> io::Result<()> {
        let Some(dir) = &self.persistence_dir else {
            return Ok(());
        };
        fs::create_dir_all(dir)?;

        for item in self.inner.iter() {
            let path = dir.join(item.key().file_name());
            let bytes = serde_json::to_vec(item.value().registry.as_ref())?;
            fs::write(&path, bytes)?;
        }
        tracing::info!(
            dir = %dir.display(),
            registries = self.inner.len(),
            "Persisted bootstrap registries"
        );
        Ok(())
    }

    /// Number of cached registries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn file_epoch_secs(path: &Path) -> u64 {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|mtime| mtime.duration_since(UNIX_EPOCH).ok())
        .map(|age| age.as_secs())
        .unwrap_or_else(epoch_secs)
}
