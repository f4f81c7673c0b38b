//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! bootstrap resolver. All types derive Serde traits for deserialization
//! from config files, and every field has a default so a minimal (or
//! absent) config works.

use serde::{Deserialize, Serialize};

use crate::bootstrap::client::DEFAULT_BASE_URL;

/// Root configuration for the bootstrap resolver.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Where the published bootstrap files are fetched from.
    pub registry: RegistrySourceConfig,

    /// Caching of fetched registries.
    pub cache: CacheConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Registry source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistrySourceConfig {
    /// Base URL the bootstrap files are published under (trailing slash).
    pub base_url: String,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RegistrySourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Cache configuration for fetched registries.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable disk caching of fetched registries.
    pub enabled: bool,

    /// Directory the registry documents are persisted under.
    pub dir: String,

    /// Age in seconds beyond which a cached registry is refetched.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: ".rdap-bootstrap".to_string(),
            ttl_secs: 24 * 60 * 60,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
