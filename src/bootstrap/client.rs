//! Bootstrap registry retrieval.
//!
//! # Responsibilities
//! - Fetch the published bootstrap files over HTTP(S)
//! - Feed the raw bytes to the registry decode contract
//! - Surface transport and status failures without retrying (retry and
//!   fallback policy belong to the caller)

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::registry::{decode_registry, DecodeError, ServiceRegistry};

/// Default location of the published bootstrap files.
pub const DEFAULT_BASE_URL: &str = "https://data.iana.org/rdap/";

/// Which published bootstrap file to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    Asn,
    Ipv4,
    Ipv6,
}

impl RegistryKind {
    /// File name under the bootstrap base URL.
    pub fn file_name(&self) -> &'static str {
        match self {
            RegistryKind::Asn => "asn.json",
            RegistryKind::Ipv4 => "ipv4.json",
            RegistryKind::Ipv6 => "ipv6.json",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegistryKind::Asn => "asn",
            RegistryKind::Ipv4 => "ipv4",
            RegistryKind::Ipv6 => "ipv6",
        };
        f.write_str(name)
    }
}

impl FromStr for RegistryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asn" => Ok(RegistryKind::Asn),
            "ipv4" => Ok(RegistryKind::Ipv4),
            "ipv6" => Ok(RegistryKind::Ipv6),
            other => Err(format!(
                "unknown registry kind {other:?} (expected asn, ipv4 or ipv6)"
            )),
        }
    }
}

/// Errors that can occur while retrieving a bootstrap registry.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The configured base URL is not a valid URL.
    #[error("bootstrap base URL error: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The HTTP request failed (transport, timeout).
    #[error("bootstrap request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("bootstrap file {file} returned status {status}")]
    Status {
        file: &'static str,
        status: reqwest::StatusCode,
    },

    /// The fetched document failed the structural decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// HTTP client for the published bootstrap files.
#[derive(Debug, Clone)]
pub struct BootstrapClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BootstrapClient {
    /// Create a client for the given base URL.
    ///
    /// The base URL must end with a slash for the file names to join under
    /// it, matching how the registries are published.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BootstrapError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Fetch and decode one bootstrap file.
    pub async fn fetch(&self, kind: RegistryKind) -> Result<ServiceRegistry, BootstrapError> {
        let bytes = self.fetch_raw(kind).await?;
        Ok(decode_registry(&bytes)?)
    }

    /// Fetch one bootstrap file without decoding it.
    pub async fn fetch_raw(&self, kind: RegistryKind) -> Result<Vec<u8>, BootstrapError> {
        let url = self.base_url.join(kind.file_name())?;
        tracing::debug!(url = %url, "Fetching bootstrap registry");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BootstrapError::Status {
                file: kind.file_name(),
                status,
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(kind = %kind, bytes = body.len(), "Bootstrap registry fetched");
        Ok(body.to_vec())
    }
}
