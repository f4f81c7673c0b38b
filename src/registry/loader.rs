//! Registry document loading and decoding.

use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::registry::schema::ServiceRegistry;

/// Error type for registry decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading the document failed.
    #[error("registry read error: {0}")]
    Io(#[from] std::io::Error),

    /// The document does not conform to the expected shape.
    #[error("registry parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Decode a registry document from raw bytes.
///
/// Structural decode only: the nested-array shape must hold, but key tokens
/// are not interpreted here. The matchers parse them on demand, so a document
/// with well-formed JSON and corrupt range tokens still decodes.
pub fn decode_registry(bytes: &[u8]) -> Result<ServiceRegistry, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode a registry document from a reader.
pub fn read_registry(reader: impl Read) -> Result<ServiceRegistry, DecodeError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load and decode a registry document from disk.
pub fn load_registry(path: &Path) -> Result<ServiceRegistry, DecodeError> {
    let bytes = fs::read(path)?;
    decode_registry(&bytes)
}
