//! Matcher error definitions.

use thiserror::Error;

/// Errors that can occur while matching a resource against registry keys.
///
/// A single malformed key fails the whole call: a registry containing one
/// corrupt entry is not trusted for partial answers.
#[derive(Debug, Error)]
pub enum MatchError {
    /// An AS key is not of the "begin-end" form.
    #[error("invalid AS range {token:?}: missing '-' separator")]
    InvalidAsRange { token: String },

    /// An AS range bound is not an unsigned integer.
    #[error("invalid AS range {token:?}: {source}")]
    InvalidAsNumber {
        token: String,
        source: std::num::ParseIntError,
    },

    /// A network key is not a valid CIDR prefix.
    #[error("invalid CIDR {token:?}: {source}")]
    InvalidCidr {
        token: String,
        source: ipnetwork::IpNetworkError,
    },
}

impl MatchError {
    /// The registry key token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            MatchError::InvalidAsRange { token }
            | MatchError::InvalidAsNumber { token, .. }
            | MatchError::InvalidCidr { token, .. } => token,
        }
    }
}

/// Result type for match operations.
pub type MatchResult<T> = Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_token() {
        let err = MatchError::InvalidAsRange {
            token: "64512".to_string(),
        };
        assert!(err.to_string().contains("64512"));
        assert_eq!(err.token(), "64512");
    }
}
