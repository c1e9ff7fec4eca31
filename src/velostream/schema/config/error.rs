//! Schema Registry configuration errors
//!
//! Reading or removing an absent property is never an error. Everything here
//! surfaces synchronously at the accessor that hit the problem.

use super::keys::{is_sensitive_key, PropertyType};

/// Placeholder written in place of secret values
pub(crate) const REDACTED: &str = "<redacted>";

/// Error type for typed property access and client settings resolution
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    /// Stored text cannot be parsed as the type the accessor asked for
    #[error("Property '{key}' value '{value}' is not a valid {expected}")]
    Format {
        key: String,
        value: String,
        expected: PropertyType,
        #[source]
        source: Option<std::num::ParseIntError>,
    },

    /// No registry URL left after splitting `schema.registry.url`
    #[error("Property 'schema.registry.url' must contain at least one URL")]
    MissingUrl,

    /// User info is not of the form `username:password`
    #[error("Property '{key}' must be of the form 'username:password'")]
    InvalidUserInfo { key: String },

    /// Credentials source is neither `USER_INFO` nor `SASL_INHERIT`
    #[error(
        "Unknown basic auth credentials source '{value}'. Valid values: USER_INFO, SASL_INHERIT"
    )]
    UnknownCredentialsSource { value: String },

    /// Credential properties contradict each other
    #[error("Conflicting basic auth configuration: {reason}")]
    ConflictingCredentials { reason: String },

    /// Parsed value is outside what the client accepts
    #[error("Property '{key}' value {value} is out of range: {reason}")]
    OutOfRange {
        key: String,
        value: i64,
        reason: String,
    },
}

impl PropertyError {
    /// Build a `Format` error, hiding the value when the key holds a secret
    pub(crate) fn format(
        key: &str,
        value: &str,
        expected: PropertyType,
        source: Option<std::num::ParseIntError>,
    ) -> Self {
        let value = if is_sensitive_key(key) {
            REDACTED.to_string()
        } else {
            value.to_string()
        };
        PropertyError::Format {
            key: key.to_string(),
            value,
            expected,
            source,
        }
    }

    /// True for parse failures raised by typed getters
    pub fn is_format_error(&self) -> bool {
        matches!(self, PropertyError::Format { .. })
    }
}

/// Result type for property operations
pub type PropertyResult<T> = Result<T, PropertyError>;
