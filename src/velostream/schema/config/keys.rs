//! Well-known Schema Registry property names
//!
//! These strings are part of the wire contract with the registry client and
//! must match exactly what downstream consumers look up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every registry property
pub const KEY_PREFIX: &str = "schema.registry.";

/// Comma-separated list of registry base URLs
pub const SCHEMA_REGISTRY_URL: &str = "schema.registry.url";

/// Request timeout in milliseconds
pub const SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS: &str = "schema.registry.request.timeout.ms";

/// Maximum number of schemas cached locally by the client
pub const SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS: &str = "schema.registry.max.cached.schemas";

/// Where basic auth credentials come from (`USER_INFO` or `SASL_INHERIT`)
pub const SCHEMA_REGISTRY_BASIC_AUTH_CREDENTIALS_SOURCE: &str =
    "schema.registry.basic.auth.credentials.source";

/// Basic auth credentials in the form `{username}:{password}`
pub const SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO: &str = "schema.registry.basic.auth.user.info";

/// Default request timeout applied by consumers when the key is absent
pub const DEFAULT_REQUEST_TIMEOUT_MS: i32 = 30_000;

/// Default schema cache capacity applied by consumers when the key is absent
pub const DEFAULT_MAX_CACHED_SCHEMAS: i32 = 1_000;

/// Logical type of a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Boolean,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Integer => "integer",
            PropertyType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties that have a dedicated typed accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownKey {
    Url,
    RequestTimeoutMs,
    MaxCachedSchemas,
    BasicAuthCredentialsSource,
    BasicAuthUserInfo,
}

impl WellKnownKey {
    /// Every well-known key, in documentation order
    pub const ALL: [WellKnownKey; 5] = [
        WellKnownKey::Url,
        WellKnownKey::RequestTimeoutMs,
        WellKnownKey::MaxCachedSchemas,
        WellKnownKey::BasicAuthCredentialsSource,
        WellKnownKey::BasicAuthUserInfo,
    ];

    /// The exact property name
    pub const fn as_str(&self) -> &'static str {
        match self {
            WellKnownKey::Url => SCHEMA_REGISTRY_URL,
            WellKnownKey::RequestTimeoutMs => SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS,
            WellKnownKey::MaxCachedSchemas => SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS,
            WellKnownKey::BasicAuthCredentialsSource => {
                SCHEMA_REGISTRY_BASIC_AUTH_CREDENTIALS_SOURCE
            }
            WellKnownKey::BasicAuthUserInfo => SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO,
        }
    }

    /// Reverse lookup from a property name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    pub const fn property_type(&self) -> PropertyType {
        match self {
            WellKnownKey::RequestTimeoutMs | WellKnownKey::MaxCachedSchemas => {
                PropertyType::Integer
            }
            _ => PropertyType::String,
        }
    }

    /// Default the consumer substitutes when the key is absent.
    ///
    /// The store never applies this itself; an absent key stays absent.
    pub const fn consumer_default(&self) -> Option<i32> {
        match self {
            WellKnownKey::RequestTimeoutMs => Some(DEFAULT_REQUEST_TIMEOUT_MS),
            WellKnownKey::MaxCachedSchemas => Some(DEFAULT_MAX_CACHED_SCHEMAS),
            _ => None,
        }
    }

    /// Values under this key must not appear in logs or debug output
    pub const fn is_sensitive(&self) -> bool {
        matches!(self, WellKnownKey::BasicAuthUserInfo)
    }
}

impl fmt::Display for WellKnownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for WellKnownKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// True if `key` holds a secret, whether well-known or a carried-through SASL password
pub fn is_sensitive_key(key: &str) -> bool {
    WellKnownKey::from_key(key).is_some_and(|k| k.is_sensitive()) || key.ends_with(".password")
}
