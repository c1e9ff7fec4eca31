//! Client settings resolved from a [`SchemaRegistryConfig`] snapshot
//!
//! The store keeps absence distinguishable from defaults. This is the
//! consumer side: it reads one snapshot of the entries, substitutes the
//! documented defaults and turns credentials into something an HTTP client
//! constructor can use directly.

use super::error::{PropertyError, PropertyResult, REDACTED};
use super::keys::{
    WellKnownKey, DEFAULT_MAX_CACHED_SCHEMAS, DEFAULT_REQUEST_TIMEOUT_MS, KEY_PREFIX,
    SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO, SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS,
    SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS,
};
use super::store::SchemaRegistryConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// SASL username read when credentials are inherited
pub const SASL_USERNAME: &str = "sasl.username";

/// SASL password read when credentials are inherited
pub const SASL_PASSWORD: &str = "sasl.password";

/// Where basic auth credentials are taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BasicAuthCredentialsSource {
    /// `schema.registry.basic.auth.user.info`
    UserInfo,
    /// `sasl.username` / `sasl.password`
    SaslInherit,
}

impl BasicAuthCredentialsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BasicAuthCredentialsSource::UserInfo => "USER_INFO",
            BasicAuthCredentialsSource::SaslInherit => "SASL_INHERIT",
        }
    }
}

impl FromStr for BasicAuthCredentialsSource {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER_INFO" => Ok(BasicAuthCredentialsSource::UserInfo),
            "SASL_INHERIT" => Ok(BasicAuthCredentialsSource::SaslInherit),
            _ => Err(PropertyError::UnknownCredentialsSource {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BasicAuthCredentialsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication the client should send with each request
#[derive(Clone, PartialEq, Eq)]
pub enum RegistryAuth {
    None,
    Basic { username: String, password: String },
}

impl fmt::Debug for RegistryAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryAuth::None => f.write_str("None"),
            RegistryAuth::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &REDACTED)
                .finish(),
        }
    }
}

/// Everything a registry client needs, with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryClientSettings {
    /// Registry base URLs, in configured order
    pub urls: Vec<String>,
    pub request_timeout: Duration,
    pub max_cached_schemas: usize,
    pub auth: RegistryAuth,
    /// Entries outside the `schema.registry.` namespace, passed through untouched
    pub additional_properties: Vec<(String, String)>,
}

impl RegistryClientSettings {
    /// Resolve settings from the current contents of `config`
    pub fn from_config(config: &SchemaRegistryConfig) -> PropertyResult<Self> {
        let mut additional_properties = Vec::new();
        for (key, value) in config.entries() {
            if !key.starts_with(KEY_PREFIX) {
                additional_properties.push((key.to_string(), value.to_string()));
            } else if WellKnownKey::from_key(key).is_none() {
                log::warn!(
                    "Ignoring unrecognized schema registry property '{}'. Valid properties: {}",
                    key,
                    WellKnownKey::ALL.map(|k| k.as_str()).join(", ")
                );
            }
        }

        let urls = parse_urls(config.url());
        if urls.is_empty() {
            return Err(PropertyError::MissingUrl);
        }

        let timeout_ms = non_negative(
            SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS,
            config
                .request_timeout_ms()?
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )?;
        let max_cached_schemas = non_negative(
            SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS,
            config
                .max_cached_schemas()?
                .unwrap_or(DEFAULT_MAX_CACHED_SCHEMAS),
        )?;

        let auth = resolve_auth(config)?;

        log::debug!(
            "Resolved schema registry settings: {} url(s), timeout {}ms, cache {} schemas, basic auth {}",
            urls.len(),
            timeout_ms,
            max_cached_schemas,
            if matches!(auth, RegistryAuth::None) { "off" } else { "on" }
        );

        Ok(Self {
            urls,
            request_timeout: Duration::from_millis(timeout_ms as u64),
            max_cached_schemas: max_cached_schemas as usize,
            auth,
            additional_properties,
        })
    }
}

impl TryFrom<&SchemaRegistryConfig> for RegistryClientSettings {
    type Error = PropertyError;

    fn try_from(config: &SchemaRegistryConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

/// Split a comma-separated URL list, dropping blank items
pub fn parse_urls(raw: Option<&str>) -> Vec<String> {
    raw.map(|urls| {
        urls.split(',')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(|u| u.to_string())
            .collect()
    })
    .unwrap_or_default()
}

/// Split `username:password` at the first colon
pub fn parse_user_info(user_info: &str) -> PropertyResult<(String, String)> {
    match user_info.split_once(':') {
        Some((username, password)) if !username.is_empty() => {
            Ok((username.to_string(), password.to_string()))
        }
        _ => Err(PropertyError::InvalidUserInfo {
            key: SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO.to_string(),
        }),
    }
}

fn non_negative(key: &str, value: i32) -> PropertyResult<u32> {
    u32::try_from(value).map_err(|_| PropertyError::OutOfRange {
        key: key.to_string(),
        value: value as i64,
        reason: "must not be negative".to_string(),
    })
}

fn resolve_auth(config: &SchemaRegistryConfig) -> PropertyResult<RegistryAuth> {
    let source = config
        .basic_auth_credentials_source()
        .map(BasicAuthCredentialsSource::from_str)
        .transpose()?;
    let user_info = config.basic_auth_user_info();

    match (source, user_info) {
        (None, None) => Ok(RegistryAuth::None),
        (None | Some(BasicAuthCredentialsSource::UserInfo), Some(user_info)) => {
            let (username, password) = parse_user_info(user_info)?;
            Ok(RegistryAuth::Basic { username, password })
        }
        (Some(BasicAuthCredentialsSource::UserInfo), None) => {
            Err(PropertyError::ConflictingCredentials {
                reason: format!(
                    "credentials source is USER_INFO but '{}' is not set",
                    SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO
                ),
            })
        }
        (Some(BasicAuthCredentialsSource::SaslInherit), Some(_)) => {
            Err(PropertyError::ConflictingCredentials {
                reason: format!(
                    "'{}' must not be set when credentials source is SASL_INHERIT",
                    SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO
                ),
            })
        }
        (Some(BasicAuthCredentialsSource::SaslInherit), None) => {
            match (config.get(SASL_USERNAME), config.get(SASL_PASSWORD)) {
                (Some(username), Some(password)) => Ok(RegistryAuth::Basic {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
                _ => Err(PropertyError::ConflictingCredentials {
                    reason: format!(
                        "credentials source is SASL_INHERIT but '{}' and '{}' are not both set",
                        SASL_USERNAME, SASL_PASSWORD
                    ),
                }),
            }
        }
    }
}
