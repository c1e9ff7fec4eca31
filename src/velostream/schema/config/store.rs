//! Typed property store for Schema Registry client configuration
//!
//! `SchemaRegistryConfig` keeps a single ordered `String -> String` mapping.
//! Typed accessors are views over that mapping: setters stringify into it,
//! getters parse out of it on every read. There is no second copy of any value.

use super::convert::{self, parse_optional};
use super::error::{PropertyResult, REDACTED};
use super::keys::{
    is_sensitive_key, SCHEMA_REGISTRY_BASIC_AUTH_CREDENTIALS_SOURCE,
    SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO, SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS,
    SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS, SCHEMA_REGISTRY_URL,
};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;

/// Configuration for a Schema Registry client
///
/// Entries enumerate in the order their keys were first assigned. Assigning
/// an existing key replaces the value without moving it; removing a key and
/// assigning it again places it at the end.
///
/// Mutation takes `&mut self`, so the store cannot be changed from several
/// threads without the caller wrapping it in a lock. The usual pattern is to
/// build it on one thread and then hand it to the client constructor for
/// read-only use.
///
/// ```
/// use velostream_registry_config::SchemaRegistryConfig;
///
/// let mut config = SchemaRegistryConfig::new();
/// config.set_url(Some("http://a:8081,http://b:8081"));
/// config.set_max_cached_schemas(Some(500));
///
/// assert_eq!(config.max_cached_schemas().unwrap(), Some(500));
/// assert_eq!(config.request_timeout_ms().unwrap(), None);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistryConfig {
    properties: Vec<(String, String)>,
}

impl SchemaRegistryConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.properties.iter().position(|(k, _)| k == key)
    }

    // Raw accessors

    /// Store `value` under `key`, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        log::trace!("Setting schema registry property '{}'", key);
        match self.position(&key) {
            Some(index) => self.properties[index].1 = value,
            None => self.properties.push((key, value)),
        }
    }

    /// Store the string form of `value`, or remove `key` when `value` is `None`
    ///
    /// Every typed setter goes through here. Absence is decided before the
    /// value is converted to text, so `None` always means removal.
    pub fn set_or_remove<V: fmt::Display>(&mut self, key: &str, value: Option<V>) {
        match value {
            Some(value) => self.set(key, value.to_string()),
            None => {
                self.remove(key);
            }
        }
    }

    /// Stored text for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove `key`, returning its previous value. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.position(key)?;
        log::trace!("Removing schema registry property '{}'", key);
        Some(self.properties.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }

    /// Iterate over `(key, value)` pairs in insertion order
    ///
    /// Each call starts a fresh traversal of the current contents.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.properties.iter(),
        }
    }

    /// Owned copy of every entry, in insertion order
    pub fn to_map(&self) -> Vec<(String, String)> {
        self.properties.clone()
    }

    // Typed accessors

    /// Read `key` as a base-10 integer
    pub fn get_int(&self, key: &str) -> PropertyResult<Option<i32>> {
        parse_optional(key, self.get(key), convert::parse_int)
    }

    pub fn set_int(&mut self, key: &str, value: Option<i32>) {
        self.set_or_remove(key, value.map(convert::format_int));
    }

    /// Read `key` as `true`/`false` (case-insensitive)
    pub fn get_bool(&self, key: &str) -> PropertyResult<Option<bool>> {
        parse_optional(key, self.get(key), convert::parse_bool)
    }

    pub fn set_bool(&mut self, key: &str, value: Option<bool>) {
        self.set_or_remove(key, value.map(convert::format_bool));
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)
    }

    pub fn set_string(&mut self, key: &str, value: Option<&str>) {
        self.set_or_remove(key, value);
    }

    // Well-known properties

    /// Comma-separated list of registry URLs
    pub fn url(&self) -> Option<&str> {
        self.get_string(SCHEMA_REGISTRY_URL)
    }

    pub fn set_url(&mut self, url: Option<&str>) {
        self.set_string(SCHEMA_REGISTRY_URL, url);
    }

    /// Request timeout in milliseconds. Consumers default to 30000 when absent.
    pub fn request_timeout_ms(&self) -> PropertyResult<Option<i32>> {
        self.get_int(SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS)
    }

    pub fn set_request_timeout_ms(&mut self, timeout_ms: Option<i32>) {
        self.set_int(SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS, timeout_ms);
    }

    /// Schema cache capacity. Consumers default to 1000 when absent.
    pub fn max_cached_schemas(&self) -> PropertyResult<Option<i32>> {
        self.get_int(SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS)
    }

    pub fn set_max_cached_schemas(&mut self, max: Option<i32>) {
        self.set_int(SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS, max);
    }

    pub fn basic_auth_credentials_source(&self) -> Option<&str> {
        self.get_string(SCHEMA_REGISTRY_BASIC_AUTH_CREDENTIALS_SOURCE)
    }

    pub fn set_basic_auth_credentials_source(&mut self, source: Option<&str>) {
        self.set_string(SCHEMA_REGISTRY_BASIC_AUTH_CREDENTIALS_SOURCE, source);
    }

    /// Basic auth credentials as `{username}:{password}`
    pub fn basic_auth_user_info(&self) -> Option<&str> {
        self.get_string(SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO)
    }

    pub fn set_basic_auth_user_info(&mut self, user_info: Option<&str>) {
        self.set_string(SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO, user_info);
    }
}

impl fmt::Debug for SchemaRegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|(k, v)| {
                if is_sensitive_key(k) {
                    (k, REDACTED)
                } else {
                    (k, v)
                }
            }))
            .finish()
    }
}

/// Iterator over the entries of a [`SchemaRegistryConfig`]
#[derive(Clone)]
pub struct Entries<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a SchemaRegistryConfig {
    type Item = (&'a str, &'a str);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for SchemaRegistryConfig {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SchemaRegistryConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        config.extend(iter);
        config
    }
}

impl Serialize for SchemaRegistryConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries())
    }
}

impl<'de> Deserialize<'de> for SchemaRegistryConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = SchemaRegistryConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string property names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut config = SchemaRegistryConfig::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    config.set(key, value);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}
