// Common imports and helpers shared across unit tests

pub use velostream_registry_config::velostream::schema::config::{
    PropertyError, RegistryAuth, RegistryClientSettings, SchemaRegistryConfig,
    SCHEMA_REGISTRY_BASIC_AUTH_CREDENTIALS_SOURCE, SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO,
    SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS, SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS, SCHEMA_REGISTRY_URL,
};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Collect entries as owned pairs for easy comparison
pub fn entries_of(config: &SchemaRegistryConfig) -> Vec<(String, String)> {
    config
        .entries()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}
