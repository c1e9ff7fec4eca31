//! Unit tests for resolving client settings from a property store

use crate::unit::common::*;
use std::time::Duration;

fn config_with_url(url: &str) -> SchemaRegistryConfig {
    let mut config = SchemaRegistryConfig::new();
    config.set_url(Some(url));
    config
}

#[test]
fn test_settings_from_full_config() {
    init_logging();
    let mut config = config_with_url("http://a:8081, http://b:8081");
    config.set_request_timeout_ms(Some(10_000));
    config.set_max_cached_schemas(Some(250));
    config.set_basic_auth_credentials_source(Some("USER_INFO"));
    config.set_basic_auth_user_info(Some("alice:secret"));
    config.set("client.rack", "eu-west-1a");

    let settings = RegistryClientSettings::from_config(&config).unwrap();
    assert_eq!(settings.urls, vec!["http://a:8081", "http://b:8081"]);
    assert_eq!(settings.request_timeout, Duration::from_secs(10));
    assert_eq!(settings.max_cached_schemas, 250);
    assert_eq!(
        settings.auth,
        RegistryAuth::Basic {
            username: "alice".to_string(),
            password: "secret".to_string(),
        }
    );
    assert_eq!(
        settings.additional_properties,
        vec![pair("client.rack", "eu-west-1a")]
    );
}

#[test]
fn test_user_info_without_source_defaults_to_user_info() {
    let mut config = config_with_url("http://localhost:8081");
    config.set(SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO, "bob:hunter2");

    let settings = RegistryClientSettings::from_config(&config).unwrap();
    assert!(matches!(settings.auth, RegistryAuth::Basic { ref username, .. } if username == "bob"));
}

#[test]
fn test_invalid_user_info_does_not_leak_value() {
    let mut config = config_with_url("http://localhost:8081");
    config.set_basic_auth_user_info(Some("justasecret"));

    let err = RegistryClientSettings::from_config(&config).unwrap_err();
    assert!(matches!(err, PropertyError::InvalidUserInfo { .. }));
    assert!(!err.to_string().contains("justasecret"));
}

#[test]
fn test_unknown_credentials_source() {
    let mut config = config_with_url("http://localhost:8081");
    config.set(SCHEMA_REGISTRY_BASIC_AUTH_CREDENTIALS_SOURCE, "BEARER");

    let err = RegistryClientSettings::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        PropertyError::UnknownCredentialsSource { ref value } if value == "BEARER"
    ));
}

#[test]
fn test_unrecognized_registry_keys_are_not_passed_through() {
    init_logging();
    let mut config = config_with_url("http://localhost:8081");
    config.set("schema.registry.ssl.ca.location", "/etc/ca.pem");
    config.set("sasl.mechanism", "PLAIN");

    let settings = RegistryClientSettings::from_config(&config).unwrap();
    assert_eq!(
        settings.additional_properties,
        vec![pair("sasl.mechanism", "PLAIN")]
    );
}

#[test]
fn test_malformed_cache_size_fails_resolution() {
    let mut config = config_with_url("http://localhost:8081");
    config.set(SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS, "lots");

    let err = RegistryClientSettings::from_config(&config).unwrap_err();
    assert!(err.is_format_error());
}

#[test]
fn test_resolution_does_not_mutate_store() {
    let config = config_with_url("http://localhost:8081");
    let before = config.clone();
    RegistryClientSettings::from_config(&config).unwrap();

    assert_eq!(config, before);
    assert_eq!(config.request_timeout_ms().unwrap(), None);
}
