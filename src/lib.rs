//! # velostream-registry-config
//!
//! Typed configuration for Schema Registry clients. Values can be set through
//! named, typed properties or through raw string keys, and are always handed
//! to the client as one ordered set of string pairs.
//!
//! ## Quick Start
//!
//! ```rust
//! use velostream_registry_config::{RegistryClientSettings, SchemaRegistryConfig};
//!
//! let mut config = SchemaRegistryConfig::new();
//! config.set_url(Some("http://a:8081,http://b:8081"));
//! config.set_basic_auth_user_info(Some("alice:secret"));
//! config.set("client.rack", "eu-west-1a");
//!
//! for (key, value) in config.entries() {
//!     println!("{} = {}", key, value);
//! }
//!
//! let settings = RegistryClientSettings::from_config(&config)?;
//! assert_eq!(settings.urls.len(), 2);
//! assert_eq!(settings.max_cached_schemas, 1000);
//! # Ok::<(), velostream_registry_config::PropertyError>(())
//! ```

pub mod velostream;

pub use velostream::schema::config::{
    BasicAuthCredentialsSource, Entries, PropertyError, PropertyResult, PropertyType,
    RegistryAuth, RegistryClientSettings, SchemaRegistryConfig, WellKnownKey,
};
