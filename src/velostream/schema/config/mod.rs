//! Schema Registry client configuration
//!
//! - `keys`: the well-known property names and their metadata
//! - `store`: the ordered, string-backed property store with typed accessors
//! - `convert`: text <-> typed value projections used by the store
//! - `settings`: consumer-side resolution with defaults and credentials applied
//! - `error`: error taxonomy shared by all of the above

pub mod convert;
pub mod error;
pub mod keys;
pub mod settings;
pub mod store;

pub use error::{PropertyError, PropertyResult};
pub use keys::{
    PropertyType, WellKnownKey, DEFAULT_MAX_CACHED_SCHEMAS, DEFAULT_REQUEST_TIMEOUT_MS,
    KEY_PREFIX, SCHEMA_REGISTRY_BASIC_AUTH_CREDENTIALS_SOURCE,
    SCHEMA_REGISTRY_BASIC_AUTH_USER_INFO, SCHEMA_REGISTRY_MAX_CACHED_SCHEMAS,
    SCHEMA_REGISTRY_REQUEST_TIMEOUT_MS, SCHEMA_REGISTRY_URL,
};
pub use settings::{BasicAuthCredentialsSource, RegistryAuth, RegistryClientSettings};
pub use store::{Entries, SchemaRegistryConfig};
