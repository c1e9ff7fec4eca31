//! Schema Registry integration
//!
//! Only client configuration lives here. The registry HTTP client, schema
//! caching and serialization consume a finished [`config::SchemaRegistryConfig`].

pub mod config;

pub use config::{PropertyError, PropertyResult, SchemaRegistryConfig};
