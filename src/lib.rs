//! Store API endpoint configuration for the query layer.
//!
//! Merges an endpoint-group document with flag-supplied endpoints into one
//! validated list of [`EndpointGroup`]s.

pub mod config;
pub mod observability;

pub use config::{load_config, ConfigError, EndpointGroup, EndpointMode, FileSdConfig, TlsConfiguration};
