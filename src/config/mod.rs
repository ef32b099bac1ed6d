//! Endpoint configuration subsystem.
//!
//! # Data Flow
//! ```text
//! endpoint document (YAML bytes)
//!     → schema.rs (strict decode into raw groups)
//!     → validation.rs (modes, then strict/discovery conflicts)
//!     → loader.rs (append flag groups: --endpoint / --endpoint.sd-files, --endpoint-strict)
//!     → validation.rs (address uniqueness across every group)
//!     → Vec<EndpointGroup> (validated, owned by the caller)
//! ```
//!
//! # Design Decisions
//! - Loading is a pure function of its inputs; no I/O, no shared state
//! - Unknown keys in the document are errors, not ignored
//! - Modes are a closed enum; anything else is rejected before other checks
//! - Group names are informational and may repeat

pub mod discovery;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use discovery::{FileSdConfig, FileSdError};
pub use error::{ConfigError, ConfigResult};
pub use loader::load_config;
pub use schema::EndpointGroup;
pub use schema::EndpointMode;
pub use schema::TlsConfiguration;
