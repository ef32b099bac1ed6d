//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader
//!     → tracing events (debug per synthesized group, info summary)
//!     → logging.rs subscriber (pretty or JSON on stderr)
//! ```
//!
//! # Design Decisions
//! - Structured fields instead of formatted messages
//! - stderr only; stdout carries the rendered configuration

pub mod logging;

pub use logging::LogFormat;
