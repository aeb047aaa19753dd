//! Probe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading
//! and logging setup for the binary.

pub mod adapters;
pub mod config;
pub mod logging;
pub mod reporting;

pub use self::config::{ConfigError, DEFAULT_BASE_URL, HarnessConfig};
pub use adapters::{ReqwestHttpClient, SystemClock};
pub use logging::init_tracing;
pub use reporting::ConsoleReporter;
