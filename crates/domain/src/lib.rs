//! Probe Domain - Core types for the admin dashboard API probe
//!
//! This crate defines the request/response model, the dashboard contract
//! the probe checks against, and the test result types.
//! All types here are pure Rust with no I/O dependencies.

pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod request;
pub mod response;
pub mod testing;

pub use dashboard::{KycStatus, NewMerchant, ServiceStatus, StatusUpdate};
pub use error::{DomainError, DomainResult};
pub use request::{ApiRequest, HttpMethod, QueryParam};
pub use response::ResponseSpec;
pub use testing::{RunSummary, TestResult};
