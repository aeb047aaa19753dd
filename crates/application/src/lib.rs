//! Probe Application - Ports, request wrapper, suites and run coordination
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP transport, clock, reporting)
//! - The HTTP request wrapper that turns every call into a checkable outcome
//! - The result recorder and the endpoint suites
//! - The run coordinator that executes the suites in order

pub mod execute_request;
pub mod ports;
pub mod recorder;
pub mod run;
pub mod suites;

#[cfg(test)]
pub(crate) mod test_support;

pub use execute_request::{CallFailure, CallOutcome, EXCERPT_CHARS, ExecuteRequest};
pub use ports::{Clock, HttpClient, HttpClientError, Reporter};
pub use recorder::ResultRecorder;
pub use run::DashboardRun;
pub use suites::{Suite, SuiteContext};
