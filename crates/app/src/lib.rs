//! Admin Probe - composition root
//!
//! Wires the reqwest adapter, console reporter and system clock into a
//! [`DashboardRun`] and executes it.

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use probe_application::DashboardRun;
use probe_application::ports::HttpClientError;
use probe_domain::RunSummary;
use probe_infrastructure::{
    ConfigError, ConsoleReporter, HarnessConfig, ReqwestHttpClient, SystemClock,
};
use thiserror::Error;

/// Failures that stop the probe before any check runs.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    Client(#[from] HttpClientError),
}

/// Runs every suite against `config.base_url`, writing the report to `out`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the HTTP client
/// cannot be created. Failing checks are not errors; they are counted in
/// the returned summary.
pub async fn run_probe<W: Write>(config: &HarnessConfig, out: W) -> Result<RunSummary, ProbeError> {
    config.validate()?;
    let client = Arc::new(ReqwestHttpClient::new(config)?);
    let mut run = DashboardRun::new(
        client,
        ConsoleReporter::new(out),
        SystemClock::new(),
        config.base_url.as_str(),
    );
    Ok(run.run().await)
}

/// Writes the start-up failure to `err` and returns the failing exit code.
pub fn report_startup_failure<W: Write>(error: &ProbeError, mut err: W) -> ExitCode {
    if let Err(e) = writeln!(err, "Error: {error}") {
        tracing::warn!(error = %e, "failed to write start-up failure");
    }
    ExitCode::FAILURE
}
