//! Admin Probe - Main Entry Point
//!
//! Runs the dashboard API checks once and exits 0 if all passed, 1 otherwise.

use std::process::ExitCode;

use admin_probe::{ProbeError, report_startup_failure, run_probe};
use probe_infrastructure::{HarnessConfig, init_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match start().await {
        Ok(code) => code,
        Err(e) => report_startup_failure(&e, std::io::stderr()),
    }
}

async fn start() -> Result<ExitCode, ProbeError> {
    let config = HarnessConfig::load()?;
    let summary = run_probe(&config, std::io::stdout()).await?;
    Ok(ExitCode::from(summary.exit_code()))
}
