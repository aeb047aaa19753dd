//! Result aggregation.

use probe_domain::{RunSummary, TestResult};

use crate::ports::Reporter;

/// Accumulates test results in arrival order.
///
/// Every recorded result is forwarded to the reporter immediately, so
/// progress shows up while the run is still going. Results are never
/// modified or removed once recorded.
#[derive(Debug)]
pub struct ResultRecorder<R: Reporter> {
    results: Vec<TestResult>,
    passed: usize,
    failed: usize,
    reporter: R,
}

impl<R: Reporter> ResultRecorder<R> {
    /// Creates an empty recorder that reports through `reporter`.
    pub const fn new(reporter: R) -> Self {
        Self {
            results: Vec::new(),
            passed: 0,
            failed: 0,
            reporter,
        }
    }

    /// Announces the next suite.
    pub fn begin_suite(&mut self, title: &str) {
        self.reporter.suite_started(title);
    }

    /// Records one check.
    pub fn record(&mut self, name: impl Into<String>, passed: bool, details: impl Into<String>) {
        let result = TestResult::new(name, passed, details);
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        tracing::debug!(name = %result.name, passed = result.passed, "check recorded");
        self.reporter.result_recorded(&result);
        self.results.push(result);
    }

    /// Results recorded so far, in run order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Number of passed checks so far.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failed checks so far.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Derives the summary of everything recorded so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_results(&self.results)
    }

    /// Mutable access to the reporter.
    pub const fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Consumes the recorder, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
