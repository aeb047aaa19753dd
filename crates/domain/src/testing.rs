//! Test results and run summaries.
//!
//! A run produces an ordered sequence of [`TestResult`]s, one per check.
//! [`RunSummary`] is derived from that sequence once the run is over.

use serde::{Deserialize, Serialize};

/// Outcome of a single check against the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Human-readable check name (e.g. "GET /api/alerts - Status Filter").
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// What was observed; may be empty.
    pub details: String,
}

impl TestResult {
    /// Create a result.
    #[must_use]
    pub fn new(name: impl Into<String>, passed: bool, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            details: details.into(),
        }
    }

    /// Create a passed result.
    #[must_use]
    pub fn pass(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, true, details)
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(name, false, details)
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total number of checks.
    pub total: usize,
    /// Number of passed checks.
    pub passed: usize,
    /// Number of failed checks.
    pub failed: usize,
    /// Failed checks, in run order.
    pub failures: Vec<TestResult>,
}

impl RunSummary {
    /// Derive a summary from the recorded results.
    #[must_use]
    pub fn from_results(results: &[TestResult]) -> Self {
        let failures: Vec<TestResult> = results.iter().filter(|r| !r.passed).cloned().collect();
        let total = results.len();
        let failed = failures.len();

        Self {
            total,
            passed: total - failed,
            failed,
            failures,
        }
    }

    /// Check if every check passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get success rate as percentage.
    ///
    /// An empty run counts as fully successful.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Process exit code for this run: 0 when every check passed, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }
}
