//! Reporter port

use chrono::{DateTime, Utc};
use probe_domain::{RunSummary, TestResult};

/// Port for presenting run progress and the final summary.
///
/// Calls arrive in run order: `run_started`, then for each suite one
/// `suite_started` followed by its results, then `run_finished`.
pub trait Reporter {
    /// A run against `base_url` has started.
    fn run_started(&mut self, base_url: &str, at: DateTime<Utc>);

    /// A suite with the given title is about to run.
    fn suite_started(&mut self, title: &str);

    /// A check has been recorded.
    fn result_recorded(&mut self, result: &TestResult);

    /// The run is over.
    fn run_finished(&mut self, summary: &RunSummary, at: DateTime<Utc>);
}
