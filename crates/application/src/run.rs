//! Run coordination.

use std::sync::Arc;

use probe_domain::{RunSummary, TestResult};

use crate::execute_request::ExecuteRequest;
use crate::ports::{Clock, HttpClient, Reporter};
use crate::recorder::ResultRecorder;
use crate::suites::{Suite, SuiteContext};

/// One probe run against the dashboard API.
///
/// Runs its suites one after another, awaiting every call before issuing
/// the next, and reports the summary at the end.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(ReqwestHttpClient::new(&config)?);
/// let reporter = ConsoleReporter::new(std::io::stdout());
/// let mut run = DashboardRun::new(client, reporter, SystemClock::new(), &config.base_url);
/// let summary = run.run().await;
/// ```
pub struct DashboardRun<C: HttpClient, R: Reporter, K: Clock> {
    api: ExecuteRequest<C>,
    recorder: ResultRecorder<R>,
    clock: K,
    base_url: String,
    suites: Vec<Suite>,
}

impl<C: HttpClient, R: Reporter, K: Clock> DashboardRun<C, R, K> {
    /// Creates a run of all suites.
    pub fn new(client: Arc<C>, reporter: R, clock: K, base_url: impl Into<String>) -> Self {
        Self {
            api: ExecuteRequest::new(client),
            recorder: ResultRecorder::new(reporter),
            clock,
            base_url: base_url.into(),
            suites: Suite::ALL.to_vec(),
        }
    }

    /// Restricts the run to `suites`, in the given order.
    #[must_use]
    pub fn with_suites(mut self, suites: impl IntoIterator<Item = Suite>) -> Self {
        self.suites = suites.into_iter().collect();
        self
    }

    /// Executes the suites and returns the summary.
    pub async fn run(&mut self) -> RunSummary {
        let started = self.clock.now();
        tracing::info!(base_url = %self.base_url, suites = self.suites.len(), "starting probe run");
        self.recorder
            .reporter_mut()
            .run_started(&self.base_url, started);

        for suite in self.suites.clone() {
            tracing::debug!(suite = suite.title(), "running suite");
            self.recorder.begin_suite(suite.title());
            let mut ctx = SuiteContext::new(&self.api, &mut self.recorder);
            suite.run(&mut ctx).await;
        }

        let summary = self.recorder.summary();
        let finished = self.clock.now();
        tracing::info!(
            passed = summary.passed,
            failed = summary.failed,
            elapsed_ms = (finished - started).num_milliseconds(),
            "probe run finished"
        );
        self.recorder
            .reporter_mut()
            .run_finished(&summary, finished);
        summary
    }

    /// Results recorded so far, in run order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        self.recorder.results()
    }

    /// Consumes the run, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.recorder.into_reporter()
    }
}
