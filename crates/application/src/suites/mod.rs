//! Endpoint suites.
//!
//! One suite per resource area of the dashboard. Suites run strictly in
//! sequence; inside a suite, later checks may reuse ids obtained by earlier
//! ones. Each check records exactly one result through the
//! [`SuiteContext`].

mod alerts;
mod analytics;
mod edge_cases;
mod merchants;
mod overview;
mod settlements;
mod system_health;

use probe_domain::{ApiRequest, DomainResult, envelope};
use serde_json::Value;

use crate::execute_request::{CallOutcome, ExecuteRequest};
use crate::ports::{HttpClient, Reporter};
use crate::recorder::ResultRecorder;

/// The endpoint suites, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    /// `GET analytics/overview`.
    AnalyticsOverview,
    /// Merchant listing, filtering, lookup, creation and KYC updates.
    Merchants,
    /// Per-merchant and per-vertical analytics reports.
    AnalyticsReports,
    /// Alert listing, filtering and status updates.
    Alerts,
    /// Settlement listing and filtering.
    Settlements,
    /// `GET system-health`.
    SystemHealth,
    /// Unknown endpoints and permissive creation.
    EdgeCases,
}

impl Suite {
    /// All suites in the order a full run executes them.
    pub const ALL: [Self; 7] = [
        Self::AnalyticsOverview,
        Self::Merchants,
        Self::AnalyticsReports,
        Self::Alerts,
        Self::Settlements,
        Self::SystemHealth,
        Self::EdgeCases,
    ];

    /// Heading printed before the suite runs.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AnalyticsOverview => "Analytics Overview",
            Self::Merchants => "Merchants Endpoints",
            Self::AnalyticsReports => "Analytics Endpoints",
            Self::Alerts => "Alerts Endpoints",
            Self::Settlements => "Settlements Endpoint",
            Self::SystemHealth => "System Health Endpoint",
            Self::EdgeCases => "Edge Cases",
        }
    }

    /// Runs this suite's checks.
    pub async fn run<C: HttpClient, R: Reporter>(self, ctx: &mut SuiteContext<'_, C, R>) {
        match self {
            Self::AnalyticsOverview => overview::run(ctx).await,
            Self::Merchants => merchants::run(ctx).await,
            Self::AnalyticsReports => analytics::run(ctx).await,
            Self::Alerts => alerts::run(ctx).await,
            Self::Settlements => settlements::run(ctx).await,
            Self::SystemHealth => system_health::run(ctx).await,
            Self::EdgeCases => edge_cases::run(ctx).await,
        }
    }
}

/// What a suite works with: the request wrapper and the recorder.
pub struct SuiteContext<'a, C: HttpClient, R: Reporter> {
    api: &'a ExecuteRequest<C>,
    recorder: &'a mut ResultRecorder<R>,
}

impl<'a, C: HttpClient, R: Reporter> SuiteContext<'a, C, R> {
    /// Creates a context over the given wrapper and recorder.
    pub const fn new(api: &'a ExecuteRequest<C>, recorder: &'a mut ResultRecorder<R>) -> Self {
        Self { api, recorder }
    }

    /// Executes a prepared request.
    pub async fn call(&self, request: ApiRequest) -> CallOutcome {
        self.api.execute(&request).await
    }

    /// Executes a request whose construction may have failed (JSON bodies).
    pub async fn send(&self, request: DomainResult<ApiRequest>) -> CallOutcome {
        self.api.execute(&request?).await
    }

    /// GETs `path`, expecting 200.
    pub async fn get(&self, path: &str) -> CallOutcome {
        self.call(ApiRequest::get(path)).await
    }

    /// Records a passed check.
    pub fn pass(&mut self, name: &str, details: impl Into<String>) {
        self.recorder.record(name, true, details);
    }

    /// Records a failed check.
    pub fn fail(&mut self, name: &str, details: impl Into<String>) {
        self.recorder.record(name, false, details);
    }

    /// Records a check that only cares whether the call succeeded.
    ///
    /// Passes with `details` when the expected status and a JSON body came
    /// back; fails with the call failure otherwise.
    pub fn record_call(&mut self, name: &str, outcome: &CallOutcome, details: &str) {
        match outcome {
            Ok(_) => self.pass(name, details),
            Err(failure) => self.fail(name, failure.to_string()),
        }
    }
}

/// A filtered list call whose items must all carry `key == value`.
struct FilterCheck<'a> {
    name: &'a str,
    path: &'a str,
    key: &'a str,
    value: &'a str,
    noun: &'a str,
}

async fn filter_check<C: HttpClient, R: Reporter>(
    ctx: &mut SuiteContext<'_, C, R>,
    check: FilterCheck<'_>,
) {
    let request = ApiRequest::get(check.path).with_query(check.key, check.value);
    let body = match ctx.call(request).await {
        Ok(body) => body,
        Err(failure) => {
            ctx.fail(check.name, failure.to_string());
            return;
        }
    };

    let Some(items) = envelope::data_list(&body) else {
        ctx.fail(check.name, "Invalid response structure");
        return;
    };

    if envelope::all_match(items, check.key, check.value) {
        ctx.pass(
            check.name,
            format!("Filtered to {} {} {}", items.len(), check.value, check.noun),
        );
    } else {
        let strays = items
            .iter()
            .filter(|item| envelope::text(item, check.key) != Some(check.value))
            .count();
        ctx.fail(
            check.name,
            format!(
                "Filter not working correctly: {strays} of {} items without {} == {}",
                items.len(),
                check.key,
                check.value
            ),
        );
    }
}

/// Fetches a list endpoint that should not be empty.
///
/// Records a failure and returns `None` when the call fails or the list is
/// missing or empty. Success is left for the caller to record.
async fn non_empty_list<C: HttpClient, R: Reporter>(
    ctx: &mut SuiteContext<'_, C, R>,
    name: &str,
    path: &str,
    noun: &str,
) -> Option<Vec<Value>> {
    let body = match ctx.get(path).await {
        Ok(body) => body,
        Err(failure) => {
            ctx.fail(name, failure.to_string());
            return None;
        }
    };

    match envelope::data_list(&body) {
        Some(items) if !items.is_empty() => Some(items.to_vec()),
        _ => {
            ctx.fail(name, format!("No {noun} returned"));
            None
        }
    }
}

/// Fetches a list endpoint and returns the id of its first entry.
///
/// This is the baseline for suites whose later checks address a single
/// resource; `None` means the baseline failure is already recorded.
async fn leading_id<C: HttpClient, R: Reporter>(
    ctx: &mut SuiteContext<'_, C, R>,
    name: &str,
    path: &str,
    noun: &str,
) -> Option<String> {
    let items = non_empty_list(ctx, name, path, noun).await?;

    let Some(id) = items
        .first()
        .and_then(|item| item.get("id"))
        .and_then(envelope::id_segment)
    else {
        ctx.fail(name, format!("First of {} {noun} has no usable id", items.len()));
        return None;
    };

    ctx.pass(name, format!("Retrieved {} {noun}", items.len()));
    Some(id)
}
