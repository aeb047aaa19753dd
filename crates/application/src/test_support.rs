//! Test doubles for the application ports.
#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use probe_domain::{ApiRequest, HttpMethod, ResponseSpec, RunSummary, TestResult};
use serde_json::json;

use crate::ports::{Clock, HttpClient, HttpClientError, Reporter};

type Reply = Result<ResponseSpec, HttpClientError>;

/// Scripted HTTP client.
///
/// Replies are keyed by method and path (with query string, e.g.
/// `alerts?status=active`). A route with several replies hands them out in
/// order and keeps repeating the last one. Unknown routes answer 404.
#[derive(Default)]
pub struct StubClient {
    routes: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

fn route_key(method: HttpMethod, target: &str) -> String {
    format!("{method} {target}")
}

fn request_target(request: &ApiRequest) -> String {
    if request.query.is_empty() {
        request.path.clone()
    } else {
        let query: Vec<String> = request
            .query
            .iter()
            .map(|q| format!("{}={}", q.key, q.value))
            .collect();
        format!("{}?{}", request.path, query.join("&"))
    }
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reply for `method target`.
    pub fn respond(self, method: HttpMethod, target: &str, response: ResponseSpec) -> Self {
        self.push(method, target, Ok(response));
        self
    }

    /// Adds a JSON reply wrapped in a `data` envelope.
    pub fn data(
        self,
        method: HttpMethod,
        target: &str,
        status: u16,
        data: serde_json::Value,
    ) -> Self {
        self.respond(method, target, ResponseSpec::json(status, &json!({ "data": data })))
    }

    /// Adds a transport failure for `method target`.
    pub fn fail(self, method: HttpMethod, target: &str, error: HttpClientError) -> Self {
        self.push(method, target, Err(error));
        self
    }

    fn push(&self, method: HttpMethod, target: &str, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .entry(route_key(method, target))
            .or_default()
            .push_back(reply);
    }

    /// Requests received so far, as `METHOD target`.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|r| route_key(r.method, &request_target(r)))
            .collect()
    }

    /// Bodies sent so far, in order.
    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| r.body.clone())
            .collect()
    }

    fn reply(&self, request: &ApiRequest) -> Reply {
        self.calls.lock().unwrap().push(request.clone());
        let key = route_key(request.method, &request_target(request));
        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Ok(ResponseSpec::json(404, &json!({ "error": "Not found" }))),
        }
    }
}

impl HttpClient for StubClient {
    fn execute(&self, request: &ApiRequest) -> impl Future<Output = Reply> + Send {
        let reply = self.reply(request);
        async move { reply }
    }
}

/// Reporter that keeps one line per event.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub events: Vec<String>,
}

impl Reporter for MemoryReporter {
    fn run_started(&mut self, base_url: &str, _at: DateTime<Utc>) {
        self.events.push(format!("start {base_url}"));
    }

    fn suite_started(&mut self, title: &str) {
        self.events.push(format!("suite {title}"));
    }

    fn result_recorded(&mut self, result: &TestResult) {
        let verdict = if result.passed { "PASS" } else { "FAIL" };
        self.events.push(format!("{verdict} {}", result.name));
    }

    fn run_finished(&mut self, summary: &RunSummary, _at: DateTime<Utc>) {
        self.events
            .push(format!("finish {}/{}", summary.passed, summary.total));
    }
}

/// Clock frozen at a fixed instant.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }
}
