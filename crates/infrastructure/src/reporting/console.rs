//! Console reporter.

use std::io::Write;

use chrono::{DateTime, Local, Utc};
use probe_application::ports::Reporter;
use probe_domain::{RunSummary, TestResult};

const RULE_WIDTH: usize = 60;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable progress report written line by line.
///
/// Timestamps are shown in local time.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "failed to write report line");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "failed to flush report");
        }
    }
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIME_FORMAT).to_string()
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self, base_url: &str, at: DateTime<Utc>) {
        self.line("🚀 Starting SubversePay Super Admin Dashboard API Tests");
        self.line(&format!("📍 Base URL: {base_url}"));
        self.line(&format!("⏰ Test started at: {}", local_time(at)));
    }

    fn suite_started(&mut self, title: &str) {
        self.line(&format!("\n=== Testing {title} ==="));
    }

    fn result_recorded(&mut self, result: &TestResult) {
        let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
        self.line(&format!("{status}: {}", result.name));
        if !result.details.is_empty() {
            self.line(&format!("   Details: {}", result.details));
        }
        self.flush();
    }

    fn run_finished(&mut self, summary: &RunSummary, at: DateTime<Utc>) {
        let rule = "=".repeat(RULE_WIDTH);
        self.line(&format!("\n{rule}"));
        self.line("📊 TEST SUMMARY");
        self.line(&rule);
        self.line(&format!("✅ Passed: {}", summary.passed));
        self.line(&format!("❌ Failed: {}", summary.failed));
        self.line(&format!("📈 Success Rate: {:.1}%", summary.success_rate()));

        if !summary.failures.is_empty() {
            self.line("\n❌ FAILED TESTS:");
            for failure in &summary.failures {
                self.line(&format!("   • {}: {}", failure.name, failure.details));
            }
        }

        self.line(&format!("\n⏰ Test completed at: {}", local_time(at)));
        self.flush();
    }
}
