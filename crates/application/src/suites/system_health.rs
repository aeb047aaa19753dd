//! `GET system-health`

use probe_domain::dashboard::HEALTH_FIELDS;
use probe_domain::{ServiceStatus, envelope};
use serde_json::Value;

use super::SuiteContext;
use crate::ports::{HttpClient, Reporter};

const STRUCTURE: &str = "GET /api/system-health - Structure";
const VALIDATION: &str = "GET /api/system-health - Data Validation";

pub(super) async fn run<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    let body = match ctx.get("system-health").await {
        Ok(body) => body,
        Err(failure) => {
            ctx.fail("GET /api/system-health - Request", failure.to_string());
            return;
        }
    };

    let Some(health) = envelope::data(&body) else {
        ctx.fail(STRUCTURE, "Invalid response structure");
        return;
    };

    let missing = envelope::missing_fields(health, HEALTH_FIELDS);
    if !missing.is_empty() {
        ctx.fail(
            STRUCTURE,
            format!("Missing required fields: {}", missing.join(", ")),
        );
        return;
    }
    ctx.pass(STRUCTURE, "All required fields present");

    match check_metrics(health) {
        Ok(()) => ctx.pass(VALIDATION, "Health metrics are valid"),
        Err(reason) => ctx.fail(VALIDATION, format!("Invalid health metrics: {reason}")),
    }
}

fn check_metrics(health: &Value) -> Result<(), String> {
    let uptime = envelope::number(health, "api_uptime")
        .ok_or_else(|| "api_uptime is not numeric".to_string())?;
    if !(0.0..=100.0).contains(&uptime) {
        return Err(format!("api_uptime {uptime} is outside [0, 100]"));
    }

    for key in ["razorpay_status", "supabase_status"] {
        let raw = envelope::text(health, key).ok_or_else(|| format!("{key} is not a string"))?;
        raw.parse::<ServiceStatus>()
            .map_err(|e| format!("{key}: {e}"))?;
    }
    Ok(())
}
