//! `GET analytics/overview`

use probe_domain::dashboard::OVERVIEW_FIELDS;
use probe_domain::envelope;
use serde_json::Value;

use super::SuiteContext;
use crate::ports::{HttpClient, Reporter};

const REQUEST: &str = "Analytics Overview - Request";
const STRUCTURE: &str = "Analytics Overview - Structure";
const VALIDATION: &str = "Analytics Overview - Data Validation";

pub(super) async fn run<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    let body = match ctx.get("analytics/overview").await {
        Ok(body) => body,
        Err(failure) => {
            ctx.fail(REQUEST, failure.to_string());
            return;
        }
    };

    let Some(overview) = envelope::data(&body) else {
        ctx.fail(STRUCTURE, "Invalid response structure");
        return;
    };

    let missing = envelope::missing_fields(overview, OVERVIEW_FIELDS);
    if !missing.is_empty() {
        ctx.fail(
            STRUCTURE,
            format!("Missing required fields: {}", missing.join(", ")),
        );
        return;
    }
    ctx.pass(STRUCTURE, "All required fields present");

    match check_consistency(overview) {
        Ok(()) => ctx.pass(VALIDATION, "Metrics are logically consistent"),
        Err(reason) => ctx.fail(VALIDATION, format!("Metrics seem inconsistent: {reason}")),
    }
}

fn check_consistency(overview: &Value) -> Result<(), String> {
    let metric = |key: &str| {
        envelope::number(overview, key).ok_or_else(|| format!("{key} is not numeric"))
    };

    let total = metric("total_merchants")?;
    let active = metric("active_merchants")?;
    if total < active {
        return Err(format!(
            "total_merchants ({total}) is below active_merchants ({active})"
        ));
    }
    if metric("total_subscribers")? <= 0.0 {
        return Err("total_subscribers is not positive".to_string());
    }
    if metric("total_tpv")? <= 0.0 {
        return Err("total_tpv is not positive".to_string());
    }
    Ok(())
}
