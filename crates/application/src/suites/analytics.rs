//! Per-merchant and per-vertical analytics reports.

use probe_domain::dashboard::VERTICAL_FIELDS;
use probe_domain::envelope;
use serde_json::Value;

use super::SuiteContext;
use crate::ports::{HttpClient, Reporter};

pub(super) async fn run<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    merchant_health(ctx).await;
    vertical_aggregation(ctx).await;
}

async fn merchant_health<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    const NAME: &str = "GET /api/analytics/merchants - Health Scores";

    let body = match ctx.get("analytics/merchants").await {
        Ok(body) => body,
        Err(failure) => {
            ctx.fail("GET /api/analytics/merchants - Request", failure.to_string());
            return;
        }
    };

    let Some(merchants) = envelope::data_list(&body) else {
        ctx.fail(
            "GET /api/analytics/merchants - Structure",
            "Invalid response structure",
        );
        return;
    };

    if merchants.iter().all(has_numeric_health_score) {
        ctx.pass(
            NAME,
            format!("Retrieved {} merchants with health scores", merchants.len()),
        );
    } else {
        ctx.fail(NAME, "Invalid health score format");
    }
}

fn has_numeric_health_score(merchant: &Value) -> bool {
    envelope::number(merchant, "health_score").is_some()
}

async fn vertical_aggregation<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    const STRUCTURE: &str = "GET /api/analytics/verticals - Structure";

    let body = match ctx.get("analytics/verticals").await {
        Ok(body) => body,
        Err(failure) => {
            ctx.fail("GET /api/analytics/verticals - Request", failure.to_string());
            return;
        }
    };

    let Some(verticals) = envelope::data_list(&body) else {
        ctx.fail(STRUCTURE, "Invalid response structure");
        return;
    };

    for vertical in verticals {
        let missing = envelope::missing_fields(vertical, VERTICAL_FIELDS);
        if !missing.is_empty() {
            let label = envelope::text(vertical, "name").unwrap_or("unnamed vertical");
            ctx.fail(
                STRUCTURE,
                format!("Missing fields in vertical data ({label}): {}", missing.join(", ")),
            );
            return;
        }
    }

    ctx.pass(
        "GET /api/analytics/verticals - Aggregation",
        format!("Retrieved {} vertical aggregations", verticals.len()),
    );
}
