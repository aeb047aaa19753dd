//! Alert listing, filtering and status updates.

use probe_domain::{ApiRequest, StatusUpdate, envelope};

use super::{FilterCheck, SuiteContext, filter_check, leading_id};
use crate::ports::{HttpClient, Reporter};

const UPDATE: &str = "PATCH /api/alerts/:id - Update Status";
const RESOLVED: &str = "resolved";

pub(super) async fn run<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    let Some(alert_id) = leading_id(ctx, "GET /api/alerts - Basic", "alerts", "alerts").await
    else {
        return;
    };

    filter_check(
        ctx,
        FilterCheck {
            name: "GET /api/alerts - Status Filter",
            path: "alerts",
            key: "status",
            value: "active",
            noun: "alerts",
        },
    )
    .await;

    filter_check(
        ctx,
        FilterCheck {
            name: "GET /api/alerts - Severity Filter",
            path: "alerts",
            key: "severity",
            value: "high",
            noun: "severity alerts",
        },
    )
    .await;

    let update = StatusUpdate::new(RESOLVED);
    let outcome = ctx
        .send(ApiRequest::patch(format!("alerts/{alert_id}")).with_json(&update))
        .await;
    match outcome {
        Ok(body) => {
            let status = envelope::data(&body).and_then(|a| envelope::text(a, "status"));
            if status == Some(RESOLVED) {
                ctx.pass(UPDATE, format!("Alert {alert_id} status updated to resolved"));
            } else {
                ctx.fail(UPDATE, "Alert status not updated");
            }
        }
        Err(failure) => ctx.fail(UPDATE, failure.to_string()),
    }

    let outcome = ctx
        .send(
            ApiRequest::patch("alerts/invalid-id")
                .expecting(404)
                .with_json(&update),
        )
        .await;
    ctx.record_call(
        "PATCH /api/alerts/:id - Invalid ID",
        &outcome,
        "Correctly returned 404",
    );
}
