//! Settlement listing and filtering.

use super::{FilterCheck, SuiteContext, filter_check, non_empty_list};
use crate::ports::{HttpClient, Reporter};

const BASIC: &str = "GET /api/settlements - Basic";

pub(super) async fn run<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    // The filter check does not depend on the listing, so an empty list
    // does not end the suite.
    if let Some(settlements) = non_empty_list(ctx, BASIC, "settlements", "settlements").await {
        ctx.pass(BASIC, format!("Retrieved {} settlements", settlements.len()));
    }

    filter_check(
        ctx,
        FilterCheck {
            name: "GET /api/settlements - Status Filter",
            path: "settlements",
            key: "status",
            value: "completed",
            noun: "settlements",
        },
    )
    .await;
}
