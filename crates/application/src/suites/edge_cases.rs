//! Unknown endpoints and permissive creation.

use probe_domain::{ApiRequest, NewMerchant};

use super::SuiteContext;
use crate::ports::{HttpClient, Reporter};

pub(super) async fn run<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    let outcome = ctx
        .call(ApiRequest::get("invalid-endpoint").expecting(404))
        .await;
    ctx.record_call(
        "Invalid Endpoint - 404 Response",
        &outcome,
        "Correctly returned 404 for invalid endpoint",
    );

    // The backend does not validate required fields: a merchant with only a
    // name is created with 201. The check asserts that behaviour as-is.
    let outcome = ctx
        .send(ApiRequest::post("merchants").with_json(&NewMerchant::named("Incomplete Merchant")))
        .await;
    ctx.record_call(
        "POST /api/merchants - Missing Fields",
        &outcome,
        "Merchant created (validation not implemented)",
    );
}
