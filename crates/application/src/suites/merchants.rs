//! Merchant listing, filtering, lookup, creation and KYC updates.

use probe_domain::{ApiRequest, KycStatus, NewMerchant, StatusUpdate, envelope};

use super::{FilterCheck, SuiteContext, filter_check, leading_id};
use crate::ports::{HttpClient, Reporter};

const BASIC: &str = "GET /api/merchants - Basic";
const VALID_ID: &str = "GET /api/merchants/:id - Valid ID";
const INVALID_ID: &str = "GET /api/merchants/:id - Invalid ID";
const CREATE: &str = "POST /api/merchants - Create";
const CREATED_READ_BACK: &str = "GET /api/merchants/:id - Created Merchant";
const KYC_INVALID_ID: &str = "PATCH /api/merchants/:id/kyc - Invalid ID";

/// Merchant created by the suite.
fn test_merchant() -> NewMerchant {
    NewMerchant::named("TestCorp Solutions")
        .with_vertical("ISP")
        .with_contact("admin@testcorp.com", "+91 9876543299")
}

pub(super) async fn run<C: HttpClient, R: Reporter>(ctx: &mut SuiteContext<'_, C, R>) {
    let Some(merchant_id) = leading_id(ctx, BASIC, "merchants", "merchants").await else {
        return;
    };

    filter_check(
        ctx,
        FilterCheck {
            name: "GET /api/merchants - KYC Filter",
            path: "merchants",
            key: "kyc_status",
            value: KycStatus::Approved.as_str(),
            noun: "merchants",
        },
    )
    .await;

    filter_check(
        ctx,
        FilterCheck {
            name: "GET /api/merchants - Vertical Filter",
            path: "merchants",
            key: "vertical",
            value: "ISP",
            noun: "merchants",
        },
    )
    .await;

    match ctx.get(&format!("merchants/{merchant_id}")).await {
        Ok(body) => {
            let returned = envelope::data(&body)
                .and_then(|merchant| merchant.get("id"))
                .and_then(envelope::id_segment);
            if returned.as_deref() == Some(merchant_id.as_str()) {
                ctx.pass(VALID_ID, format!("Retrieved merchant {merchant_id}"));
            } else {
                ctx.fail(VALID_ID, "Incorrect merchant returned");
            }
        }
        Err(failure) => ctx.fail(VALID_ID, failure.to_string()),
    }

    let outcome = ctx
        .call(ApiRequest::get("merchants/invalid-id").expecting(404))
        .await;
    ctx.record_call(INVALID_ID, &outcome, "Correctly returned 404");

    let merchant = test_merchant();
    if let Some(created_id) = create(ctx, &merchant).await {
        read_back_name(ctx, &created_id, &merchant.name).await;
        for status in [KycStatus::Approved, KycStatus::Rejected] {
            if update_kyc(ctx, &created_id, status).await {
                read_back_kyc(ctx, &created_id, status).await;
            }
        }
    }

    let outcome = ctx
        .send(
            ApiRequest::patch("merchants/invalid-id/kyc")
                .expecting(404)
                .with_json(&StatusUpdate::from(KycStatus::Approved)),
        )
        .await;
    ctx.record_call(KYC_INVALID_ID, &outcome, "Correctly returned 404");
}

/// Creates `merchant` and returns the id the backend assigned.
async fn create<C: HttpClient, R: Reporter>(
    ctx: &mut SuiteContext<'_, C, R>,
    merchant: &NewMerchant,
) -> Option<String> {
    let body = match ctx
        .send(ApiRequest::post("merchants").with_json(merchant))
        .await
    {
        Ok(body) => body,
        Err(failure) => {
            ctx.fail(CREATE, failure.to_string());
            return None;
        }
    };

    let created = envelope::data(&body);
    let name_matches =
        created.and_then(|m| envelope::text(m, "name")) == Some(merchant.name.as_str());
    let id = created
        .and_then(|m| m.get("id"))
        .and_then(envelope::id_segment);

    match id {
        Some(id) if name_matches => {
            ctx.pass(CREATE, format!("Created merchant with ID {id}"));
            Some(id)
        }
        _ => {
            ctx.fail(CREATE, "Merchant not created correctly");
            None
        }
    }
}

async fn read_back_name<C: HttpClient, R: Reporter>(
    ctx: &mut SuiteContext<'_, C, R>,
    id: &str,
    expected: &str,
) {
    match ctx.get(&format!("merchants/{id}")).await {
        Ok(body) => {
            let name = envelope::data(&body).and_then(|m| envelope::text(m, "name"));
            if name == Some(expected) {
                ctx.pass(
                    CREATED_READ_BACK,
                    format!("Merchant {id} reads back as {expected}"),
                );
            } else {
                ctx.fail(
                    CREATED_READ_BACK,
                    format!("Expected name {expected}, got {}", name.unwrap_or("nothing")),
                );
            }
        }
        Err(failure) => ctx.fail(CREATED_READ_BACK, failure.to_string()),
    }
}

const fn kyc_verb(status: KycStatus) -> &'static str {
    match status {
        KycStatus::Approved => "Approve",
        KycStatus::Rejected => "Reject",
    }
}

/// Sets the KYC status of merchant `id`; returns whether the update took.
async fn update_kyc<C: HttpClient, R: Reporter>(
    ctx: &mut SuiteContext<'_, C, R>,
    id: &str,
    status: KycStatus,
) -> bool {
    let name = format!("PATCH /api/merchants/:id/kyc - {}", kyc_verb(status));
    let outcome = ctx
        .send(
            ApiRequest::patch(format!("merchants/{id}/kyc"))
                .with_json(&StatusUpdate::from(status)),
        )
        .await;

    match outcome {
        Ok(body) => {
            let updated = envelope::data(&body).and_then(|m| envelope::text(m, "kyc_status"));
            if updated == Some(status.as_str()) {
                ctx.pass(&name, format!("KYC {status} successfully"));
                true
            } else {
                ctx.fail(&name, "KYC status not updated");
                false
            }
        }
        Err(failure) => {
            ctx.fail(&name, failure.to_string());
            false
        }
    }
}

async fn read_back_kyc<C: HttpClient, R: Reporter>(
    ctx: &mut SuiteContext<'_, C, R>,
    id: &str,
    status: KycStatus,
) {
    let name = format!("GET /api/merchants/:id - KYC {} Read Back", kyc_verb(status));
    match ctx.get(&format!("merchants/{id}")).await {
        Ok(body) => {
            let stored = envelope::data(&body).and_then(|m| envelope::text(m, "kyc_status"));
            if stored == Some(status.as_str()) {
                ctx.pass(&name, format!("Merchant {id} reads back as {status}"));
            } else {
                ctx.fail(
                    &name,
                    format!("Expected kyc_status {status}, got {}", stored.unwrap_or("nothing")),
                );
            }
        }
        Err(failure) => ctx.fail(&name, failure.to_string()),
    }
}
