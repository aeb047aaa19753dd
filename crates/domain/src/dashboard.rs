//! Dashboard API contract.
//!
//! Field lists, status vocabularies and request bodies of the admin
//! dashboard backend, as the probe expects them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Members of `GET analytics/overview` → `data`.
pub const OVERVIEW_FIELDS: &[&str] = &[
    "total_merchants",
    "active_merchants",
    "pending_kyc",
    "total_subscribers",
    "total_tpv",
    "avg_churn_rate",
    "active_alerts",
    "monthly_growth",
];

/// Members of each `GET analytics/verticals` entry.
pub const VERTICAL_FIELDS: &[&str] = &[
    "name",
    "merchants",
    "subscribers",
    "tpv",
    "avg_churn",
    "avg_growth",
];

/// Members of `GET system-health` → `data`.
pub const HEALTH_FIELDS: &[&str] = &[
    "api_uptime",
    "razorpay_status",
    "supabase_status",
    "avg_response_time",
    "total_requests_today",
    "failed_requests_today",
    "last_updated",
];

/// Know-Your-Customer decision applied to a merchant.
///
/// New merchants start as `pending` on the backend; the probe only ever
/// sends a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    /// Verification approved.
    Approved,
    /// Verification rejected.
    Rejected,
}

impl KycStatus {
    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of an upstream dependency reported by `system-health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Fully available.
    Operational,
    /// Available with reduced quality.
    Degraded,
    /// Unavailable.
    Down,
}

impl ServiceStatus {
    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Degraded => "degraded",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "operational" => Ok(Self::Operational),
            "degraded" => Ok(Self::Degraded),
            "down" => Ok(Self::Down),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Body of `POST merchants`.
///
/// Only `name` is always sent; the backend accepts the others as optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMerchant {
    /// Merchant display name.
    pub name: String,
    /// Business vertical (e.g. "ISP").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    /// Contact email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

impl NewMerchant {
    /// Creates a merchant body carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertical: None,
            contact_email: None,
            contact_phone: None,
        }
    }

    /// Sets the vertical (builder pattern).
    #[must_use]
    pub fn with_vertical(mut self, vertical: impl Into<String>) -> Self {
        self.vertical = Some(vertical.into());
        self
    }

    /// Sets the contact details (builder pattern).
    #[must_use]
    pub fn with_contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self.contact_phone = Some(phone.into());
        self
    }
}

/// Body of `PATCH merchants/{id}/kyc` and `PATCH alerts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// New status value.
    pub status: String,
}

impl StatusUpdate {
    /// Creates a status update.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl From<KycStatus> for StatusUpdate {
    fn from(status: KycStatus) -> Self {
        Self::new(status.as_str())
    }
}
