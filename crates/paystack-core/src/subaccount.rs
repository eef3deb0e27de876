//! Subaccounts that receive a share of split payments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Metadata;

/// A subaccount of the integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subaccount {
    /// Subaccount id.
    pub id: Option<i64>,
    /// Subaccount code (`ACCT_...`).
    pub subaccount_code: Option<String>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Business name.
    pub business_name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Contact person.
    pub primary_contact_name: Option<String>,
    /// Contact email.
    pub primary_contact_email: Option<String>,
    /// Contact phone.
    pub primary_contact_phone: Option<String>,
    /// Extra metadata.
    pub metadata: Option<Metadata>,
    /// Percentage of each payment kept by the main account.
    pub percentage_charge: Option<f64>,
    /// Whether the settlement account was verified.
    pub is_verified: Option<bool>,
    /// Settlement bank name.
    pub settlement_bank: Option<String>,
    /// Settlement account number.
    pub account_number: Option<String>,
    /// `"auto"`, `"weekly"`, `"monthly"`, `"manual"`.
    pub settlement_schedule: Option<String>,
    /// Whether the subaccount is active.
    pub active: Option<bool>,
    /// Migration flag.
    pub migrate: Option<bool>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}
