//! Settlements paid out to the integration's bank accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::Expandable;
use crate::subaccount::Subaccount;

/// A payout to a bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Settlement id.
    pub id: Option<i64>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// Subaccount settled, when not the main account.
    pub subaccount: Option<Expandable<Subaccount>>,
    /// Who triggered the settlement; shape varies.
    pub settled_by: Option<Value>,
    /// When the payout happened.
    pub settled_date: Option<DateTime<Utc>>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Amount paid out.
    pub total_amount: Option<i64>,
    /// `"success"`, `"pending"`, ...
    pub status: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}
