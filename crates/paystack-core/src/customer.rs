//! Customer records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Authorization, Metadata};
use crate::subscription::Subscription;
use crate::transaction::Transaction;

/// A customer of the integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer id.
    pub id: Option<i64>,
    /// Customer code (`CUS_...`).
    pub customer_code: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Metadata attached at creation or update.
    pub metadata: Option<Metadata>,
    /// Current risk action (`"allow"`, `"deny"`, `"default"`).
    pub risk_action: Option<String>,
    /// Transactions, when fetched individually.
    pub transactions: Option<Vec<Transaction>>,
    /// Subscriptions, when fetched individually.
    pub subscriptions: Option<Vec<Subscription>>,
    /// Saved authorizations, when fetched individually.
    pub authorizations: Option<Vec<Authorization>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Whitelist or blacklist decision for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskAction {
    /// Always allow charges.
    Allow,
    /// Always deny charges.
    Deny,
    /// Fall back to the integration's default rules.
    Default,
}

impl RiskAction {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for RiskAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
