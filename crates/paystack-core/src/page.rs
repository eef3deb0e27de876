//! Hosted payment pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A hosted payment page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page id.
    pub id: Option<i64>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// Plan id for subscription pages.
    pub plan: Option<i64>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Fixed amount, if any.
    pub amount: Option<i64>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Extra fields collected on the page.
    pub custom_fields: Option<Vec<CustomField>>,
    /// Where to send the customer after payment.
    pub redirect_url: Option<String>,
    /// Whether the page accepts payments.
    pub active: Option<bool>,
    /// Migration marker; shape varies.
    pub migrate: Option<Value>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A field collected on a payment page or shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Label shown to the customer.
    pub display_name: Option<String>,
    /// Key under which the value is stored.
    pub variable_name: Option<String>,
    /// Value, when set.
    pub value: Option<String>,
}
