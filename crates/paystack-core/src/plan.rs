//! Subscription plan records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recurring billing plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan id.
    pub id: Option<i64>,
    /// Plan code (`PLN_...`).
    pub plan_code: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Amount charged per interval, in the currency's subunit.
    pub amount: Option<i64>,
    /// `"hourly"`, `"daily"`, `"weekly"`, `"monthly"`, `"annually"`.
    pub interval: Option<String>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Whether invoices are emailed to subscribers.
    pub send_invoices: Option<bool>,
    /// Whether SMS notifications are sent to subscribers.
    pub send_sms: Option<bool>,
    /// Whether the plan has a hosted subscription page.
    pub hosted_page: Option<bool>,
    /// Hosted page URL.
    pub hosted_page_url: Option<String>,
    /// Hosted page summary text.
    pub hosted_page_summary: Option<String>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Number of invoices to raise before stopping.
    pub invoice_limit: Option<i64>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// Subscriptions on this plan, when fetched individually.
    pub subscriptions: Option<Vec<PlanSubscription>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A subscription as listed under its plan, with references left as ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSubscription {
    /// Subscription id.
    pub id: Option<i64>,
    /// Customer id.
    pub customer: Option<i64>,
    /// Plan id.
    pub plan: Option<i64>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Unix start time.
    pub start: Option<i64>,
    /// `"active"`, `"complete"`, `"cancelled"`, ...
    pub status: Option<String>,
    /// Quantity subscribed.
    pub quantity: Option<i64>,
    /// Amount per interval.
    pub amount: Option<i64>,
    /// Subscription code (`SUB_...`).
    pub subscription_code: Option<String>,
    /// Token used to manage the subscription by email.
    pub email_token: Option<String>,
    /// Authorization id charged.
    pub authorization: Option<i64>,
    /// Scheduler id.
    pub easy_cron_id: Option<Value>,
    /// Cron expression for the schedule.
    pub cron_expression: Option<String>,
    /// Next charge date.
    pub next_payment_date: Option<DateTime<Utc>>,
    /// Currently open invoice.
    pub open_invoice: Option<Value>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}
