//! Subscription records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Authorization, Expandable};
use crate::customer::Customer;
use crate::plan::Plan;

/// A customer's subscription to a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription id.
    pub id: Option<i64>,
    /// Subscribed customer.
    pub customer: Option<Expandable<Customer>>,
    /// Plan subscribed to.
    pub plan: Option<Expandable<Plan>>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// Authorization charged each interval.
    pub authorization: Option<Expandable<Authorization>>,
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
    /// Token used to enable or disable the subscription.
    pub email_token: Option<String>,
    /// Scheduler id.
    pub easy_cron_id: Option<Value>,
    /// Cron expression for the schedule.
    pub cron_expression: Option<String>,
    /// Next charge date.
    pub next_payment_date: Option<DateTime<Utc>>,
    /// Currently open invoice.
    pub open_invoice: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}
