//! Transaction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Authorization, Expandable, FieldByCurrency, History, Log, Metadata};
use crate::customer::Customer;
use crate::plan::Plan;
use crate::subaccount::Subaccount;

/// A payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id.
    pub id: Option<i64>,
    /// Amount in the currency's subunit (kobo for NGN).
    pub amount: Option<i64>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// When the transaction was made.
    pub transaction_date: Option<DateTime<Utc>>,
    /// `"success"`, `"failed"`, `"abandoned"`, ...
    pub status: Option<String>,
    /// Unique reference.
    pub reference: Option<String>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Metadata sent at initialization.
    pub metadata: Option<Metadata>,
    /// Gateway response text.
    pub gateway_response: Option<String>,
    /// Additional message.
    pub message: Option<String>,
    /// Payment channel.
    pub channel: Option<String>,
    /// Payer IP address.
    pub ip_address: Option<String>,
    /// Checkout log.
    pub log: Option<Log>,
    /// Fees charged.
    pub fees: Option<i64>,
    /// Fees split to the subaccount.
    pub fees_split: Option<i64>,
    /// Authorization used or created.
    pub authorization: Option<Authorization>,
    /// Paying customer.
    pub customer: Option<Expandable<Customer>>,
    /// Plan the transaction paid for.
    pub plan: Option<Expandable<Plan>>,
    /// Subaccount that received a split.
    pub subaccount: Option<Expandable<Subaccount>>,
    /// When payment completed.
    pub paid_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

/// Checkout link returned when a transaction is initialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInitialization {
    /// URL to redirect the customer to.
    pub authorization_url: Option<String>,
    /// Access code for inline checkout.
    pub access_code: Option<String>,
    /// Transaction reference.
    pub reference: Option<String>,
}

/// Step-by-step timeline of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionTimeline {
    /// Seconds spent on the checkout.
    pub time_spent: Option<i64>,
    /// Number of attempts.
    pub attempts: Option<i64>,
    /// Authentication method used.
    pub authentication: Option<String>,
    /// Number of errors.
    pub errors: Option<i64>,
    /// Whether the checkout succeeded.
    pub success: Option<bool>,
    /// Whether the checkout happened on a mobile device.
    pub mobile: Option<bool>,
    /// Raw input events.
    pub input: Option<Vec<Value>>,
    /// Payment channel.
    pub channel: Option<String>,
    /// Ordered history.
    pub history: Option<Vec<History>>,
}

/// Aggregate totals over the integration's transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTotals {
    /// Number of transactions.
    pub total_transactions: Option<i64>,
    /// Number of distinct paying customers.
    pub unique_customers: Option<i64>,
    /// Total volume across currencies.
    pub total_volume: Option<i64>,
    /// Volume split per currency.
    pub total_volume_by_currency: Option<Vec<FieldByCurrency>>,
    /// Pending transfer volume.
    pub pending_transfers: Option<i64>,
    /// Pending transfers split per currency.
    pub pending_transfers_by_currency: Option<Vec<FieldByCurrency>>,
}

/// Location of an exported transactions file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPath {
    /// Download URL of the CSV export.
    pub path: Option<String>,
}

/// Link the customer must follow to reauthorize a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reauthorization {
    /// Reauthorization URL.
    pub reauthorization_url: Option<String>,
    /// Reference to verify afterwards.
    pub reference: Option<String>,
}
