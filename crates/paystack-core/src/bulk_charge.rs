//! Bulk charge batches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Authorization, Expandable};
use crate::customer::Customer;
use crate::transaction::Transaction;

/// A batch of charges against saved authorizations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkBatch {
    /// Batch id.
    pub id: Option<i64>,
    /// Batch code (`BCH_...`).
    pub batch_code: Option<String>,
    /// `"active"`, `"paused"`, `"complete"`.
    pub status: Option<String>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// Charges in the batch.
    pub total_charges: Option<i64>,
    /// Charges not yet attempted.
    pub pending_charges: Option<i64>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// One charge inside a bulk batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkCharge {
    /// Charge id.
    pub id: Option<i64>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// Id of the batch.
    pub bulkcharge: Option<i64>,
    /// Charged customer.
    pub customer: Option<Expandable<Customer>>,
    /// Authorization charged.
    pub authorization: Option<Authorization>,
    /// Resulting transaction.
    pub transaction: Option<Expandable<Transaction>>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Amount in the currency's subunit.
    pub amount: Option<i64>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// `"pending"`, `"success"`, `"failed"`.
    pub status: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}
