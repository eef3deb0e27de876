//! Banks and identity lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A bank supported for transfers and settlements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    /// Bank id.
    pub id: Option<i64>,
    /// Display name.
    pub name: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Bank code used in transfer requests.
    pub code: Option<String>,
    /// NIBSS long code.
    pub longcode: Option<String>,
    /// Gateway used for this bank.
    pub gateway: Option<String>,
    /// Whether the bank is currently available.
    pub active: Option<bool>,
    /// Soft-delete marker; shape varies.
    pub is_deleted: Option<Value>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Card details resolved from a BIN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    /// The first six digits of the card.
    pub bin: Option<String>,
    /// Card brand.
    pub brand: Option<String>,
    /// Card sub-brand.
    pub sub_brand: Option<String>,
    /// ISO country code of the issuer.
    pub country_code: Option<String>,
    /// Country name of the issuer.
    pub country_name: Option<String>,
    /// `"DEBIT"` or `"CREDIT"`.
    pub card_type: Option<String>,
    /// Issuing bank.
    pub bank: Option<String>,
    /// Id of the issuing bank, when known.
    pub linked_bank_id: Option<i64>,
}

/// Identity data behind a Bank Verification Number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BvnData {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Date of birth as returned by the registry.
    pub dob: Option<String>,
    /// Registered phone number.
    pub mobile: Option<String>,
    /// The BVN itself.
    pub bvn: Option<String>,
}

/// Result of resolving an account number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    /// Account number.
    pub account_number: Option<String>,
    /// Name on the account.
    pub account_name: Option<String>,
}
