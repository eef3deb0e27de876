//! Transfers and their recipients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Expandable, Metadata};

/// A payout from the integration's balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Transfer id.
    pub id: Option<i64>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// Receiving party.
    pub recipient: Option<Expandable<TransferRecipient>>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Amount in the currency's subunit.
    pub amount: Option<i64>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Funding source (`"balance"`).
    pub source: Option<String>,
    /// Extra detail about the source.
    pub source_details: Option<Value>,
    /// Narration.
    pub reason: Option<String>,
    /// `"pending"`, `"otp"`, `"success"`, `"failed"`.
    pub status: Option<String>,
    /// Failure details; shape varies.
    pub failures: Option<Value>,
    /// Transfer code (`TRF_...`).
    pub transfer_code: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A saved beneficiary for transfers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferRecipient {
    /// Recipient id.
    pub id: Option<i64>,
    /// Recipient code (`RCP_...`).
    pub recipient_code: Option<String>,
    /// Owning integration id.
    pub integration: Option<i64>,
    /// `"test"` or `"live"`.
    pub domain: Option<String>,
    /// Recipient type (`"nuban"`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Recipient name.
    pub name: Option<String>,
    /// Bank account details.
    pub details: Option<TransferRecipientDetails>,
    /// Description.
    pub description: Option<String>,
    /// Extra metadata.
    pub metadata: Option<Metadata>,
    /// Whether the recipient can receive transfers.
    pub active: Option<bool>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Bank account behind a transfer recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecipientDetails {
    /// Account number.
    pub account_number: Option<String>,
    /// Name on the account.
    pub account_name: Option<String>,
    /// Bank code.
    pub bank_code: Option<String>,
    /// Bank name.
    pub bank_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::decode;

    #[test]
    fn recipient_may_be_code_or_object() {
        let by_code: Transfer = decode(json!({ "recipient": "RCP_2x5j67tnnw1t98k" })).unwrap();
        assert_eq!(
            by_code.recipient.as_ref().and_then(Expandable::code),
            Some("RCP_2x5j67tnnw1t98k")
        );

        let expanded: Transfer = decode(json!({
            "recipient": {
                "type": "nuban",
                "name": "Zombie",
                "details": { "accountNumber": "0100000010", "bankCode": "044" }
            }
        }))
        .unwrap();
        let recipient = expanded.recipient.as_ref().and_then(Expandable::as_object).unwrap();
        assert_eq!(recipient.kind.as_deref(), Some("nuban"));
        let details = recipient.details.as_ref().unwrap();
        assert_eq!(details.account_number.as_deref(), Some("0100000010"));
        assert_eq!(details.bank_code.as_deref(), Some("044"));
    }
}
