//! Request bodies and query options for the Paystack API.
//!
//! Unset optional fields are left out of the JSON body or query string.

use chrono::{DateTime, Utc};
use serde::Serialize;

use paystack_core::{CustomField, Metadata, RiskAction};

/// Page selection shared by list operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Page to retrieve, starting at 1.
    pub page: Option<u32>,
    /// Records per page.
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
}

impl ListOptions {
    /// Select one page of `per_page` records.
    #[must_use]
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

/// Filters for listing transactions and computing totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionOptions {
    /// Page to retrieve.
    pub page: Option<u32>,
    /// Records per page.
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    /// Customer id.
    pub customer: Option<i64>,
    /// `"success"`, `"failed"` or `"abandoned"`.
    pub status: Option<String>,
    /// Start of the time window.
    pub from: Option<DateTime<Utc>>,
    /// End of the time window.
    pub to: Option<DateTime<Utc>>,
    /// Exact amount.
    pub amount: Option<i64>,
    /// Only settled (or unsettled) transactions.
    pub settled: Option<bool>,
    /// Payment page id.
    pub payment_page: Option<i64>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Settlement id.
    pub settlement: Option<i64>,
}

/// Filters for listing plans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanOptions {
    /// Page to retrieve.
    pub page: Option<u32>,
    /// Records per page.
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    /// Billing interval.
    pub interval: Option<String>,
    /// Exact amount.
    pub amount: Option<i64>,
}

/// Filters for listing subscriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionOptions {
    /// Page to retrieve.
    pub page: Option<u32>,
    /// Records per page.
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    /// Customer id.
    pub customer: Option<i64>,
    /// Plan id.
    pub plan: Option<i64>,
}

/// Filters for listing the charges of a bulk batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkChargeOptions {
    /// Page to retrieve.
    pub page: Option<u32>,
    /// Records per page.
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    /// `"pending"`, `"success"` or `"failed"`.
    pub status: Option<String>,
}

/// Filters for listing settlements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettlementOptions {
    /// Page to retrieve.
    pub page: Option<u32>,
    /// Records per page.
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    /// Start of the time window.
    pub from: Option<DateTime<Utc>>,
    /// End of the time window.
    pub to: Option<DateTime<Utc>>,
    /// Subaccount code, or `"none"` for the main account only.
    pub subaccount: Option<String>,
}

/// Filters for listing banks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankOptions {
    /// Page to retrieve.
    pub page: Option<u32>,
    /// Records per page.
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    /// Country name (`"nigeria"`, `"ghana"`).
    pub country: Option<String>,
    /// ISO currency code.
    pub currency: Option<String>,
}

/// Account to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolveAccountOptions {
    /// Account number.
    pub account_number: String,
    /// Bank code from the bank list.
    pub bank_code: String,
}

/// Filters for exporting transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportOptions {
    /// Start of the time window.
    pub from: Option<DateTime<Utc>>,
    /// End of the time window.
    pub to: Option<DateTime<Utc>>,
    /// Only settled (or unsettled) transactions.
    pub settled: Option<bool>,
    /// Payment page id.
    pub payment_page: Option<i64>,
    /// Customer id.
    pub customer: Option<i64>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Settlement id.
    pub settlement: Option<i64>,
    /// Exact amount.
    pub amount: Option<i64>,
    /// Transaction status.
    pub status: Option<String>,
}

/// Body for creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerRequest {
    /// Email address; required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Extra metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Body for whitelisting or blacklisting a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskActionRequest {
    /// Customer code or email; must not be empty.
    pub customer: String,
    /// Action to apply.
    pub risk_action: RiskAction,
}

/// Body for deactivating a saved authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeactivateAuthorizationRequest {
    /// Authorization to deactivate.
    pub authorization_code: String,
}

/// Body shared by transaction initialization and authorization charges.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionRequest {
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Amount in the currency's subunit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Unique reference; generated by the API when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Where to redirect after checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Saved authorization to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    /// Plan code to subscribe the customer to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Number of times to charge on the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<i64>,
    /// Extra metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Subaccount code for split payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,
    /// Flat fee kept by the main account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<i64>,
    /// Who bears the fees: `"account"` or `"subaccount"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer: Option<String>,
    /// Payment channels to offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
}

/// Card details for a direct charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Card number.
    pub number: String,
    /// Security code.
    pub cvv: String,
    /// Two-digit month.
    pub expiry_month: String,
    /// Two- or four-digit year.
    pub expiry_year: String,
}

/// Bank account for a direct charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankAccount {
    /// Bank code.
    pub code: String,
    /// Account number.
    pub account_number: String,
}

/// Body for a direct charge or card tokenization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChargeRequest {
    /// Customer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Amount in the currency's subunit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Card to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Bank account to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankAccount>,
    /// Saved authorization to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    /// Card PIN, when already collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Unique reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Extra metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Body for submitting a PIN to a pending charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PinRequest {
    /// Card PIN.
    pub pin: String,
    /// Charge reference.
    pub reference: String,
}

/// Body for submitting an OTP to a pending charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    /// One-time password.
    pub otp: String,
    /// Charge reference.
    pub reference: String,
}

/// Body for submitting a phone number to a pending charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhoneRequest {
    /// Phone number.
    pub phone: String,
    /// Charge reference.
    pub reference: String,
}

/// Body for submitting a birthday to a pending charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BirthdayRequest {
    /// Date of birth, `YYYY-MM-DD`.
    pub birthday: String,
    /// Charge reference.
    pub reference: String,
}

/// Body for creating or updating a payment page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fixed amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Extra fields to collect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,
    /// Where to send the customer after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Whether the page accepts payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Body for creating or updating a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanRequest {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Amount per interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Billing interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Email invoices to subscribers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    /// Send SMS notifications to subscribers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Number of invoices to raise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_limit: Option<i64>,
}

/// Body for creating or updating a subaccount.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubaccountRequest {
    /// Business name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_name: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,
    /// Extra metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Percentage kept by the main account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_charge: Option<f64>,
    /// Settlement bank code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_bank: Option<String>,
    /// Settlement account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// `"auto"`, `"weekly"`, `"monthly"` or `"manual"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_schedule: Option<String>,
}

/// Body for creating a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionRequest {
    /// Customer code or email.
    pub customer: String,
    /// Plan code.
    pub plan: String,
    /// Authorization to charge; defaults to the customer's latest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    /// First charge date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

/// Body for enabling or disabling a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionToggleRequest {
    /// Subscription code.
    pub code: String,
    /// Email token of the subscription.
    pub token: String,
}

/// Body for a single transfer, alone or inside a bulk transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransferRequest {
    /// Funding source, usually `"balance"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Amount in the currency's subunit.
    pub amount: i64,
    /// Recipient code.
    pub recipient: String,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Narration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Unique reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Body for finalizing a transfer with its OTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinalizeTransferRequest {
    /// Transfer code.
    pub transfer_code: String,
    /// OTP sent to the business phone.
    pub otp: String,
}

/// Body for initiating many transfers at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkTransferRequest {
    /// Funding source, usually `"balance"`.
    pub source: String,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// The transfers.
    pub transfers: Vec<TransferRequest>,
}

/// Body for resending a transfer OTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResendOtpRequest {
    /// Transfer code.
    pub transfer_code: String,
    /// `"resend_otp"` or `"transfer"`.
    pub reason: String,
}

/// Body for confirming that transfer OTPs should be turned off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisableOtpFinalizeRequest {
    /// OTP sent to the business phone.
    pub otp: String,
}

/// Body for creating a transfer recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransferRecipientRequest {
    /// Recipient type, e.g. `"nuban"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Recipient name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Bank code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Extra metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// One charge in a bulk charge batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkChargeItem {
    /// Authorization code to charge.
    pub authorization: String,
    /// Amount in the currency's subunit.
    pub amount: i64,
}

/// Body for changing the checkout session timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaymentSessionRequest {
    /// Timeout in seconds; 0 disables it.
    pub timeout: i64,
}
